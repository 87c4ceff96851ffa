use std::path::{Path, PathBuf};

#[test]
fn enabled_contracts_in_declared_order() {
    let request = super::bs721_bindings(None);

    let names: Vec<&str> = request
        .contracts
        .iter()
        .map(|contract| &*contract.name)
        .collect();

    assert_eq!(names, ["Bs721Base", "Bs721Launchpad"]);

    assert_eq!(
        request.contracts[0].schema_dir,
        Path::new("../contracts/bs721-base/schema")
    );

    assert_eq!(
        request.contracts[1].schema_dir,
        Path::new("../contracts/bs721-launchpad/schema")
    );
}

#[test]
fn default_out_path() {
    assert_eq!(
        super::bs721_bindings(None).out_path,
        Path::new(super::DEFAULT_OUT_PATH)
    );

    assert_eq!(super::DEFAULT_OUT_PATH, "./src/");
}

#[test]
fn out_path_override_replaces_default() {
    assert_eq!(
        super::bs721_bindings(Some(PathBuf::from("./generated/"))).out_path,
        Path::new("./generated/")
    );
}

#[test]
fn artifact_switches_mirror_declared_literals() {
    let options = super::bs721_bindings(None).options;

    let bundle = options
        .bundle
        .expect("Bundling has to be enabled for the bs721 suite!");

    assert_eq!(&*bundle.bundle_file, "index.ts");

    assert_eq!(&*bundle.scope, "contracts");

    assert!(options.types.enabled);

    assert!(options.client.enabled);

    assert!(!options.react_query.enabled);

    assert!(!options.recoil.enabled);

    assert!(options.message_composer.enabled);
}
