use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
pub(crate) struct Args {
    #[arg(
        long,
        env = "TS_CODEGEN",
        default_value_os_t = PathBuf::from("cosmwasm-ts-codegen"),
        help = "The bindings generator executable the assembled request is handed to."
    )]
    pub generator_path: PathBuf,
    #[arg(
        long,
        help = "Overrides the directory the generated sources are written under."
    )]
    pub out_path: Option<PathBuf>,
    #[arg(long)]
    pub print_command: bool,
}
