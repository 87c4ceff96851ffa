use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

use codegen_config::GenerationRequest;

use crate::error::Error;

/// Builds the functor invoking the external bindings generator.
///
/// The generator receives the serialized request on its standard input and
/// signals completion through its exit status.
pub(crate) fn command_functor(
    generator_path: PathBuf,
    print_command: bool,
) -> Result<impl FnOnce(&GenerationRequest) -> Result<()>> {
    resolve_generator_path(generator_path)
        .context("Failed to resolve the bindings generator's path!")
        .map(|generator_path| {
            move |request: &GenerationRequest| {
                execute(
                    Command::new(generator_path.into_os_string()),
                    print_command,
                    request,
                )
            }
        })
}

fn execute(mut command: Command, print_command: bool, request: &GenerationRequest) -> Result<()> {
    command.stdin(Stdio::piped());

    if print_command {
        println!("\t>>> {:?}", command.get_program());
    }

    let mut child = command
        .spawn()
        .context("Failed to spawn the bindings generator!")?;

    {
        let mut stdin = child
            .stdin
            .take()
            .context("Bindings generator's standard input was not captured!")?;

        serde_json::to_writer(&mut stdin, request).map_err(Error::RequestSerialization)?;
    }

    child
        .wait()
        .context("Failed to await the bindings generator!")
        .and_then(|exit_status| {
            if exit_status.success() {
                Ok(())
            } else {
                Err(Error::GeneratorFailure(exit_status).into())
            }
        })
}

fn resolve_generator_path(generator_path: PathBuf) -> Result<PathBuf> {
    if generator_path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty())
    {
        generator_path
            .canonicalize()
            .context("Failed to canonicalize the bindings generator's path!")
    } else {
        Ok(generator_path)
    }
}
