use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("Bindings generator exited with failure! Status: {0}")]
    GeneratorFailure(ExitStatus),
    #[error("Serializing the generation request failed! Context: {0}")]
    RequestSerialization(#[from] serde_json::Error),
}
