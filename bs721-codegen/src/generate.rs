use std::io::Write;

use anyhow::{Context, Result};

use codegen_config::GenerationRequest;


const CONFIRMATION: &str = "✨ all done!";

/// One generation pass: hands the request to the generator exactly once and
/// writes the confirmation line only after the generator reports success.
pub(crate) fn run<GenerateFunctor, ConfirmationSink>(
    request: &GenerationRequest,
    generate: GenerateFunctor,
    confirmation_sink: &mut ConfirmationSink,
) -> Result<()>
where
    GenerateFunctor: FnOnce(&GenerationRequest) -> Result<()>,
    ConfirmationSink: Write,
{
    generate(request)
        .context("Error occurred while running the bindings generator!")
        .and_then(|()| {
            writeln!(confirmation_sink, "{CONFIRMATION}")
                .context("Couldn't write confirmation to STDOUT!")
        })
}
