use std::io::stdout;

use anyhow::Result;
use clap::Parser as _;

use crate::args::Args;

mod args;
mod error;
mod generate;
mod generator;
mod request;

fn main() -> Result<()> {
    let Args {
        generator_path,
        out_path,
        print_command,
    } = Args::parse();

    let request = request::bs721_bindings(out_path);

    let generate = generator::command_functor(generator_path, print_command)?;

    generate::run(&request, generate, &mut stdout().lock())
}
