//! Pixelpaint - command-line entry point; serves the MCP tools by default

use std::process::ExitCode;

use pixelpaint::cli;

fn main() -> ExitCode {
    cli::run()
}
