//! Export command: JSON canvas to PNG

use std::path::Path;
use std::process::ExitCode;

use crate::output::{load_json, save_png};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the export command
pub fn run_export(input: &Path, output: Option<&Path>) -> ExitCode {
    let target = output.map(Path::to_path_buf).unwrap_or_else(|| input.with_extension("png"));
    if target == input {
        eprintln!("Error: output '{}' would overwrite the input", target.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let canvas = match load_json(input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = save_png(&canvas, &target) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {}", target.display());
    ExitCode::from(EXIT_SUCCESS)
}
