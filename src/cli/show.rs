//! Show command: text preview of a saved canvas

use std::path::Path;
use std::process::ExitCode;

use crate::output::load_json;
use crate::preview::render_preview;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command
pub fn run_show(input: &Path) -> ExitCode {
    let canvas = match load_json(input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let info = canvas.info();
    print!("{}", render_preview(&canvas));
    println!("{} of {} pixels painted", info.painted, u64::from(info.width) * u64::from(info.height));
    ExitCode::from(EXIT_SUCCESS)
}
