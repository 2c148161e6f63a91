//! Palette listing command

use std::process::ExitCode;

use crate::color::palette_listing;

use super::EXIT_SUCCESS;

/// Execute the colors command
pub fn run_colors() -> ExitCode {
    println!("{}", palette_listing());
    ExitCode::from(EXIT_SUCCESS)
}
