//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod agent;
mod draw;
mod export;
mod info;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::load_config;
use crate::logging::init_logging;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelpaint - named RGBA pixel canvases, drawable over MCP
#[derive(Parser)]
#[command(name = "pxpaint")]
#[command(about = "Pixelpaint - pixel canvases with drawing tools for AI assistants (MCP)")]
#[command(version)]
pub struct Cli {
    /// Config file (default: discover pxpaint.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP tool server on stdin/stdout (default)
    #[command(alias = "mcp")]
    Serve,

    /// List the predefined color names
    Colors,

    /// Print a text preview of a saved JSON canvas
    Show {
        /// Canvas file written by save_image (format json)
        input: PathBuf,
    },

    /// Convert a saved JSON canvas to PNG
    Export {
        /// Canvas file written by save_image (format json)
        input: PathBuf,

        /// Output PNG (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw on a saved JSON canvas
    ///
    /// Operations run in a fixed order: clear, filled rects, outline rects,
    /// lines, pixels, flood fills.
    Draw {
        /// Canvas file to modify (json)
        input: PathBuf,

        /// Clear every pixel to a color first
        #[arg(long, value_name = "COLOR")]
        clear: Option<String>,

        /// Filled rectangle: x,y,w,h=color (e.g. --fill 0,0,16,4=blue)
        #[arg(long, value_name = "X,Y,W,H=COLOR")]
        fill: Vec<String>,

        /// Rectangle outline: x,y,w,h=color (e.g. --rect 2,2,8,8=black)
        #[arg(long, value_name = "X,Y,W,H=COLOR")]
        rect: Vec<String>,

        /// Line between two points: x1,y1,x2,y2=color (e.g. --line 0,0,15,15=red)
        #[arg(long, value_name = "X1,Y1,X2,Y2=COLOR")]
        line: Vec<String>,

        /// Single pixel: x,y=color (e.g. --set 5,10=#ff8800)
        #[arg(long, value_name = "X,Y=COLOR")]
        set: Vec<String>,

        /// Flood fill from a seed point: x,y=color (e.g. --flood 5,5=yellow)
        #[arg(long, value_name = "X,Y=COLOR")]
        flood: Vec<String>,

        /// Output file, .json or .png (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let _ = init_logging(&config.log.level, cli.verbose);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => agent::run_serve(config),
        Commands::Colors => info::run_colors(),
        Commands::Show { input } => show::run_show(&input),
        Commands::Export { input, output } => export::run_export(&input, output.as_deref()),
        Commands::Draw { input, clear, fill, rect, line, set, flood, output } => {
            let specs = draw::DrawSpecs { clear, fill, rect, line, set, flood };
            draw::run_draw(&input, &specs, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["pxpaint"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_mcp_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["pxpaint", "mcp", "-vv", "--config", "x.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_draw_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "pxpaint", "draw", "art.json", "--set", "1,1=red", "--set", "2,2=blue", "--flood",
            "0,0=white",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Draw { set, flood, rect, .. }) => {
                assert_eq!(set, vec!["1,1=red", "2,2=blue"]);
                assert_eq!(flood, vec!["0,0=white"]);
                assert!(rect.is_empty());
            }
            _ => panic!("expected draw"),
        }
    }
}
