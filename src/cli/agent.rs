//! MCP server command

use std::process::ExitCode;

use crate::config::PaintConfig;

#[cfg(feature = "mcp")]
use super::EXIT_SUCCESS;
use super::EXIT_ERROR;

/// Execute the MCP server command
#[cfg(feature = "mcp")]
pub fn run_serve(config: PaintConfig) -> ExitCode {
    use tokio::runtime::Runtime;

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match rt.block_on(crate::mcp::run_server(config)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: MCP server failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the MCP server command
#[cfg(not(feature = "mcp"))]
pub fn run_serve(_config: PaintConfig) -> ExitCode {
    eprintln!("Error: pxpaint was built without the `mcp` feature");
    ExitCode::from(EXIT_ERROR)
}
