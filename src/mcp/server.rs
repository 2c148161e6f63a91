//! Core MCP server implementation.

use std::sync::Arc;

use parking_lot::Mutex;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use tracing::{info, warn};

use super::tools::canvas::{
    run_canvas_info, run_clear_canvas, run_create_canvas, run_list_colors, CanvasInfoInput,
    ClearCanvasInput, CreateCanvasInput,
};
use super::tools::drawing::{
    run_draw_line, run_draw_rectangle, run_flood_fill, run_set_pixel, DrawLineInput,
    DrawRectangleInput, FloodFillInput, SetPixelInput,
};
use super::tools::files::{run_load_image, run_save_image, LoadImageInput, SaveImageInput};
use super::tools::Session;
use crate::config::PaintConfig;
use crate::error::CanvasError;

/// The pixelpaint MCP server
///
/// Holds every canvas of the process. All tool calls lock the same session,
/// so operations run one at a time.
#[derive(Debug, Clone)]
pub struct PaintMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

impl PaintMcpServer {
    /// Turn a tool outcome into a text result. Failures are flagged as
    /// errors but still travel as plain text.
    fn respond(tool: &str, outcome: Result<String, CanvasError>) -> CallToolResult {
        match outcome {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!(tool, error = %e, "tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    /// Shared session, for embedding the server in tests or other hosts.
    pub fn session(&self) -> Arc<Mutex<Session>> {
        Arc::clone(&self.session)
    }
}

#[tool_router]
impl PaintMcpServer {
    pub fn new(config: PaintConfig) -> Self {
        Self { session: Arc::new(Mutex::new(Session::new(config))), tool_router: Self::tool_router() }
    }

    #[tool(description = "Create a new pixel art canvas with specified dimensions")]
    async fn create_canvas(
        &self,
        Parameters(input): Parameters<CreateCanvasInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_create_canvas(&mut self.session.lock(), input);
        Ok(Self::respond("create_canvas", outcome))
    }

    #[tool(description = "Set a single pixel to a specific color")]
    async fn set_pixel(
        &self,
        Parameters(input): Parameters<SetPixelInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_set_pixel(&mut self.session.lock(), input);
        Ok(Self::respond("set_pixel", outcome))
    }

    #[tool(description = "Draw a line between two points")]
    async fn draw_line(
        &self,
        Parameters(input): Parameters<DrawLineInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_draw_line(&mut self.session.lock(), input);
        Ok(Self::respond("draw_line", outcome))
    }

    #[tool(description = "Draw a rectangle (outline or filled)")]
    async fn draw_rectangle(
        &self,
        Parameters(input): Parameters<DrawRectangleInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_draw_rectangle(&mut self.session.lock(), input);
        Ok(Self::respond("draw_rectangle", outcome))
    }

    #[tool(description = "Fill an area with a color (bucket fill)")]
    async fn flood_fill(
        &self,
        Parameters(input): Parameters<FloodFillInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_flood_fill(&mut self.session.lock(), input);
        Ok(Self::respond("flood_fill", outcome))
    }

    #[tool(description = "Clear the entire canvas with a color")]
    async fn clear_canvas(
        &self,
        Parameters(input): Parameters<ClearCanvasInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_clear_canvas(&mut self.session.lock(), input);
        Ok(Self::respond("clear_canvas", outcome))
    }

    #[tool(description = "Save the canvas as PNG or JSON file")]
    async fn save_image(
        &self,
        Parameters(input): Parameters<SaveImageInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_save_image(&mut self.session.lock(), input);
        Ok(Self::respond("save_image", outcome))
    }

    #[tool(description = "Load a canvas from JSON file")]
    async fn load_image(
        &self,
        Parameters(input): Parameters<LoadImageInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_load_image(&mut self.session.lock(), input)
            .map_err(|e| format!("Failed to load canvas: {}", e));
        Ok(match outcome {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(message) => {
                warn!(tool = "load_image", error = %message, "tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
            }
        })
    }

    #[tool(description = "Get information about the current canvas and preview")]
    async fn get_canvas_info(
        &self,
        Parameters(input): Parameters<CanvasInfoInput>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = run_canvas_info(&self.session.lock(), input);
        Ok(Self::respond("get_canvas_info", outcome))
    }

    #[tool(description = "List all available predefined colors")]
    async fn list_colors(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(run_list_colors())]))
    }
}

#[tool_handler]
impl ServerHandler for PaintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pixelpaint-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pixelpaint MCP server - draw on named RGBA pixel canvases. Start with \
                 create_canvas, draw with set_pixel, draw_line, draw_rectangle and \
                 flood_fill, inspect with get_canvas_info, and persist with save_image \
                 (png or json) and load_image (json)."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(config: PaintConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting pixelpaint MCP server on stdio");
    let server = PaintMcpServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    info!("MCP server shutting down");
    Ok(())
}
