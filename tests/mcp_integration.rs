//! MCP server integration tests.
//!
//! These tests spawn `pxpaint serve` as a subprocess and communicate via
//! JSON-RPC 2.0 over stdin/stdout, verifying the handshake, tool listing,
//! tool invocation, and error reporting.

#![cfg(feature = "mcp")]

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;

/// A lightweight MCP client that talks to a `pxpaint serve` subprocess.
struct McpClient {
    child: std::process::Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
    next_id: u64,
    // Holds the config and output dir alive for the server's lifetime
    workdir: TempDir,
}

impl McpClient {
    fn spawn() -> Self {
        let workdir = TempDir::new().expect("failed to create temp dir");
        let config = workdir.path().join("pxpaint.toml");
        std::fs::write(&config, "[output]\ndir = \"out\"\n").expect("failed to write config");

        let mut child = Command::new(env!("CARGO_BIN_EXE_pxpaint"))
            .arg("serve")
            .arg("--config")
            .arg(&config)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to spawn pxpaint serve");

        let stdin = child.stdin.take().expect("no stdin");
        let stdout = child.stdout.take().expect("no stdout");
        let reader = BufReader::new(stdout);

        McpClient { child, stdin, reader, next_id: 1, workdir }
    }

    fn out_dir(&self) -> &Path {
        self.workdir.path()
    }

    /// Send a JSON-RPC request and return the parsed response.
    fn request(&mut self, method: &str, params: serde_json::Value) -> serde_json::Value {
        let id = self.next_id;
        self.next_id += 1;

        let msg = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let line = serde_json::to_string(&msg).unwrap();
        writeln!(self.stdin, "{}", line).expect("write to stdin failed");
        self.stdin.flush().expect("flush stdin failed");

        let mut buf = String::new();
        self.reader.read_line(&mut buf).expect("read from stdout failed");
        serde_json::from_str(&buf)
            .unwrap_or_else(|e| panic!("failed to parse response JSON: {}\nraw: {}", e, buf))
    }

    /// Send the initialize handshake and return the result.
    fn initialize(&mut self) -> serde_json::Value {
        let resp = self.request(
            "initialize",
            serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "0.1.0"
                }
            }),
        );

        let notif = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized",
        });
        let line = serde_json::to_string(&notif).unwrap();
        writeln!(self.stdin, "{}", line).expect("write notification failed");
        self.stdin.flush().expect("flush notification failed");

        std::thread::sleep(Duration::from_millis(50));

        resp
    }

    fn list_tools(&mut self) -> serde_json::Value {
        self.request("tools/list", serde_json::json!({}))
    }

    fn call_tool(&mut self, name: &str, args: serde_json::Value) -> serde_json::Value {
        self.request(
            "tools/call",
            serde_json::json!({
                "name": name,
                "arguments": args,
            }),
        )
    }

    /// Call a tool and return `(text, is_error)`.
    fn call_text(&mut self, name: &str, args: serde_json::Value) -> (String, bool) {
        let resp = self.call_tool(name, args);
        let result = resp.get("result").unwrap_or_else(|| panic!("{} returned no result: {:?}", name, resp));
        let is_error = result.get("isError").and_then(|e| e.as_bool()).unwrap_or(false);
        let content = result["content"].as_array().expect("content should be array");
        assert_eq!(content[0]["type"].as_str().unwrap(), "text");
        (content[0]["text"].as_str().unwrap().to_string(), is_error)
    }

    /// Shut down by closing stdin, which causes the server to exit.
    fn shutdown(mut self) {
        drop(self.stdin);
        let _ = self.child.wait();
    }
}

// ── Handshake ─────────────────────────────────────────────────────────

#[test]
fn test_mcp_initialize_handshake() {
    let mut client = McpClient::spawn();
    let resp = client.initialize();

    let result = resp.get("result").expect("initialize should return result");
    assert_eq!(result["protocolVersion"].as_str().unwrap(), "2024-11-05");

    let info = &result["serverInfo"];
    assert_eq!(info["name"].as_str().unwrap(), "pixelpaint-mcp");
    assert!(info["version"].as_str().is_some(), "version should be present");
    assert!(result["capabilities"].get("tools").is_some(), "tools capability should be present");

    client.shutdown();
}

// ── Tool Listing ──────────────────────────────────────────────────────

#[test]
fn test_mcp_tools_list() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.list_tools();
    let result = resp.get("result").expect("tools/list should return result");
    let tools = result["tools"].as_array().expect("tools should be an array");
    assert_eq!(tools.len(), 10, "expected 10 tools, got {}", tools.len());

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    let expected = [
        "create_canvas",
        "set_pixel",
        "draw_line",
        "draw_rectangle",
        "flood_fill",
        "clear_canvas",
        "save_image",
        "load_image",
        "get_canvas_info",
        "list_colors",
    ];
    for name in &expected {
        assert!(names.contains(name), "missing tool: {}", name);
    }

    for tool in tools {
        let name = tool["name"].as_str().unwrap();
        assert!(
            tool.get("description").and_then(|d| d.as_str()).is_some(),
            "tool {} missing description",
            name
        );
        let schema =
            tool.get("inputSchema").unwrap_or_else(|| panic!("tool {} missing inputSchema", name));
        assert_eq!(schema["type"].as_str().unwrap(), "object", "tool {} schema type", name);
    }

    client.shutdown();
}

// ── Tool Calls ────────────────────────────────────────────────────────

#[test]
fn test_mcp_draw_and_inspect() {
    let mut client = McpClient::spawn();
    client.initialize();

    let (text, err) =
        client.call_text("create_canvas", serde_json::json!({ "width": 8, "height": 4 }));
    assert!(!err);
    assert_eq!(text, "Created canvas \"default\" with dimensions 8x4");

    let (text, err) = client
        .call_text("set_pixel", serde_json::json!({ "x": 0, "y": 0, "color": "black" }));
    assert!(!err);
    assert_eq!(text, "Set pixel at (0, 0) to black");

    let (text, err) = client.call_text(
        "draw_rectangle",
        serde_json::json!({ "x": 4, "y": 0, "width": 4, "height": 4, "color": "#FFFFFF", "filled": true }),
    );
    assert!(!err);
    assert_eq!(text, "Drew filled rectangle at (4, 0) size 4x4 in #FFFFFF");

    let (text, err) = client.call_text("get_canvas_info", serde_json::json!({}));
    assert!(!err);
    assert!(text.starts_with("Canvas dimensions: 8x4\n\n"), "got: {}", text);
    assert!(text.contains("Canvas 8x4:\n"));
    assert!(text.contains('█'));
    assert!(text.contains('░'));

    client.shutdown();
}

#[test]
fn test_mcp_errors_are_text_results() {
    let mut client = McpClient::spawn();
    client.initialize();

    let (text, err) = client.call_text(
        "draw_line",
        serde_json::json!({ "canvas_name": "ghost", "x1": 0, "y1": 0, "x2": 1, "y2": 1, "color": "red" }),
    );
    assert!(err);
    assert_eq!(text, "Error: Canvas \"ghost\" not found. Create it first with create_canvas.");

    client.call_text("create_canvas", serde_json::json!({ "width": 5, "height": 5 }));
    let (text, err) =
        client.call_text("set_pixel", serde_json::json!({ "x": 5, "y": 0, "color": "red" }));
    assert!(err);
    assert!(text.contains("out of bounds"), "got: {}", text);

    let (text, err) =
        client.call_text("set_pixel", serde_json::json!({ "x": 0, "y": 0, "color": "notacolor" }));
    assert!(err);
    assert_eq!(text, "Error: Invalid color: notacolor");

    // The server keeps answering after failures
    let (_, err) = client.call_text("list_colors", serde_json::json!({}));
    assert!(!err);

    client.shutdown();
}

#[test]
fn test_mcp_save_and_load() {
    let mut client = McpClient::spawn();
    client.initialize();

    client.call_text("create_canvas", serde_json::json!({ "width": 3, "height": 3, "name": "art" }));
    client.call_text(
        "flood_fill",
        serde_json::json!({ "canvas_name": "art", "x": 1, "y": 1, "color": "orange" }),
    );

    let (text, err) = client.call_text(
        "save_image",
        serde_json::json!({ "canvas_name": "art", "filename": "art.json", "format": "json" }),
    );
    assert!(!err);
    assert_eq!(text, "Saved canvas as JSON to art.json");
    assert!(client.out_dir().join("out/art.json").exists());

    let (text, err) =
        client.call_text("save_image", serde_json::json!({ "canvas_name": "art", "filename": "art.png" }));
    assert!(!err);
    assert_eq!(text, "Saved canvas as PNG to art.png");
    let img = image::open(client.out_dir().join("out/art.png")).unwrap();
    assert_eq!((img.width(), img.height()), (3, 3));

    let (text, err) =
        client.call_text("load_image", serde_json::json!({ "filename": "art.json", "canvas_name": "copy" }));
    assert!(!err);
    assert_eq!(text, "Loaded canvas from art.json as \"copy\"");

    let (text, err) =
        client.call_text("load_image", serde_json::json!({ "filename": "missing.json" }));
    assert!(err);
    assert!(text.starts_with("Error: Failed to load canvas: "), "got: {}", text);

    client.shutdown();
}

#[test]
fn test_mcp_list_colors() {
    let mut client = McpClient::spawn();
    client.initialize();

    let (text, err) = client.call_text("list_colors", serde_json::json!({}));
    assert!(!err);
    for name in ["transparent", "black", "orange", "pink", "darkgray"] {
        assert!(text.contains(name), "missing color {} in {}", name, text);
    }

    client.shutdown();
}
