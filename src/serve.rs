//! Preview server.
//!
//! A small `tiny_http` server over the build output directory:
//!
//! - Static file serving with content types guessed from the extension
//! - `index.html` resolution for directories
//! - Rebuild on change (via `watch` module)
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (File Monitor)  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//!    Handle requests         Detect changes
//!    Serve files             Trigger rebuild
//!          │                       │
//!          └───────────┬───────────┘
//!                      ▼
//!              config.build.output
//! ```

use crate::{
    build::INDEX_FILE,
    config::{SiteConfig, cfg},
    log,
    watch::watch_for_changes_blocking,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Cursor,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the preview server with optional file watching.
///
/// This function:
/// 1. Binds to the configured interface and port (with auto-retry on port conflict)
/// 2. Sets up Ctrl+C handler for graceful shutdown
/// 3. Spawns file watcher thread (if enabled)
/// 4. Enters the main request handling loop
///
/// The server blocks until Ctrl+C is received.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", c.serve.interface))?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    if c.serve.watch {
        std::thread::spawn(move || {
            if let Err(err) = watch_for_changes_blocking() {
                log!("error"; "watcher stopped: {err:#}");
            }
        });
    }

    for request in server.incoming_requests() {
        // Re-load config on each request to pick up hot-reloaded changes
        if let Err(e) = handle_request(request, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request.
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    match resolve_path(&config.build.output, request.url()) {
        Some(path) => serve_file(request, &path),
        None => serve_not_found(request),
    }
}

/// Map a request URL onto a file below `serve_root`.
///
/// Resolution order:
/// 1. Exact file match
/// 2. Directory with `index.html`
///
/// Query strings are ignored; `..` segments never resolve.
fn resolve_path(serve_root: &Path, url: &str) -> Option<PathBuf> {
    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(url)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    // Strip query string (e.g., ?t=123456) before resolving path
    let path_without_query = url_path.split('?').next().unwrap_or(&url_path);
    let request_path = Path::new(path_without_query.trim_matches('/'));

    if request_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let local_path = serve_root.join(request_path);
    if local_path.is_file() {
        return Some(local_path);
    }

    let index_path = local_path.join(INDEX_FILE);
    index_path.is_file().then_some(index_path)
}

// ============================================================================
// Response Helpers
// ============================================================================

fn content_type_header(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value)
        .map_err(|()| anyhow!("invalid content type header: {value}"))
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response =
        Response::from_data(content).with_header(content_type_header(guess_content_type(path))?);

    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn serve_not_found(request: Request) -> Result<()> {
    let body = "404 Not Found";
    let response = Response::new(
        StatusCode(404),
        vec![content_type_header("text/plain")?],
        Cursor::new(body),
        Some(body.len()),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}
