//! `tiny_http` server adapter
//!
//! Runs the accept loop, turns each request into [`RequestParts`], routes it,
//! and writes the [`Reply`] back.

use std::io::Read;

use tiny_http::{Request, Server};

use crate::app::App;

use super::http::{Reply, RequestParts};
use super::routes::route;

/// Largest request body read, in bytes
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Serve requests on `addr` until the process is stopped
pub fn serve(app: &App, addr: &str) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    log::info!("listening on http://{addr}");

    for request in server.incoming_requests() {
        handle(app, request);
    }

    Ok(())
}

fn handle(app: &App, mut request: Request) {
    let reply = match read_request(&mut request) {
        Ok(parts) => {
            let reply = route(app, &parts);
            log::info!("{} {} -> {}", parts.method, parts.path(), reply.status);
            reply
        },
        Err(reply) => {
            log::warn!("{} {} -> {} (body rejected)", request.method(), request.url(), reply.status);
            reply
        },
    };

    if let Err(e) = request.respond(reply.into_response()) {
        log::warn!("failed to send response: {e}");
    }
}

/// Extract method, url, cookie header and body from a request
fn read_request(request: &mut Request) -> Result<RequestParts, Reply> {
    let cookie = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Cookie"))
        .map(|h| h.value.as_str().to_string());

    let body = read_body(request.as_reader(), MAX_BODY_BYTES)?;

    Ok(RequestParts {
        method: request.method().clone(),
        url: request.url().to_string(),
        cookie,
        body,
    })
}

/// Read at most `limit` bytes of UTF-8; 413 when the body is longer
fn read_body<R: Read>(reader: R, limit: u64) -> Result<String, Reply> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| Reply::text(400, &format!("Failed to read request body: {e}")))?;

    if u64::try_from(bytes.len()).unwrap_or(u64::MAX) > limit {
        return Err(Reply::text(413, &format!("Request body exceeds {limit} bytes")));
    }
    String::from_utf8(bytes).map_err(|_| Reply::text(400, "Request body is not valid UTF-8"))
}
