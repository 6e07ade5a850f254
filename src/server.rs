//! HTTP front end: PNG rendering on `/qrcode` and an HTML form on every other path.
//!
//! Routing is a pure function ([`handle`]) so it can be exercised without a socket; [`serve`]
//! binds a `tiny_http` server and answers each request on its own thread.

use std::io;
use std::thread;

use log::{info, warn};
use tiny_http::{Header, Request, Response, Server};

use crate::error::{Error, Result};
use crate::helper::encode_png;
use crate::render::render;

/// Color used when the query string has none.
pub const DEFAULT_COLOR: &str = "#f54b37";

/// Style used when the query string has none.
pub const DEFAULT_STYLE: &str = "square";

/// Listening address used when none is given.
pub const DEFAULT_ADDR: &str = ":8080";

const FORM_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>QR Code Generator</title>
<style>
body { font-family: sans-serif; background: #181818; color: #fff; display: flex; flex-direction: column; align-items: center; padding: 1rem; margin: 0; }
form { margin: 2em 0; width: 100%; max-width: 500px; }
input[type=text] { width: 100%; padding: 0.8em; margin: 0.5em 0; border-radius: 8px; border: none; box-sizing: border-box; font-size: 16px; }
input[type=color] { width: 100%; padding: 0.5em; margin: 0.5em 0; border-radius: 8px; border: none; height: 50px; }
button { width: 100%; padding: 1em; margin-top: 1em; border-radius: 8px; border: none; background: #f54b37; color: #fff; font-weight: bold; cursor: pointer; font-size: 16px; }
label { display: block; margin: 1em 0 0.5em 0; }
h1 { font-size: 1.8rem; text-align: center; }
</style>
</head>
<body>
<h1>QR Code Generator</h1>
<form method="GET" action="/qrcode">
    <label for="url">URL:</label>
    <input type="text" id="url" name="url" value="https://example.com" required>
    <label for="color">Color:</label>
    <input type="color" id="color" name="color" value="#f54b37">
    <label>Style: <select name="style">
        <option value="square">Square</option>
        <option value="rounded">Rounded</option>
        <option value="triangle">Triangle</option>
    </select></label>
    <button type="submit">Generate QR Code</button>
</form>
</body>
</html>
"##;

/// A response produced by [`handle`], independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into().into_bytes(),
        }
    }
}

/// Parameters of a `/qrcode` request after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrQuery {
    pub url: Option<String>,
    pub color: String,
    pub style: String,
}

impl QrQuery {
    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// Only the first occurrence of each key is used, and an empty first value counts as absent,
    /// so `url=&url=x` has no url.
    pub fn parse(query: &str) -> Self {
        let mut url = None;
        let mut color = None;
        let mut style = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "url" => &mut url,
                "color" => &mut color,
                "style" => &mut style,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        let present = |v: Option<String>| v.filter(|v| !v.is_empty());
        Self {
            url: present(url),
            color: present(color).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            style: present(style).unwrap_or_else(|| DEFAULT_STYLE.to_string()),
        }
    }
}

/// Routes a request target (path plus optional query string) to a [`Reply`].
///
/// `/qrcode` renders a PNG; every other path, `/` included, serves the form.
pub fn handle(target: &str) -> Reply {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    match path {
        "/qrcode" => qrcode_reply(&QrQuery::parse(query)),
        _ => Reply {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: FORM_HTML.as_bytes().to_vec(),
        },
    }
}

fn qrcode_reply(query: &QrQuery) -> Reply {
    let Some(url) = query.url.as_deref() else {
        return Reply::text(400, "Missing url parameter");
    };

    match render(url, &query.color, &query.style).and_then(|img| encode_png(&img)) {
        Ok(body) => Reply {
            status: 200,
            content_type: "image/png",
            body,
        },
        Err(e) => {
            warn!("failed to generate QR code for {:?}: {}", url, e);
            Reply::text(500, format!("Failed to generate QR code: {}", e))
        }
    }
}

/// Turns a Go-style `:port` address into one that binds on every interface.
pub fn normalize_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}

fn respond(request: Request) {
    let target = request.url().to_string();
    let reply = handle(&target);
    info!("{} {} -> {}", request.method(), target, reply.status);

    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes("Content-Type", reply.content_type) {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        warn!("failed to write response for {}: {}", target, e);
    }
}

/// Binds `addr` and serves requests until the process exits.
///
/// # Errors
///
/// Returns [`Error::Io`] if the address cannot be bound.
pub fn serve(addr: &str) -> Result<()> {
    let bind = normalize_addr(addr);
    let server = Server::http(&bind).map_err(|e| {
        let msg = format!("failed to listen on {}: {}", bind, e);
        Error::Io(io::Error::new(io::ErrorKind::Other, msg))
    })?;
    info!("Server running at http://{}", bind);

    for request in server.incoming_requests() {
        thread::spawn(move || respond(request));
    }
    Ok(())
}
