//! # qrstyle
//!
//! A Rust library for rendering QR codes as stylized raster images.
//!
//! `qrstyle` takes the module matrix of a QR code (encoded at the highest error correction level)
//! and paints it into an RGBA image: a solid black background with every dark module drawn in a
//! color of your choice. Data modules can be squares, rounded squares or triangles, while finder
//! and timing patterns are always drawn as slightly oversized plain squares so the code stays easy
//! to scan.
//!
//! ## Features
//!
//! - Three module styles: square, rounded (corner radius of 3 × scale) and triangle.
//! - Any color given as `#rgb` or `#rrggbb`.
//! - Deterministic output: the same input always produces the same pixels.
//! - PNG output to memory or to a file, plus a small HTTP server (see [`server`]).
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrstyle = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a rounded QR code and save it:
//!
//! ```no_run
//! use qrstyle::helper::save_png;
//!
//! fn main() -> qrstyle::Result<()> {
//!     let img = qrstyle::render("https://example.com", "#f54b37", "rounded")?;
//!     save_png(&img, "output/styled_qr.png")?;
//!     Ok(())
//! }
//! ```
//!
//! Pick a smaller scale with an explicit configuration:
//!
//! ```rust
//! use qrstyle::{render_with, RenderConfig, Style};
//!
//! let config = RenderConfig::default().with_scale(1).with_style(Style::Triangle);
//! let img = render_with("Hello, World!", "#fff", &config).unwrap();
//! assert_eq!(img.width() % 8, 0);
//! ```
//!
//! ## Modules
//!
//! - [`mod@render`]: The compositor and its [`RenderConfig`].
//! - [`shapes`]: Square, rounded square and triangle painters.
//! - [`structure`]: Finder and timing pattern classification.
//! - [`color`]: Hex color parsing.
//! - [`matrix`]: The module matrix handed over by the encoder.
//! - [`helper`]: PNG output.
//! - [`server`]: HTML form and PNG endpoint over HTTP.

#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod helper;
pub mod matrix;
pub mod render;
pub mod server;
pub mod shapes;
pub mod structure;
pub mod style;

pub use error::{Error, Result};
pub use render::{render, render_matrix, render_with, RenderConfig};
pub use style::Style;
