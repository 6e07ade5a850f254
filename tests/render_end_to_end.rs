//! End-to-end rendering through the public API

use image::Rgba;
use pretty_assertions::assert_eq;
use qrstyle::matrix::ModuleMatrix;
use qrstyle::render::BACKGROUND;
use qrstyle::structure::is_structural;
use qrstyle::{render, render_matrix, render_with, Error, RenderConfig, Style};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const URL: &str = "https://example.com";

/// First dark data module far enough from every structural block that no oversized square
/// reaches its cell.
fn isolated_data_module(matrix: &ModuleMatrix) -> (usize, usize) {
    let n = matrix.size();
    matrix
        .dark_modules()
        .find(|&(x, y)| x >= 8 && y >= 8 && !is_structural(x, y, n))
        .expect("matrix has a dark module outside the structural regions")
}

#[test]
fn rounded_white_on_black() {
    let scale = 2;
    let cfg = RenderConfig::default().with_scale(scale).with_style(Style::Rounded);
    let img = render_with(URL, "#ffffff", &cfg).unwrap();
    let matrix = ModuleMatrix::encode(URL).unwrap();
    let n = matrix.size() as u32;
    let cell = 8 * scale;
    assert_eq!(img.dimensions(), (n * cell, n * cell));

    // Only background and foreground colors are ever written.
    assert!(img.pixels().all(|p| *p == BACKGROUND || *p == WHITE));

    // The light separator next to the top-left finder stays black at its center.
    assert!(!matrix.get_module(7, 0));
    assert_eq!(*img.get_pixel(7 * cell + cell / 2, cell / 2), BACKGROUND);

    // Finder module (6, 0) is an oversized square spilling `scale` pixels into column 7.
    assert!(matrix.get_module(6, 0));
    assert_eq!(*img.get_pixel(7 * cell + scale - 1, cell / 2), WHITE);
    assert_eq!(*img.get_pixel(7 * cell + scale, cell / 2), BACKGROUND);
    // Its top-left corner is square, not rounded.
    assert_eq!(*img.get_pixel(6 * cell, 0), WHITE);

    // Data modules have rounded corners and a filled center.
    let (x, y) = isolated_data_module(&matrix);
    let (px, py) = (x as u32 * cell, y as u32 * cell);
    assert_eq!(*img.get_pixel(px, py), BACKGROUND);
    assert_eq!(*img.get_pixel(px + cell - 1, py + cell - 1), BACKGROUND);
    assert_eq!(*img.get_pixel(px + cell / 2, py + cell / 2), WHITE);
    assert_eq!(*img.get_pixel(px + cell / 2, py), WHITE);

    // The top edge starts exactly `3 * scale` pixels in from each corner.
    let r = 3 * scale;
    assert_eq!(*img.get_pixel(px + r - 1, py), BACKGROUND);
    assert_eq!(*img.get_pixel(px + r, py), WHITE);
    assert_eq!(*img.get_pixel(px + cell - r, py), BACKGROUND);
    assert_eq!(*img.get_pixel(px + cell - 1 - r, py), WHITE);
    assert_eq!(*img.get_pixel(px, py + r - 1), BACKGROUND);
    assert_eq!(*img.get_pixel(px, py + r), WHITE);
}

#[test]
fn square_style_fills_data_cells() {
    let cfg = RenderConfig::default().with_scale(1);
    let img = render_with(URL, "#f54b37", &cfg).unwrap();
    let matrix = ModuleMatrix::encode(URL).unwrap();
    let (x, y) = isolated_data_module(&matrix);
    let fg = Rgba([245, 75, 55, 255]);
    for dy in 0..8 {
        for dx in 0..8 {
            assert_eq!(*img.get_pixel(x as u32 * 8 + dx, y as u32 * 8 + dy), fg);
        }
    }
}

#[test]
fn bottom_right_corner_follows_style() {
    // All-dark matrix: the bottom-right corner is not a finder, so it is styled.
    let matrix = ModuleMatrix::from_rows(&vec![vec![true; 21]; 21]);
    let cfg = RenderConfig::default().with_scale(1).with_style(Style::Triangle);
    let img = render_matrix(&matrix, WHITE, &cfg).unwrap();
    let last = 21 * 8 - 1;
    assert_eq!(*img.get_pixel(last, last - 7), BACKGROUND);
    assert_eq!(*img.get_pixel(0, last), WHITE);
    assert_eq!(*img.get_pixel(last, 0), WHITE);
}

#[test]
fn same_input_same_pixels() {
    for style in ["square", "rounded", "triangle"] {
        let a = render(URL, "#0af", style).unwrap();
        let b = render(URL, "#0af", style).unwrap();
        assert!(a == b, "style {} is not deterministic", style);
    }
}

#[test]
fn unknown_style_renders_as_square() {
    let cfg = RenderConfig::default().with_scale(1);
    let square = render_with(URL, "#fff", &cfg).unwrap();
    let hexagon = cfg.with_style(Style::parse_lenient("hexagon"));
    let fallback = render_with(URL, "#fff", &hexagon).unwrap();
    assert!(square == fallback);
}

#[test]
fn errors_surface_their_cause() {
    match render(URL, "#12", "square") {
        Err(e @ Error::InvalidColor(_)) => assert_eq!(e.to_string(), "invalid color hex: \"#12\""),
        other => panic!("expected InvalidColor, got {:?}", other.map(|img| img.dimensions())),
    }

    let too_long = "x".repeat(5000);
    match render(&too_long, "#fff", "square") {
        Err(e @ Error::Encoding(_)) => {
            assert!(e.to_string().starts_with("failed to create QR code"))
        }
        other => panic!("expected Encoding, got {:?}", other.map(|img| img.dimensions())),
    }
}
