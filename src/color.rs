use image::Rgba;

use crate::error::{Error, Result};

/// Parses a hex color string (e.g. `#fff` or `#ffffff`) into an opaque RGBA pixel.
///
/// The leading `#` is optional. Six digits are read as `RRGGBB`; three digits are
/// expanded by repeating each nibble, so `#f80` becomes `#ff8800`.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if the string (without `#`) is not 3 or 6 hex digits long.
///
/// # Example
///
/// ```rust
/// use qrstyle::color::parse_hex_color;
///
/// let color = parse_hex_color("#f54b37").unwrap();
/// assert_eq!(color.0, [245, 75, 55, 255]);
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || Error::InvalidColor(s.to_string());

    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let [r, g, b] = match digits.as_slice() {
        &[r1, r0, g1, g0, b1, b0] => [(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0],
        &[r, g, b] => [r * 17, g * 17, b * 17],
        _ => return Err(invalid()),
    };

    Ok(Rgba([r, g, b, 255]))
}
