use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::Result;

/*---- Output helpers ----*/

/// Encodes a rendered QR code as PNG bytes, e.g. for an HTTP response body.
///
/// # Errors
///
/// Returns [`crate::Error::Image`] if the PNG encoder fails.
///
/// # Example
///
/// ```rust
/// use qrstyle::helper::encode_png;
///
/// let img = qrstyle::render("Hello, World!", "#fff", "square").unwrap();
/// let bytes = encode_png(&img).unwrap();
/// assert_eq!(&bytes[1..4], b"PNG");
/// ```
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Saves a rendered QR code as a PNG file.
///
/// Parent directories of `path` are created if they do not exist yet.
///
/// # Arguments
///
/// * `img` - The rendered QR code.
/// * `path` - Destination file. The image is always written as PNG, whatever the extension.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the directory cannot be created and [`crate::Error::Image`] if
/// the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use qrstyle::helper::save_png;
///
/// let img = qrstyle::render("https://example.com", "#f54b37", "triangle").unwrap();
/// save_png(&img, "generated/qr_code.png").unwrap();
/// ```
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    // Check if the directory exists, create it if it doesn't
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    log::debug!("wrote {}x{} PNG to {}", img.width(), img.height(), path.display());
    Ok(())
}
