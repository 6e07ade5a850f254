use image::{Rgba, RgbaImage};

use crate::color::parse_hex_color;
use crate::error::{Error, Result};
use crate::matrix::ModuleMatrix;
use crate::shapes::{fill_centered_square, fill_rounded_square, fill_square, fill_triangle};
use crate::structure::is_structural;
use crate::style::Style;

/// Pixels per module cell at scale 1.
pub const MODULE_CELL: u32 = 8;

/// Side of the plain square drawn for finder and timing modules at scale 1.
/// Larger than [`MODULE_CELL`] on purpose: the square bleeds into neighbouring cells.
pub const STRUCTURAL_CELL: u32 = 10;

/// Corner radius of [`Style::Rounded`] modules at scale 1.
pub const CORNER_RADIUS: u32 = 3;

/// Scale used when none is given.
pub const DEFAULT_SCALE: u32 = 10;

/// Largest accepted scale. A version 40 symbol (177 modules) renders to 22656 pixels per side.
pub const MAX_SCALE: u32 = 16;

/// Background color of every rendered QR code.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Configuration for rendering a module matrix into pixels.
///
/// # Examples
///
/// ```
/// use qrstyle::{RenderConfig, Style};
///
/// let cfg = RenderConfig::default().with_scale(2).with_style(Style::Triangle);
/// assert_eq!(cfg.cell_size(), 16);
/// assert_eq!(cfg.structural_size(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixel multiplier applied to every base dimension
    pub scale: u32,
    /// Shape used for data modules
    pub style: Style,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            style: Style::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Side of one module cell in pixels.
    pub fn cell_size(&self) -> u32 {
        MODULE_CELL.saturating_mul(self.scale)
    }

    /// Side of the square drawn for structural modules.
    pub fn structural_size(&self) -> u32 {
        STRUCTURAL_CELL.saturating_mul(self.scale)
    }

    pub fn corner_radius(&self) -> u32 {
        CORNER_RADIUS.saturating_mul(self.scale)
    }

    /// Side of the output image for a matrix of `modules` modules per edge, or `None` if it does
    /// not fit in a `u32`.
    pub fn image_size(&self, modules: usize) -> Option<u32> {
        u32::try_from(modules)
            .ok()?
            .checked_mul(MODULE_CELL)?
            .checked_mul(self.scale)
    }

    /// Checks that the scale lies in `1..=MAX_SCALE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(Error::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Renders a QR code for `content` with the default scale.
///
/// `color_hex` is parsed with [`parse_hex_color`]. `style` is matched leniently: anything other
/// than `square`, `rounded` or `triangle` is drawn as `square`.
///
/// # Errors
///
/// [`Error::InvalidColor`] for a malformed color, [`Error::Encoding`] if the content does not fit
/// in a QR code. No image is produced on error.
///
/// # Example
///
/// ```rust
/// let img = qrstyle::render("https://example.com", "#ffffff", "rounded").unwrap();
/// assert_eq!(img.width(), img.height());
/// ```
pub fn render(content: &str, color_hex: &str, style: &str) -> Result<RgbaImage> {
    let config = RenderConfig::default().with_style(Style::parse_lenient(style));
    render_with(content, color_hex, &config)
}

/// Renders a QR code for `content` with an explicit [`RenderConfig`].
pub fn render_with(content: &str, color_hex: &str, config: &RenderConfig) -> Result<RgbaImage> {
    config.validate()?;
    let color = parse_hex_color(color_hex)?;
    let matrix = ModuleMatrix::encode(content)?;
    render_matrix(&matrix, color, config)
}

/// Paints `matrix` into a fresh image: black background, `color` for every dark module.
///
/// Dark modules inside a finder or timing pattern are drawn as an oversized centered square; all
/// other dark modules use the configured [`Style`].
///
/// # Errors
///
/// Returns [`Error::InvalidScale`] if the scale is out of range or the image side would overflow.
pub fn render_matrix(
    matrix: &ModuleMatrix,
    color: Rgba<u8>,
    config: &RenderConfig,
) -> Result<RgbaImage> {
    config.validate()?;
    let n = matrix.size();
    let cell = config.cell_size();
    let side = config.image_size(n).ok_or(Error::InvalidScale(config.scale))?;
    log::debug!(
        "rendering {}x{} modules at scale {} ({}px, style {})",
        n, n, config.scale, side, config.style
    );

    let mut img = RgbaImage::from_pixel(side, side, BACKGROUND);

    for (x, y) in matrix.dark_modules() {
        let px = x as i64 * cell as i64;
        let py = y as i64 * cell as i64;

        if is_structural(x, y, n) {
            fill_centered_square(&mut img, px, py, cell, config.structural_size(), color);
            continue;
        }

        match config.style {
            Style::Square => fill_square(&mut img, px, py, cell, cell, color),
            Style::Rounded => {
                fill_rounded_square(&mut img, px, py, cell, cell, config.corner_radius(), color)
            }
            Style::Triangle => fill_triangle(&mut img, px, py, cell, cell, color),
        }
    }

    Ok(img)
}
