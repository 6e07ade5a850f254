//! Module matrix produced by the QR encoder.
//!
//! The renderer never encodes anything itself: [`ModuleMatrix::encode`] hands the content to the
//! `qrcode` crate at the highest error correction level and copies the resulting grid into an
//! owned, row-major boolean buffer. No quiet zone is added, so the finder patterns start at (0, 0).

use qrcode::{Color, EcLevel, QrCode};

use crate::error::Result;

/// A square grid of dark (`true`) and light (`false`) modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Encodes `content` with error correction level H.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] if the content does not fit in any QR version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrstyle::matrix::ModuleMatrix;
    ///
    /// let matrix = ModuleMatrix::encode("Hello, World!").unwrap();
    /// assert_eq!(matrix.size() % 4, 1);
    /// ```
    pub fn encode(content: &str) -> Result<Self> {
        let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::H)?;
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        log::debug!("encoded {} bytes into a {}x{} matrix", content.len(), size, size);
        Ok(Self { size, modules })
    }

    /// Builds a matrix from explicit rows. Every row must be as long as there are rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.len() == size), "Module matrix must be square");
        Self {
            size,
            modules: rows.concat(),
        }
    }

    /// Edge length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the color of the module at the given coordinates (`true` = dark).
    /// Coordinates outside the grid are light.
    pub fn get_module(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.modules[y * self.size + x]
    }

    /// Iterates over the coordinates of all dark modules in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, &dark)| dark)
            .map(move |(i, _)| (i % self.size, i / self.size))
    }
}
