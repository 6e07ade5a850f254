use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Shape used to draw the data modules of a QR code.
///
/// Finder and timing patterns ignore the style and are always drawn as plain squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Solid square filling the whole cell.
    #[default]
    Square,
    /// Square with quarter-disc corners.
    Rounded,
    /// Upward-pointing isosceles triangle inscribed in the cell.
    Triangle,
}

impl Style {
    /// All supported styles, in the order they are offered to users.
    pub const ALL: [Style; 3] = [Style::Square, Style::Rounded, Style::Triangle];

    /// Lowercase name used on the command line and in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Square => "square",
            Style::Rounded => "rounded",
            Style::Triangle => "triangle",
        }
    }

    /// Parses a style name, degrading to [`Style::Square`] for anything unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrstyle::Style;
    ///
    /// assert_eq!(Style::parse_lenient("Rounded"), Style::Rounded);
    /// assert_eq!(Style::parse_lenient("hexagon"), Style::Square);
    /// ```
    pub fn parse_lenient(s: &str) -> Style {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
