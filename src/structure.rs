//! Structural regions of a QR symbol.
//!
//! Finder and timing patterns are what scanners lock onto, so the renderer draws them as plain
//! squares no matter which style was requested.

/// Side length of a finder pattern in modules.
pub const FINDER_SIZE: usize = 7;

/// Row and column that carry the timing patterns.
pub const TIMING_INDEX: usize = 6;

/// Returns `true` if `(x, y)` lies inside one of the three finder blocks of an `n × n` matrix:
/// top-left, top-right or bottom-left. The bottom-right corner has no finder pattern.
pub fn is_finder(x: usize, y: usize, n: usize) -> bool {
    let near = |v: usize| v < FINDER_SIZE;
    let far = |v: usize| v < n && v + FINDER_SIZE >= n;
    (near(x) && near(y)) || (far(x) && near(y)) || (near(x) && far(y))
}

/// Returns `true` if `(x, y)` is on the timing row or column and outside every finder block.
pub fn is_timing(x: usize, y: usize, n: usize) -> bool {
    (x == TIMING_INDEX || y == TIMING_INDEX) && !is_finder(x, y, n)
}

/// Returns `true` if the module must be drawn as a plain square regardless of style.
pub fn is_structural(x: usize, y: usize, n: usize) -> bool {
    is_finder(x, y, n) || is_timing(x, y, n)
}
