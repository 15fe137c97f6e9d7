//! Percentage-space geometry for the body-diagram region table.
//!
//! All coordinates live in a normalized 0-100 space over a front-facing
//! body silhouette, independent of the pixel size of whatever surface the
//! diagram is rendered on. The region locator converts pixel taps into this
//! space before any containment test runs.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in percentage space.
///
/// `x`/`y` is the top-left corner. Containment is inclusive on all four
/// edges: a point exactly on the boundary counts as inside. Overlap
/// resolution between rectangles is not this type's concern; the region
/// table resolves overlaps by declaration order.
///
/// Example in TOML:
/// ```toml
/// bounds = { x = 40.0, y = 2.0, width = 20.0, height = 12.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Return true if `(px, py)` lies inside this rectangle, edges included.
    ///
    /// NaN coordinates fail every comparison and are therefore never
    /// contained.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x
            && px <= self.x + self.width
            && py >= self.y
            && py <= self.y + self.height
    }
}
