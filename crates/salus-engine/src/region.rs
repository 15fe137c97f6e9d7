//! Spatial body-region locator.
//!
//! Converts a pixel tap on a rendered body diagram into percentage space
//! and finds the containing region:
//!
//! 1. Validate the surface: non-positive (or non-finite) width/height is
//!    the engine's only runtime error, `InvalidSurface`.
//! 2. `pct = pointer / surface * 100` on each axis.
//! 3. Scan the region table in declaration order; the first region whose
//!    rectangle contains the point (edges inclusive) wins. Overlapping
//!    regions rely on this ordering for reproducible resolution.
//! 4. No containing region → `Ok(None)`. A tap outside every region
//!    (including negative or >100 percentages) is an expected, valid
//!    outcome, not an error.

use tracing::{debug, warn};

use salus_contracts::advisory::Advisory;
use salus_contracts::error::{SalusError, SalusResult};
use salus_knowledge::{BodyRegion, KnowledgeStore};

use crate::advisory::region_advisory;

/// Locates the body region under a pointer position.
///
/// Holds a borrowed reference to the store; pure and stateless.
#[derive(Debug, Clone, Copy)]
pub struct RegionLocator<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> RegionLocator<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Find the first region (in declaration order) containing the tap.
    ///
    /// `pointer_x`/`pointer_y` are pixel coordinates on a surface of
    /// `surface_width` × `surface_height` pixels. Returns `InvalidSurface`
    /// iff either dimension is not a positive finite number.
    pub fn locate(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        surface_width: f64,
        surface_height: f64,
    ) -> SalusResult<Option<&'a BodyRegion>> {
        if !(surface_width.is_finite() && surface_width > 0.0)
            || !(surface_height.is_finite() && surface_height > 0.0)
        {
            warn!(
                width = surface_width,
                height = surface_height,
                "region query with invalid surface dimensions"
            );
            return Err(SalusError::InvalidSurface {
                width: surface_width,
                height: surface_height,
            });
        }

        let pct_x = pointer_x / surface_width * 100.0;
        let pct_y = pointer_y / surface_height * 100.0;

        for region in self.store.regions() {
            if region.bounds.contains(pct_x, pct_y) {
                debug!(region_id = %region.id, pct_x, pct_y, "region located");
                return Ok(Some(region));
            }
        }

        debug!(pct_x, pct_y, "tap outside all declared regions");
        Ok(None)
    }

    /// Locate and wrap the hit into a uniform advisory.
    ///
    /// `Ok(None)` when the tap lands outside every region.
    pub fn advise(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        surface_width: f64,
        surface_height: f64,
    ) -> SalusResult<Option<Advisory>> {
        Ok(self
            .locate(pointer_x, pointer_y, surface_width, surface_height)?
            .map(region_advisory))
    }
}
