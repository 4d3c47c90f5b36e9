use crate::core::geometry::GraphGeometry;
use crate::core::instant::Instant;
use crate::error::{NavError, NavResult};

/// Outcome of a click on the graph image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// In-plot click: the time window should be re-centered on the clicked
    /// position.
    Recenter {
        new_start: Instant,
        new_end: Instant,
    },
    /// Below-plot click: open the raw-data dump for this graph.
    Drill,
    /// Click outside both tracked regions; nothing to do.
    Ignored,
}

/// Maps click positions into time-window changes.
#[derive(Debug, Clone, Copy)]
pub struct ClickTransform {
    geometry: GraphGeometry,
}

impl ClickTransform {
    pub fn new(geometry: GraphGeometry) -> NavResult<Self> {
        Ok(Self {
            geometry: geometry.validate()?,
        })
    }

    #[must_use]
    pub fn geometry(self) -> GraphGeometry {
        self.geometry
    }

    /// Re-centers the `[start, end]` window on the time under `click_x`.
    ///
    /// Coordinates must already be normalized to the image origin. A pixel
    /// is worth `range_ms / width` milliseconds; the shift is the click's
    /// offset from the plot's horizontal center, converted at that rate and
    /// applied to both bounds.
    pub fn center_on_click(
        self,
        click_x: f64,
        click_y: f64,
        start: Instant,
        end: Instant,
    ) -> NavResult<ClickResult> {
        if !click_x.is_finite() || !click_y.is_finite() {
            return Err(NavError::InvalidInput(
                "click position must be finite".to_owned(),
            ));
        }

        if self.geometry.contains(click_x, click_y) {
            let range_ms = (end.epoch_millis() - start.epoch_millis()) as f64;
            let ms_per_pixel = range_ms / self.geometry.width;
            let offset_from_center = (click_x - self.geometry.x0) - self.geometry.width / 2.0;
            let shift_ms = offset_from_center * ms_per_pixel;

            return Ok(ClickResult::Recenter {
                new_start: start.shifted_by_millis(shift_ms)?,
                new_end: end.shifted_by_millis(shift_ms)?,
            });
        }

        if self.geometry.is_below(click_y) {
            return Ok(ClickResult::Drill);
        }

        Ok(ClickResult::Ignored)
    }
}
