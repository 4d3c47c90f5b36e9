use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Pixel bounds of the plotted region inside the rendered graph image.
///
/// The rendering backend draws the plot at a fixed offset inside the
/// bitmap; the defaults match its current layout. Clicks are expected in
/// image-origin coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphGeometry {
    pub x0: f64,
    pub width: f64,
    pub y0: f64,
    pub height: f64,
}

impl Default for GraphGeometry {
    fn default() -> Self {
        Self {
            x0: 62.0,
            width: 532.0,
            y0: 16.0,
            height: 340.0,
        }
    }
}

impl GraphGeometry {
    pub fn validate(self) -> NavResult<Self> {
        let all_finite = self.x0.is_finite()
            && self.width.is_finite()
            && self.y0.is_finite()
            && self.height.is_finite();
        if !all_finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(NavError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Half-open containment: left/top edges are inside, right/bottom
    /// edges are not.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x0 + self.width && y >= self.y0 && y < self.y0 + self.height
    }

    /// Whether the click landed below the plot, on the legend strip. The
    /// bottom edge itself counts as below.
    #[must_use]
    pub fn is_below(self, y: f64) -> bool {
        y >= self.y0 + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::GraphGeometry;

    #[test]
    fn default_bounds_match_the_rendered_layout() {
        let geometry = GraphGeometry::default();
        assert_eq!(geometry.x0, 62.0);
        assert_eq!(geometry.width, 532.0);
        assert_eq!(geometry.y0, 16.0);
        assert_eq!(geometry.height, 340.0);
    }

    #[test]
    fn containment_is_half_open() {
        let geometry = GraphGeometry::default();
        assert!(geometry.contains(62.0, 16.0));
        assert!(geometry.contains(593.0, 355.0));
        assert!(!geometry.contains(594.0, 16.0));
        assert!(!geometry.contains(62.0, 356.0));
        assert!(!geometry.contains(61.0, 16.0));
    }

    #[test]
    fn bottom_edge_counts_as_below() {
        let geometry = GraphGeometry::default();
        assert!(geometry.is_below(356.0));
        assert!(geometry.is_below(400.0));
        assert!(!geometry.is_below(355.0));
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let zero_width = GraphGeometry {
            width: 0.0,
            ..GraphGeometry::default()
        };
        assert!(zero_width.validate().is_err());

        let non_finite = GraphGeometry {
            x0: f64::NAN,
            ..GraphGeometry::default()
        };
        assert!(non_finite.validate().is_err());
    }
}
