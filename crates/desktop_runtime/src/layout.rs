//! Responsive window geometry.
//!
//! Window sizes are derived from an application's base dimensions and the current viewport; the
//! engine is the only place that produces window sizes, used on open and on every viewport
//! change.

use serde::{Deserialize, Serialize};

use crate::model::{floor_dimension, DeviceClass, Size, Viewport};

/// Maximum share of the viewport a window may take on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutCaps {
    pub width_fraction: f64,
    pub height_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutEngine {
    pub regular: LayoutCaps,
    pub compact: LayoutCaps,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            regular: LayoutCaps {
                width_fraction: 0.8,
                height_fraction: 0.7,
            },
            compact: LayoutCaps {
                width_fraction: 0.95,
                height_fraction: 0.85,
            },
        }
    }
}

impl LayoutEngine {
    pub fn caps(&self, device_class: DeviceClass) -> LayoutCaps {
        match device_class {
            DeviceClass::Compact => self.compact,
            DeviceClass::Regular => self.regular,
        }
    }

    /// Fits `base_width`×`base_height` into the device-class caps of `viewport`, keeping the
    /// aspect ratio. Degenerate inputs are floored to one pixel rather than rejected.
    pub fn compute_size(&self, base_width: f64, base_height: f64, viewport: &Viewport) -> Size {
        let base_width = floor_dimension(base_width);
        let base_height = floor_dimension(base_height);
        let aspect_ratio = base_width / base_height;

        let caps = self.caps(viewport.device_class);
        let max_width = floor_dimension(floor_dimension(viewport.width) * caps.width_fraction);
        let max_height = floor_dimension(floor_dimension(viewport.height) * caps.height_fraction);

        let mut width = base_width.min(max_width);
        let mut height = width / aspect_ratio;
        if height > max_height {
            height = max_height;
            width = height * aspect_ratio;
        }

        Size::new(width, height).at_least_min()
    }

    /// Geometry for a fullscreen window: everything below the top bar.
    pub fn fullscreen_size(&self, viewport: &Viewport) -> Size {
        viewport.workspace_size()
    }
}
