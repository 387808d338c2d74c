//! Viewport tracking and device classification.

use crate::model::{floor_dimension, DeviceClass, Viewport};

/// Tracks the host surface size and reports changes as classified [`Viewport`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportMonitor {
    current: Viewport,
    compact_breakpoint: f64,
}

impl ViewportMonitor {
    pub fn new(width: f64, height: f64, top_bar_height: f64, compact_breakpoint: f64) -> Self {
        let width = floor_dimension(width);
        let height = floor_dimension(height);
        let current = Viewport {
            width,
            height,
            device_class: classify(width, compact_breakpoint),
            top_bar_height,
        };
        Self {
            current,
            compact_breakpoint,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Records a host resize. Returns the new viewport only when something changed.
    ///
    /// Non-finite or sub-pixel dimensions are floored to one pixel.
    pub fn observe(&mut self, width: f64, height: f64) -> Option<Viewport> {
        let width = floor_dimension(width);
        let height = floor_dimension(height);
        let next = Viewport {
            width,
            height,
            device_class: classify(width, self.compact_breakpoint),
            top_bar_height: self.current.top_bar_height,
        };
        if next == self.current {
            return None;
        }
        tracing::trace!(
            width,
            height,
            device_class = next.device_class.token(),
            "viewport changed"
        );
        self.current = next;
        Some(next)
    }

    /// Adopts a viewport applied from outside the monitor, so later host sizes compare against it.
    pub fn set(&mut self, viewport: Viewport) {
        self.current = viewport;
    }
}

/// Viewports narrower than `compact_breakpoint` are compact.
pub fn classify(width: f64, compact_breakpoint: f64) -> DeviceClass {
    if width < compact_breakpoint {
        DeviceClass::Compact
    } else {
        DeviceClass::Regular
    }
}
