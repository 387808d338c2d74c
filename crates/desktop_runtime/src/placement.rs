//! Initial placement policies for newly opened windows.
//!
//! Strategies only propose a position; the window manager clamps it into the viewport.

use serde::{Deserialize, Serialize};

use crate::model::{Position, Size, Viewport};

const CASCADE_SLOTS: usize = 8;

pub trait PlacementStrategy {
    /// Proposes a top-left corner for a window of `size`. `open_count` is the number of windows
    /// already open.
    fn place(&mut self, size: Size, viewport: &Viewport, open_count: usize) -> Position;
}

/// Centers the window in the area below the top bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centered;

impl PlacementStrategy for Centered {
    fn place(&mut self, size: Size, viewport: &Viewport, _open_count: usize) -> Position {
        let top = viewport.top_bar_height;
        Position::new(
            (viewport.width - size.width) / 2.0,
            top + (viewport.height - top - size.height) / 2.0,
        )
    }
}

/// Staggers windows diagonally from the workspace origin, wrapping after eight.
#[derive(Debug, Clone, Copy)]
pub struct Cascade {
    pub step: f64,
}

impl PlacementStrategy for Cascade {
    fn place(&mut self, _size: Size, viewport: &Viewport, open_count: usize) -> Position {
        let offset = (open_count % CASCADE_SLOTS) as f64 * self.step;
        let origin = viewport.workspace_origin();
        Position::new(origin.x + offset, origin.y + offset)
    }
}

/// Uniformly random position inside the valid range, reproducible from a seed.
#[derive(Debug, Clone)]
pub struct Randomized {
    rng: fastrand::Rng,
}

impl Randomized {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl PlacementStrategy for Randomized {
    fn place(&mut self, size: Size, viewport: &Viewport, _open_count: usize) -> Position {
        let top = viewport.top_bar_height;
        let span_x = (viewport.width - size.width).max(0.0);
        let span_y = (viewport.height - top - size.height).max(0.0);
        Position::new(self.rng.f64() * span_x, top + self.rng.f64() * span_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementKind {
    #[default]
    Centered,
    Cascade,
    Randomized,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub strategy: PlacementKind,
    pub cascade_step: f64,
    /// Seed for [`PlacementKind::Randomized`]; `None` seeds from the process RNG.
    pub seed: Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            strategy: PlacementKind::Centered,
            cascade_step: 24.0,
            seed: None,
        }
    }
}

impl PlacementConfig {
    pub fn build(&self) -> Box<dyn PlacementStrategy> {
        match self.strategy {
            PlacementKind::Centered => Box::new(Centered),
            PlacementKind::Cascade => Box::new(Cascade {
                step: self.cascade_step,
            }),
            PlacementKind::Randomized => Box::new(Randomized::with_seed(
                self.seed.unwrap_or_else(|| fastrand::u64(..)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DeviceClass;

    fn viewport() -> Viewport {
        Viewport {
            width: 1000.0,
            height: 800.0,
            device_class: DeviceClass::Regular,
            top_bar_height: 32.0,
        }
    }

    #[test]
    fn centered_splits_free_space_evenly() {
        let position = Centered.place(Size::new(600.0, 400.0), &viewport(), 0);
        assert_eq!(position, Position::new(200.0, 216.0));
    }

    #[test]
    fn cascade_wraps_after_eight_windows() {
        let mut cascade = Cascade { step: 24.0 };
        let size = Size::new(100.0, 100.0);
        assert_eq!(cascade.place(size, &viewport(), 0), Position::new(0.0, 32.0));
        assert_eq!(cascade.place(size, &viewport(), 3), Position::new(72.0, 104.0));
        assert_eq!(cascade.place(size, &viewport(), 8), Position::new(0.0, 32.0));
    }

    #[test]
    fn randomized_stays_in_range_and_is_reproducible() {
        let size = Size::new(600.0, 400.0);
        let mut first = Randomized::with_seed(7);
        let mut second = Randomized::with_seed(7);

        for open_count in 0..32 {
            let a = first.place(size, &viewport(), open_count);
            let b = second.place(size, &viewport(), open_count);
            assert_eq!(a, b);
            assert!((0.0..=400.0).contains(&a.x));
            assert!((32.0..=400.0).contains(&a.y));
        }
    }
}
