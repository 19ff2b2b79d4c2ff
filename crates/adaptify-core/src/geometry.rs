//! Screen geometry shared by the state machine and the renderer.

use serde::{Deserialize, Serialize};

/// A point in CSS pixels, relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Origin {
    /// Create an origin.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point used when the toggle event carries no geometry: the viewport's
    /// top-right corner, pulled in by `inset` on both axes.
    #[must_use]
    pub fn fallback(viewport: Viewport, inset: f64) -> Self {
        Self {
            x: (viewport.width - inset).max(0.0),
            y: inset.min(viewport.height).max(0.0),
        }
    }
}

/// A bounding rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Centre point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Origin {
        Origin::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Whether the rectangle has usable geometry. Detached elements report
    /// an all-zero rect.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.left.is_finite() && self.top.is_finite()
    }
}

/// Size of the visible viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
