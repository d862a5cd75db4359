// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::units::px_to_mm;

/// Pixel footprint of a rendered page.
///
/// `page_size` is the page's own pixel size at the renderer's chosen scale;
/// `canvas_size` is what the surrounding layout actually gives it on screen.
/// The two may differ on either axis (and by different amounts) when the
/// container clips or stretches the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderMetrics {
    /// Rendered page size in page pixels.
    pub page_size: Size,
    /// On-screen container size in canvas pixels.
    pub canvas_size: Size,
}

impl RenderMetrics {
    /// Creates metrics from a render report.
    #[must_use]
    pub const fn new(page_size: Size, canvas_size: Size) -> Self {
        Self {
            page_size,
            canvas_size,
        }
    }

    /// Returns `true` if the page has not been laid out yet.
    ///
    /// Any zero, negative or non-finite component on either size counts.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(is_laid_out(self.page_size) && is_laid_out(self.canvas_size))
    }

    /// Per-axis ratio of page pixels to canvas pixels.
    ///
    /// Returns `None` for degenerate metrics.
    #[must_use]
    pub fn scale_factor(&self) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some(Vec2::new(
            self.page_size.width / self.canvas_size.width,
            self.page_size.height / self.canvas_size.height,
        ))
    }
}

fn is_laid_out(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// The user-manipulated marker rectangle, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    /// Top-left corner relative to the canvas origin. May be negative while dragging.
    pub position: Point,
    /// Width and height.
    pub size: Size,
}

impl OverlayGeometry {
    /// Overlay placed on every freshly opened document: 200×50 at the origin.
    pub const DEFAULT: Self = Self {
        position: Point::ORIGIN,
        size: Size::new(200.0, 50.0),
    };

    /// Creates an overlay geometry.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// The overlay as a canvas-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

impl Default for OverlayGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Overlay placement in the document's physical units (millimeters).
///
/// `(x, y)` is the top-left corner, `(w, h)` the size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicalPlacement {
    /// Distance from the page's left edge, in millimeters.
    pub x: f64,
    /// Distance from the page's top edge, in millimeters.
    pub y: f64,
    /// Width in millimeters.
    pub w: f64,
    /// Height in millimeters.
    pub h: f64,
}

impl PhysicalPlacement {
    /// Converts page-pixel geometry to millimeters.
    ///
    /// The origin is clamped to be non-negative; the size is converted as is.
    #[must_use]
    pub fn from_page_px(origin: Point, size: Size) -> Self {
        Self {
            x: px_to_mm(origin.x.max(0.0)),
            y: px_to_mm(origin.y.max(0.0)),
            w: px_to_mm(size.width),
            h: px_to_mm(size.height),
        }
    }

    /// Top-left corner in millimeters.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size in millimeters.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// The placement as a millimeter rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }
}
