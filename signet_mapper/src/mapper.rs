// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size, Vec2};

use crate::geometry::{OverlayGeometry, PhysicalPlacement, RenderMetrics};

/// Reason a physical placement cannot be computed right now.
///
/// Both cases are transient: they clear on the next valid render report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementUnavailable {
    /// No page has been rendered since the mapper was created.
    NotRendered,
    /// The last render report had a zero (or otherwise unusable) dimension.
    DegenerateMetrics {
        /// Reported page size.
        page_size: Size,
        /// Reported canvas size.
        canvas_size: Size,
    },
}

impl fmt::Display for PlacementUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRendered => f.write_str("no page has been rendered yet"),
            Self::DegenerateMetrics {
                page_size,
                canvas_size,
            } => write!(
                f,
                "page is not laid out (page {}x{}, canvas {}x{})",
                page_size.width, page_size.height, canvas_size.width, canvas_size.height
            ),
        }
    }
}

impl core::error::Error for PlacementUnavailable {}

/// Tracks overlay geometry over a rendered page and converts it to millimeters.
///
/// The mapper is mutated only through three event handlers:
/// - [`on_page_rendered`](Self::on_page_rendered) replaces the render metrics,
/// - [`on_drag`](Self::on_drag) accumulates a pixel delta into the position,
/// - [`on_resize_stop`](Self::on_resize_stop) replaces the overlay size.
///
/// [`compute_physical_placement`](Self::compute_physical_placement) borrows the
/// mapper immutably, so one call always sees a single consistent snapshot of
/// metrics and overlay.
///
/// To move to another page or document, build a new mapper rather than
/// clearing this one; see [`CoordinateMapper::with_overlay`].
#[derive(Clone, Debug, Default)]
pub struct CoordinateMapper {
    metrics: Option<RenderMetrics>,
    overlay: OverlayGeometry,
}

impl CoordinateMapper {
    /// Creates a mapper with the default overlay and no render metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_overlay(OverlayGeometry::DEFAULT)
    }

    /// Creates a mapper with the given overlay and no render metrics.
    #[must_use]
    pub fn with_overlay(overlay: OverlayGeometry) -> Self {
        Self {
            metrics: None,
            overlay,
        }
    }

    /// Records a page render.
    ///
    /// Both sizes are replaced together. Nothing is carried over from the
    /// previous report, including when this one is degenerate.
    pub fn on_page_rendered(&mut self, page_size: Size, canvas_size: Size) {
        self.metrics = Some(RenderMetrics::new(page_size, canvas_size));
    }

    /// Moves the overlay by a pixel delta.
    ///
    /// The position is left unclamped; it may go negative or past the canvas.
    pub fn on_drag(&mut self, delta: Vec2) {
        self.overlay.position += delta;
    }

    /// Sets the overlay size reported at the end of a resize gesture.
    pub fn on_resize_stop(&mut self, size: Size) {
        self.overlay.size = size;
    }

    /// Last render metrics, if any page has been rendered.
    #[must_use]
    pub fn metrics(&self) -> Option<RenderMetrics> {
        self.metrics
    }

    /// Returns `true` once a render has been recorded, degenerate or not.
    #[must_use]
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Current overlay geometry in canvas pixels.
    #[must_use]
    pub fn overlay(&self) -> OverlayGeometry {
        self.overlay
    }

    /// Per-axis page/canvas ratio, when the metrics are usable.
    #[must_use]
    pub fn scale_factor(&self) -> Option<Vec2> {
        self.metrics.as_ref().and_then(RenderMetrics::scale_factor)
    }

    /// Converts the overlay to a millimeter placement on the page.
    ///
    /// Returns `None` until a non-degenerate render has been recorded.
    #[must_use]
    pub fn compute_physical_placement(&self) -> Option<PhysicalPlacement> {
        self.try_compute_physical_placement().ok()
    }

    /// Like [`compute_physical_placement`](Self::compute_physical_placement),
    /// but reports why the placement is unavailable.
    pub fn try_compute_physical_placement(
        &self,
    ) -> Result<PhysicalPlacement, PlacementUnavailable> {
        let metrics = self.metrics.ok_or(PlacementUnavailable::NotRendered)?;
        let scale = metrics
            .scale_factor()
            .ok_or(PlacementUnavailable::DegenerateMetrics {
                page_size: metrics.page_size,
                canvas_size: metrics.canvas_size,
            })?;

        // Canvas pixels -> page pixels, each axis on its own.
        let OverlayGeometry { position, size } = self.overlay;
        let origin = Point::new(position.x * scale.x, position.y * scale.y);
        let size = Size::new(size.width * scale.x, size.height * scale.y);

        // Page pixels -> millimeters.
        Ok(PhysicalPlacement::from_page_px(origin, size))
    }

    /// Snapshot of the mapper state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapperDebugInfo {
        MapperDebugInfo {
            metrics: self.metrics,
            overlay: self.overlay,
            scale_factor: self.scale_factor(),
            placement: self.try_compute_physical_placement(),
        }
    }
}

/// Debug snapshot of a [`CoordinateMapper`].
#[derive(Clone, Copy, Debug)]
pub struct MapperDebugInfo {
    /// Last render metrics.
    pub metrics: Option<RenderMetrics>,
    /// Overlay geometry in canvas pixels.
    pub overlay: OverlayGeometry,
    /// Per-axis page/canvas ratio, if usable.
    pub scale_factor: Option<Vec2>,
    /// Current placement, or why there is none.
    pub placement: Result<PhysicalPlacement, PlacementUnavailable>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::{Point, Size, Vec2};

    use super::{CoordinateMapper, PlacementUnavailable};
    use crate::geometry::OverlayGeometry;
    use crate::units::px_to_mm;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn unavailable_before_first_render() {
        let mapper = CoordinateMapper::new();
        assert!(!mapper.has_metrics());
        assert_eq!(mapper.compute_physical_placement(), None);
        assert_eq!(
            mapper.try_compute_physical_placement(),
            Err(PlacementUnavailable::NotRendered)
        );
    }

    #[test]
    fn degenerate_render_withholds_conversion() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(600.0, 800.0), Size::new(0.0, 800.0));
        assert!(mapper.has_metrics());
        assert!(matches!(
            mapper.try_compute_physical_placement(),
            Err(PlacementUnavailable::DegenerateMetrics { .. })
        ));

        mapper.on_page_rendered(Size::new(600.0, 800.0), Size::new(600.0, 800.0));
        assert!(mapper.compute_physical_placement().is_some());
    }

    #[test]
    fn degenerate_render_replaces_good_metrics() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(600.0, 800.0), Size::new(600.0, 800.0));
        assert!(mapper.compute_physical_placement().is_some());

        mapper.on_page_rendered(Size::new(600.0, 800.0), Size::new(600.0, 0.0));
        assert_eq!(mapper.compute_physical_placement(), None);
    }

    #[test]
    fn unit_scale_converts_with_px_to_mm_alone() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(612.0, 792.0), Size::new(612.0, 792.0));
        mapper.on_drag(Vec2::ZERO);

        let placement = mapper.compute_physical_placement().unwrap();
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y, 0.0);
        assert_eq!(placement.w, px_to_mm(200.0));
        assert_eq!(placement.h, px_to_mm(50.0));
    }

    #[test]
    fn negative_position_clamps_to_zero_without_touching_size() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(300.0, 300.0), Size::new(150.0, 100.0));
        mapper.on_drag(Vec2::new(-40.0, -5.0));
        assert_eq!(mapper.overlay().position, Point::new(-40.0, -5.0));

        let placement = mapper.compute_physical_placement().unwrap();
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y, 0.0);
        assert_close(placement.w, px_to_mm(200.0 * 2.0));
        assert_close(placement.h, px_to_mm(50.0 * 3.0));
    }

    #[test]
    fn only_the_negative_axis_is_clamped() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        mapper.on_drag(Vec2::new(-10.0, 96.0));

        let placement = mapper.compute_physical_placement().unwrap();
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y, 25.4);
    }

    #[test]
    fn non_uniform_scale_applies_per_axis() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_page_rendered(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
        mapper.on_drag(Vec2::new(10.0, 10.0));

        let placement = mapper.compute_physical_placement().unwrap();
        assert_close(placement.x, px_to_mm(20.0));
        assert_close(placement.y, px_to_mm(10.0));
        assert_close(placement.x, 2.0 * placement.y);
        assert_close(placement.w, px_to_mm(400.0));
        assert_close(placement.h, px_to_mm(50.0));
    }

    #[test]
    fn drag_deltas_accumulate() {
        let mut mapper = CoordinateMapper::with_overlay(OverlayGeometry::new(
            Point::ORIGIN,
            Size::new(10.0, 10.0),
        ));
        mapper.on_drag(Vec2::new(5.0, 0.0));
        mapper.on_drag(Vec2::new(5.0, 0.0));
        mapper.on_drag(Vec2::new(-2.0, 3.0));
        assert_eq!(mapper.overlay().position, Point::new(8.0, 3.0));
    }

    #[test]
    fn resize_replaces_size() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_resize_stop(Size::new(320.0, 90.0));
        mapper.on_resize_stop(Size::new(150.0, 40.0));
        assert_eq!(mapper.overlay().size, Size::new(150.0, 40.0));
        assert_eq!(mapper.overlay().position, Point::ORIGIN);
    }

    #[test]
    fn latest_render_wins() {
        let mut mapper = CoordinateMapper::new();
        mapper.on_drag(Vec2::new(50.0, 50.0));

        mapper.on_page_rendered(Size::new(400.0, 400.0), Size::new(200.0, 200.0));
        let stretched = mapper.compute_physical_placement().unwrap();
        mapper.on_page_rendered(Size::new(400.0, 400.0), Size::new(400.0, 400.0));
        let native = mapper.compute_physical_placement().unwrap();

        assert_close(stretched.x, px_to_mm(100.0));
        assert_close(native.x, px_to_mm(50.0));
        assert_eq!(mapper.scale_factor(), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn with_overlay_starts_without_metrics() {
        let mut old = CoordinateMapper::new();
        old.on_page_rendered(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        old.on_drag(Vec2::new(12.0, 34.0));

        let fresh = CoordinateMapper::with_overlay(old.overlay());
        assert_eq!(fresh.overlay(), old.overlay());
        assert!(!fresh.has_metrics());
        assert_eq!(fresh.compute_physical_placement(), None);
    }

    #[test]
    fn debug_info_reports_snapshot() {
        let mut mapper = CoordinateMapper::new();
        let info = mapper.debug_info();
        assert!(info.metrics.is_none());
        assert_eq!(info.placement, Err(PlacementUnavailable::NotRendered));

        mapper.on_page_rendered(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
        let info = mapper.debug_info();
        assert_eq!(info.scale_factor, Some(Vec2::new(2.0, 1.0)));
        assert_eq!(info.overlay, OverlayGeometry::DEFAULT);
        assert!(info.placement.is_ok());
    }

    #[test]
    fn unavailable_reason_displays() {
        assert_eq!(
            PlacementUnavailable::NotRendered.to_string(),
            "no page has been rendered yet"
        );
        let reason = PlacementUnavailable::DegenerateMetrics {
            page_size: Size::new(600.0, 800.0),
            canvas_size: Size::new(0.0, 800.0),
        };
        assert_eq!(
            reason.to_string(),
            "page is not laid out (page 600x800, canvas 0x800)"
        );
    }
}
