// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use signet_mapper::{
    CoordinateMapper, MapperDebugInfo, OverlayGeometry, PhysicalPlacement, RenderMetrics,
};

use crate::cursor::{PageCursor, PageOutOfRange};
use crate::drag::PointerDrag;

/// A physical placement together with the page it belongs to.
///
/// This is what gets handed to the stamping step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    /// 1-based page number.
    pub page: u32,
    /// Placement on that page, in millimeters.
    pub placement: PhysicalPlacement,
}

/// Gesture currently in progress on the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    /// No gesture; render reports apply immediately.
    #[default]
    Idle,
    /// The overlay is being moved.
    Dragging,
    /// The overlay is being resized.
    Resizing,
}

/// What the session did with a render report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The metrics replaced the mapper's current metrics.
    Applied,
    /// A gesture is in progress; the metrics apply when it ends.
    Deferred,
    /// The report is not for the current page (or the document has no such
    /// page) and was dropped.
    Stale,
}

/// One open document: page navigation, gesture sequencing and the mapper.
///
/// Render reports that arrive mid-gesture are held back until the gesture
/// ends, so a gesture never sees two different scale factors. Changing page
/// or document replaces the mapper instead of patching it.
#[derive(Clone, Debug)]
pub struct PlacementSession {
    mapper: CoordinateMapper,
    cursor: PageCursor,
    gesture: Gesture,
    pointer: PointerDrag,
    pending_render: Option<RenderMetrics>,
    default_overlay: OverlayGeometry,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementSession {
    /// Creates a session whose documents open with [`OverlayGeometry::DEFAULT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_overlay(OverlayGeometry::DEFAULT)
    }

    /// Creates a session whose documents open with `overlay`.
    #[must_use]
    pub fn with_default_overlay(overlay: OverlayGeometry) -> Self {
        Self {
            mapper: CoordinateMapper::with_overlay(overlay),
            cursor: PageCursor::new(),
            gesture: Gesture::Idle,
            pointer: PointerDrag::default(),
            pending_render: None,
            default_overlay: overlay,
        }
    }

    /// Starts over with a new document.
    ///
    /// The overlay goes back to the default, the cursor to page 1 with an
    /// unknown page count, and any gesture or deferred render is dropped.
    pub fn open_document(&mut self) {
        self.mapper = CoordinateMapper::with_overlay(self.default_overlay);
        self.cursor = PageCursor::new();
        self.gesture = Gesture::Idle;
        self.pointer.end();
        self.pending_render = None;
    }

    /// Records the page count reported by the renderer.
    pub fn on_document_loaded(&mut self, total_pages: u32) {
        if self.cursor.set_total(total_pages) {
            self.enter_page();
        }
    }

    /// Moves to the next page. Returns `false` if already on the last page.
    pub fn next_page(&mut self) -> bool {
        let moved = self.cursor.step_forward();
        if moved {
            self.enter_page();
        }
        moved
    }

    /// Moves to the previous page. Returns `false` if already on the first page.
    pub fn previous_page(&mut self) -> bool {
        let moved = self.cursor.step_back();
        if moved {
            self.enter_page();
        }
        moved
    }

    /// Jumps to a 1-based page number.
    pub fn go_to_page(&mut self, page: u32) -> Result<(), PageOutOfRange> {
        if page == self.cursor.current() && self.cursor.contains(page) {
            return Ok(());
        }
        self.cursor.go_to(page)?;
        self.enter_page();
        Ok(())
    }

    /// Records a render of `page`.
    pub fn on_page_rendered(
        &mut self,
        page: u32,
        page_size: Size,
        canvas_size: Size,
    ) -> RenderOutcome {
        if page != self.cursor.current() || !self.cursor.contains(page) {
            return RenderOutcome::Stale;
        }
        if self.gesture != Gesture::Idle {
            self.pending_render = Some(RenderMetrics::new(page_size, canvas_size));
            return RenderOutcome::Deferred;
        }
        self.mapper.on_page_rendered(page_size, canvas_size);
        RenderOutcome::Applied
    }

    /// Starts a drag gesture driven by deltas.
    pub fn begin_drag(&mut self) {
        self.gesture = Gesture::Dragging;
    }

    /// Moves the overlay by `delta` and returns the updated placement.
    ///
    /// This does not open a gesture. Without [`begin_drag`](Self::begin_drag),
    /// render reports keep applying immediately between deltas.
    pub fn drag_by(&mut self, delta: Vec2) -> Option<PagePlacement> {
        self.mapper.on_drag(delta);
        self.placement()
    }

    /// Ends the drag gesture, applying any deferred render.
    pub fn end_drag(&mut self) -> Option<PagePlacement> {
        self.finish_gesture();
        self.placement()
    }

    /// Starts a drag gesture driven by absolute pointer positions.
    pub fn begin_pointer_drag(&mut self, pos: Point) {
        self.pointer.start(pos);
        self.gesture = Gesture::Dragging;
    }

    /// Moves the overlay with the pointer and returns the updated placement.
    ///
    /// Ignored unless a pointer drag is in progress.
    pub fn pointer_moved(&mut self, pos: Point) -> Option<PagePlacement> {
        let delta = self.pointer.update(pos)?;
        self.drag_by(delta)
    }

    /// Ends the pointer drag, applying any deferred render.
    pub fn end_pointer_drag(&mut self) -> Option<PagePlacement> {
        self.end_drag()
    }

    /// Starts a resize gesture.
    pub fn begin_resize(&mut self) {
        self.gesture = Gesture::Resizing;
    }

    /// Sets the overlay's final size and ends the resize gesture.
    pub fn resize_stop(&mut self, size: Size) -> Option<PagePlacement> {
        self.mapper.on_resize_stop(size);
        self.finish_gesture();
        self.placement()
    }

    /// Abandons the current gesture. Geometry already applied is kept.
    pub fn cancel_gesture(&mut self) {
        self.finish_gesture();
    }

    /// Current placement on the current page, once the page has been rendered.
    #[must_use]
    pub fn placement(&self) -> Option<PagePlacement> {
        self.mapper
            .compute_physical_placement()
            .map(|placement| PagePlacement {
                page: self.cursor.current(),
                placement,
            })
    }

    /// The mapper for the current page.
    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Page navigation state.
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Gesture in progress.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SessionDebugInfo {
        SessionDebugInfo {
            mapper: self.mapper.debug_info(),
            cursor: self.cursor,
            gesture: self.gesture,
            pending_render: self.pending_render,
        }
    }

    fn finish_gesture(&mut self) {
        self.gesture = Gesture::Idle;
        self.pointer.end();
        if let Some(metrics) = self.pending_render.take() {
            self.mapper.on_page_rendered(metrics.page_size, metrics.canvas_size);
        }
    }

    /// Fresh mapper for the page under the cursor, keeping the overlay.
    fn enter_page(&mut self) {
        self.mapper = CoordinateMapper::with_overlay(self.mapper.overlay());
        self.gesture = Gesture::Idle;
        self.pointer.end();
        self.pending_render = None;
    }
}

/// Debug snapshot of a [`PlacementSession`].
#[derive(Clone, Copy, Debug)]
pub struct SessionDebugInfo {
    /// Mapper state for the current page.
    pub mapper: MapperDebugInfo,
    /// Page navigation state.
    pub cursor: PageCursor,
    /// Gesture in progress.
    pub gesture: Gesture,
    /// Render report waiting for the gesture to end.
    pub pending_render: Option<RenderMetrics>,
}
