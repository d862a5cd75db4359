// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag helper: turn absolute pointer positions into drag deltas.
//!
//! The mapper consumes incremental deltas. Some gesture sources report the
//! absolute pointer position instead; [`PointerDrag`] bridges the two.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use signet_session::drag::PointerDrag;
//!
//! let mut drag = PointerDrag::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(12.0, 25.0)), Some(Vec2::new(-3.0, 0.0)));
//! assert_eq!(drag.total_offset(), Some(Vec2::new(2.0, 5.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer across one drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDrag {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl PointerDrag {
    /// Starts a drag at `pos`, discarding any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position and returns the delta since the last one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Offset from the drag start to the last recorded position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
