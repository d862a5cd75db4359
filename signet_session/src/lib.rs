// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signet Session: documents, pages and gestures around a coordinate mapper.
//!
//! [`signet_mapper::CoordinateMapper`] converts one overlay on one rendered
//! page. A real preview also has to cope with:
//! - Opening another document, which resets the overlay.
//! - Paging through the document ([`PageCursor`]), where each page gets its
//!   own render metrics and a scale factor never leaks from one page to the
//!   next.
//! - Render reports arriving mid-gesture, which are held back until the
//!   gesture ends so one gesture never mixes two scale factors.
//! - Gesture sources that report absolute pointer positions instead of
//!   deltas ([`drag::PointerDrag`]).
//!
//! [`PlacementSession`] owns all of that and hands out [`PagePlacement`]s:
//! the millimeter placement plus the page it belongs to.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use signet_session::{PlacementSession, RenderOutcome};
//!
//! let mut session = PlacementSession::new();
//! session.open_document();
//! session.on_document_loaded(3);
//!
//! let page = Size::new(612.0, 792.0);
//! assert_eq!(session.on_page_rendered(1, page, page), RenderOutcome::Applied);
//!
//! session.begin_drag();
//! session.drag_by(Vec2::new(96.0, 192.0));
//!
//! // A render arriving mid-drag waits for the drag to end.
//! let squeezed = Size::new(306.0, 396.0);
//! assert_eq!(session.on_page_rendered(1, page, squeezed), RenderOutcome::Deferred);
//!
//! let out = session.end_drag().unwrap();
//! assert_eq!(out.page, 1);
//! assert_eq!(out.placement.x, 50.8);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cursor;
pub mod drag;
mod session;

pub use cursor::{PageCursor, PageOutOfRange};
pub use session::{Gesture, PagePlacement, PlacementSession, RenderOutcome, SessionDebugInfo};
