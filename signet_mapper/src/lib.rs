// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signet Mapper: overlay-to-page coordinate mapping.
//!
//! A signature marker is dragged and resized over a page preview in canvas
//! pixels. This crate turns that marker into a placement on the page itself,
//! in millimeters, independent of zoom, window size or device pixel density.
//!
//! The conversion has two separate stages, applied in order:
//! 1. **Page/canvas scale.** The displayed canvas may be stretched by the
//!    surrounding layout, differently per axis. Overlay geometry is projected
//!    from canvas pixels into page pixels with the ratio
//!    `page_size / canvas_size`, computed independently for x and y.
//! 2. **Pixels to millimeters.** Page pixels are converted at the reference
//!    density of 96 pixels per inch (see [`units`]).
//!
//! Negative positions (a marker dragged past the top or left edge) are
//! clamped to zero between the two stages. Sizes are never clamped.
//!
//! It does **not** render pages or capture pointer input. Callers are
//! expected to:
//! - Forward each page render to [`CoordinateMapper::on_page_rendered`].
//! - Forward drag deltas to [`CoordinateMapper::on_drag`] and final resize
//!   sizes to [`CoordinateMapper::on_resize_stop`].
//! - Read the result with [`CoordinateMapper::compute_physical_placement`],
//!   which is `None` until a page with a non-zero size has been rendered.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use signet_mapper::CoordinateMapper;
//!
//! let mut mapper = CoordinateMapper::new();
//! assert!(mapper.compute_physical_placement().is_none());
//!
//! // A 200x100 page squeezed into a 100x100 canvas.
//! mapper.on_page_rendered(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
//! mapper.on_drag(Vec2::new(10.0, 10.0));
//! mapper.on_resize_stop(Size::new(48.0, 96.0));
//!
//! let placement = mapper.compute_physical_placement().unwrap();
//! // x is stretched 2x, y is not.
//! assert!((placement.x - 2.0 * placement.y).abs() < 1e-9);
//! assert_eq!(placement.w, 25.4);
//! assert_eq!(placement.h, 25.4);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod mapper;
pub mod units;

pub use geometry::{OverlayGeometry, PhysicalPlacement, RenderMetrics};
pub use mapper::{CoordinateMapper, MapperDebugInfo, PlacementUnavailable};
