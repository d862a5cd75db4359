// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel / millimeter conversion at the reference CSS pixel density.
//!
//! This is the second, fixed stage of the mapping. It is unrelated to the
//! page/canvas scale factor held in [`RenderMetrics`](crate::RenderMetrics).

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Reference pixel density (CSS pixels per inch).
pub const REFERENCE_DPI: f64 = 96.0;

/// Millimeters covered by one reference pixel.
pub const MM_PER_PX: f64 = MM_PER_INCH / REFERENCE_DPI;

/// Converts a length in reference pixels to millimeters.
#[must_use]
#[inline]
pub fn px_to_mm(px: f64) -> f64 {
    px * MM_PER_PX
}

/// Converts a length in millimeters to reference pixels.
#[must_use]
#[inline]
pub fn mm_to_px(mm: f64) -> f64 {
    mm / MM_PER_PX
}
