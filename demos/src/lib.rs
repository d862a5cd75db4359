// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Signet demos.
//!
//! The demos stop where the stamping step would begin: they print the
//! request that step would receive as JSON.

use serde::Serialize;
use signet_session::PagePlacement;

/// Stamping request in the document's native units.
///
/// Field names follow the stamping step's input: `page` is 1-based, the rest
/// are millimeters with `(x, y)` at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StampRequest {
    /// 1-based page number.
    pub page: u32,
    /// Left edge, in millimeters.
    pub x: f64,
    /// Top edge, in millimeters.
    pub y: f64,
    /// Width in millimeters.
    pub w: f64,
    /// Height in millimeters.
    pub h: f64,
}

impl From<PagePlacement> for StampRequest {
    fn from(p: PagePlacement) -> Self {
        Self {
            page: p.page,
            x: p.placement.x,
            y: p.placement.y,
            w: p.placement.w,
            h: p.placement.h,
        }
    }
}

impl StampRequest {
    /// Serializes the request as a single JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
