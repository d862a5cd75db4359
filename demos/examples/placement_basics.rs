// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Drive a `CoordinateMapper` directly: render a page into a stretched
//! canvas, drag and resize the overlay, and print the millimeter placement.
//!
//! Run:
//! - `cargo run -p signet_demos --example placement_basics`

use kurbo::{Size, Vec2};
use signet_mapper::CoordinateMapper;
use signet_mapper::units::mm_to_px;

fn main() {
    let mut mapper = CoordinateMapper::new();
    println!("before render: {:?}", mapper.try_compute_physical_placement());

    // A US Letter page at 1x, squeezed horizontally by a narrow container.
    let page = Size::new(816.0, 1056.0);
    let canvas = Size::new(612.0, 1056.0);
    mapper.on_page_rendered(page, canvas);
    println!("scale factor: {:?}", mapper.scale_factor());

    // Drag ticks as a gesture surface would report them.
    for delta in [
        Vec2::new(40.0, 0.0),
        Vec2::new(40.0, 25.0),
        Vec2::new(-5.0, 60.0),
    ] {
        mapper.on_drag(delta);
        if let Some(p) = mapper.compute_physical_placement() {
            println!("drag {delta:?} -> x={:.2}mm y={:.2}mm", p.x, p.y);
        }
    }

    // Resize to a box that is 60mm x 20mm on the canvas grid.
    mapper.on_resize_stop(Size::new(mm_to_px(60.0), mm_to_px(20.0)));
    let p = mapper.compute_physical_placement();
    println!("final: {p:?}");

    println!("{:#?}", mapper.debug_info());
}
