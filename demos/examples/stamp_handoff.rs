// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stamping hand-off.
//!
//! Replay a scripted preview session (document load, page navigation,
//! renders, a pointer drag with a render landing mid-drag, a resize) and
//! print the stamping request as JSON.
//!
//! Run:
//! - `cargo run -p signet_demos --example stamp_handoff`

use kurbo::{Point, Size};
use signet_demos::StampRequest;
use signet_session::{PlacementSession, RenderOutcome};

#[derive(Debug)]
enum Event {
    DocumentLoaded(u32),
    Rendered {
        page: u32,
        page_size: Size,
        canvas: Size,
    },
    Next,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    ResizeStart,
    ResizeStop(Size),
}

fn main() {
    let a4 = Size::new(794.0, 1123.0);
    let events = [
        Event::DocumentLoaded(3),
        Event::Rendered {
            page: 1,
            page_size: a4,
            canvas: a4,
        },
        Event::Next,
        // Late render of the page we just left.
        Event::Rendered {
            page: 1,
            page_size: a4,
            canvas: a4,
        },
        Event::Rendered {
            page: 2,
            page_size: a4,
            canvas: Size::new(397.0, 561.5),
        },
        Event::PointerDown(Point::new(20.0, 20.0)),
        Event::PointerMove(Point::new(60.0, 40.0)),
        // The window was resized mid-drag.
        Event::Rendered {
            page: 2,
            page_size: a4,
            canvas: a4,
        },
        Event::PointerMove(Point::new(120.0, 300.0)),
        Event::PointerUp,
        Event::ResizeStart,
        Event::ResizeStop(Size::new(180.0, 60.0)),
    ];

    let mut session = PlacementSession::new();
    session.open_document();

    for event in events {
        match event {
            Event::DocumentLoaded(total) => session.on_document_loaded(total),
            Event::Rendered {
                page,
                page_size,
                canvas,
            } => {
                let outcome = session.on_page_rendered(page, page_size, canvas);
                if outcome != RenderOutcome::Applied {
                    println!("render of page {page}: {outcome:?}");
                }
            }
            Event::Next => {
                session.next_page();
            }
            Event::PointerDown(pos) => session.begin_pointer_drag(pos),
            Event::PointerMove(pos) => {
                if let Some(p) = session.pointer_moved(pos) {
                    println!("live: {:?}", StampRequest::from(p));
                }
            }
            Event::PointerUp => {
                session.end_pointer_drag();
            }
            Event::ResizeStart => session.begin_resize(),
            Event::ResizeStop(size) => {
                session.resize_stop(size);
            }
        }
    }

    println!("{:#?}", session.debug_info());

    match session.placement() {
        Some(p) => match StampRequest::from(p).to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("could not encode stamping request: {err}"),
        },
        None => eprintln!("page not rendered; nothing to stamp"),
    }
}
