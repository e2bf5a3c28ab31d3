// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder basics.
//!
//! Drive a press-and-hold drag over a small column, with live preview and a
//! container-relative ghost, printing what a host would render at each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example reorder_basics`

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_demos::{Clock, StackLayout, apply};
use understory_reorder::{
    InputSource, ListenerScope, PointerInput, PositioningSpace, PressOutcome, Reorder,
    ReorderConfig,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut items = vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
    let layout = StackLayout {
        origin: Point::new(200.0, 100.0),
        row: Size::new(240.0, 32.0),
        len: items.len(),
    };
    let config = ReorderConfig::default()
        .with_space(PositioningSpace::Relative)
        .with_live_preview(true);

    let mut reorder = Reorder::new(config);
    if reorder.activate() {
        for source in InputSource::ALL {
            if source.scope() == ListenerScope::Surface {
                println!("install surface listener: {source:?}");
            }
        }
    }
    reorder.remeasure(&layout);

    let mut clock = Clock::default();

    // A quick tap on Beta: released before the hold delay, so nothing moves.
    if let PressOutcome::Armed(timer) =
        reorder.press(1, &PointerInput::Mouse(layout.row_center(1)), clock.now())
    {
        clock.schedule(timer);
    }
    clock.advance(60);
    println!("tap released: {:?}", reorder.release());
    if let Some(stale) = clock.advance(200) {
        println!("late timer ignored: {:?}", reorder.fire(stale));
    }

    // Press and hold Alpha, then drag it down to Delta.
    if let PressOutcome::Armed(timer) =
        reorder.press(0, &PointerInput::Mouse(layout.row_center(0)), clock.now())
    {
        clock.schedule(timer);
    }
    if let Some(timer) = clock.advance(150) {
        println!("activated: {:?}", reorder.fire(timer));
    }

    for target in 1..=3 {
        let pointer = layout.row_center(target) + Vec2::new(7.0, 3.0);
        let event = reorder.pointer_move(&PointerInput::Mouse(pointer));
        let ghost = reorder.ghost().map(|g| g.rect());
        println!("move -> {event:?}");
        println!("  ghost (container space): {ghost:?}");
        println!("  preview: {:?}", reorder.display(&items));
    }

    if let Some(event) = reorder.release() {
        println!("release -> {event:?}");
        apply(&mut items, event);
    }
    println!("committed order: {items:?}");

    if reorder.deactivate() {
        println!("remove surface listeners");
    }
}
