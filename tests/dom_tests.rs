// Browser tests for the DOM hooks. Run with
// `wasm-pack test --headless --chrome --features hydrate`.
#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use vogue_perfum::motion::dom::use_animation_frame;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn wait_frames(count: usize) {
    for _ in 0..count {
        let next = js_sys::Promise::new(&mut |resolve, _| {
            let _ = window().request_animation_frame(&resolve);
        });
        let _ = JsFuture::from(next).await;
    }
}

#[wasm_bindgen_test]
async fn frame_loop_stops_after_cleanup() {
    let ticks = Rc::new(Cell::new(0u32));
    let owner = Owner::new();
    owner.with(|| {
        let ticks = ticks.clone();
        use_animation_frame(move |_, _| ticks.set(ticks.get() + 1));
    });

    wait_frames(3).await;
    assert!(ticks.get() > 0);

    owner.cleanup();
    let stopped_at = ticks.get();
    wait_frames(3).await;
    assert_eq!(ticks.get(), stopped_at);
}
