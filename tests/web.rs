//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use particle_network::{start_network, start_network_with_seed, RenderLoop};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

// Resolves on the next animation frame
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

async fn frames(n: usize) {
    for _ in 0..n {
        next_frame().await;
    }
}

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_fails_at_startup() {
    assert!(start_network("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn canvas_follows_viewport() {
    let canvas = add_canvas("network-canvas");
    let mut handle = start_network_with_seed("network-canvas", 1).unwrap();
    let window = web_sys::window().unwrap();
    assert_eq!(
        canvas.width() as f64,
        window.inner_width().unwrap().as_f64().unwrap().floor()
    );
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());
}

#[wasm_bindgen_test]
fn draws_onto_real_context() {
    let canvas = add_canvas("direct-canvas");
    canvas.set_width(600);
    canvas.set_height(600);
    let mut context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    let mut rl = RenderLoop::new(Default::default(), StdRng::from_entropy()).unwrap();
    rl.resize(600, 600);
    let stats = rl.render_frame(&mut context).unwrap();
    assert_eq!(stats.particles, 14);
}

#[wasm_bindgen_test]
async fn dropped_handle_keeps_animating() {
    add_canvas("fire-and-forget");
    let handle = start_network_with_seed("fire-and-forget", 2).unwrap();
    let token = handle.cancel_token();
    drop(handle);

    frames(3).await;
    assert!(!token.is_cancelled());

    // The resize listener outlived the handle
    let window = web_sys::window().unwrap();
    let resize = Event::new("resize").unwrap();
    window.dispatch_event(&resize).unwrap();
    frames(2).await;
    assert!(!token.is_cancelled());
}

#[wasm_bindgen_test]
async fn stop_releases_loop_state() {
    add_canvas("stopped-canvas");
    let mut handle = start_network_with_seed("stopped-canvas", 3).unwrap();
    frames(2).await;
    assert!(!handle.is_released());

    handle.stop();
    frames(3).await;
    assert!(handle.is_released());
}

#[wasm_bindgen_test]
async fn resize_after_start_keeps_loop_alive() {
    let canvas = add_canvas("resized-canvas");
    let mut handle = start_network_with_seed("resized-canvas", 4).unwrap();
    canvas.set_width(1);

    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(
        canvas.width() as f64,
        window.inner_width().unwrap().as_f64().unwrap().floor()
    );
    frames(2).await;
    assert!(handle.is_running());
    assert!(!handle.is_released());
    handle.stop();
}
