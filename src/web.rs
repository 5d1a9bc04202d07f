// Browser driver: finds the canvas, keeps it the size of the viewport and
// runs the render loop off requestAnimationFrame.

use crate::config::NetworkConfig;
use crate::error::{NetworkError, Result};
use crate::render_loop::{CancelToken, RenderLoop, Tick};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Returned to JS so the page can tear the animation down. Dropping it
/// without calling `stop()` leaves the animation running for the rest of
/// the page's life.
#[wasm_bindgen]
pub struct NetworkHandle {
    window: Window,
    cancel: CancelToken,
    render_loop: Weak<RefCell<RenderLoop>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl NetworkHandle {
    /// Stops the frame loop after the current frame and detaches the
    /// resize listener.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(on_resize) = self.on_resize.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                warn!("failed to detach resize listener: {:?}", err);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// True once a stopped loop has freed its frame callback and state.
    pub fn is_released(&self) -> bool {
        self.render_loop.upgrade().is_none()
    }
}

impl NetworkHandle {
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl Drop for NetworkHandle {
    fn drop(&mut self) {
        // The listener must outlive the handle while the loop keeps going
        if let Some(on_resize) = self.on_resize.take() {
            on_resize.forget();
        }
    }
}

#[wasm_bindgen]
pub fn start_network(canvas_id: &str) -> std::result::Result<NetworkHandle, JsValue> {
    let rng = StdRng::from_entropy();
    Ok(start(canvas_id, NetworkConfig::default(), rng)?)
}

/// Same as `start_network` but with a fixed random seed, so the layout is
/// reproducible across page loads.
#[wasm_bindgen]
pub fn start_network_with_seed(
    canvas_id: &str,
    seed: u32,
) -> std::result::Result<NetworkHandle, JsValue> {
    let rng = StdRng::seed_from_u64(seed as u64);
    Ok(start(canvas_id, NetworkConfig::default(), rng)?)
}

pub fn start(canvas_id: &str, config: NetworkConfig, rng: StdRng) -> Result<NetworkHandle> {
    let window = web_sys::window().ok_or(NetworkError::NoWindow)?;
    let canvas = find_canvas(&window, canvas_id)?;
    let mut context = context_2d(&canvas)?;

    let mut render_loop = RenderLoop::new(config, rng)?;
    let (width, height) = viewport_size(&window)?;
    fit_canvas(&canvas, width, height);
    render_loop.resize(width, height);
    let cancel = render_loop.cancel_token();
    let render_loop = Rc::new(RefCell::new(render_loop));

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    let frame_loop = render_loop.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match frame_loop.borrow_mut().tick(&mut context) {
            Ok(Tick::Stopped) => {
                info!("particle network stopped");
                release_frame(&frame_window, &f);
                return;
            }
            Ok(Tick::Continue) => {}
            // A half-drawn frame is overwritten by the next one
            Err(err) => warn!("frame failed: {}", err),
        }
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&frame_window, next) {
                warn!("could not schedule next frame: {}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = match g.borrow().as_ref() {
        Some(first) => request_animation_frame(&window, first),
        None => Ok(()),
    };
    if let Err(err) = scheduled {
        g.borrow_mut().take();
        return Err(err);
    }

    let on_resize = {
        let window = window.clone();
        let render_loop = render_loop.clone();
        Closure::wrap(Box::new(move || match viewport_size(&window) {
            Ok((width, height)) => {
                fit_canvas(&canvas, width, height);
                render_loop.borrow_mut().resize(width, height);
            }
            Err(err) => warn!("ignoring resize: {}", err),
        }) as Box<dyn FnMut()>)
    };
    if let Err(err) =
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
    {
        // The first frame is already queued; it sees the token and winds down
        cancel.cancel();
        return Err(NetworkError::host(err));
    }
    info!("particle network started on #{} at {}x{}", canvas_id, width, height);

    Ok(NetworkHandle {
        window,
        cancel,
        render_loop: Rc::downgrade(&render_loop),
        on_resize: Some(on_resize),
    })
}

fn find_canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement> {
    let document = window.document().ok_or(NetworkError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| NetworkError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| NetworkError::NotACanvas(id.to_owned()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(NetworkError::host)?
        .ok_or(NetworkError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| NetworkError::ContextUnavailable)
}

fn viewport_size(window: &Window) -> Result<(u32, u32)> {
    let width = window.inner_width().map_err(NetworkError::host)?;
    let height = window.inner_height().map_err(NetworkError::host)?;
    Ok((to_pixels(width.as_f64()), to_pixels(height.as_f64())))
}

// innerWidth/innerHeight are integral in practice; anything odd becomes 0
fn to_pixels(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v as u32,
        _ => 0,
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

// The frame callback owns itself through `f`; it cannot be dropped while it
// runs, so hand it to one more animation frame that drops it.
fn release_frame(window: &Window, f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let frame = match f.borrow_mut().take() {
        Some(frame) => frame,
        None => return,
    };
    let release = Closure::once_into_js(move || drop(frame));
    if let Err(err) = window.request_animation_frame(release.unchecked_ref()) {
        warn!("could not release frame callback: {:?}", err);
    }
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<()> {
    window
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(NetworkError::host)
}
