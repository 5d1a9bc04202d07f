mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod links;
mod logger;
pub mod particle;
pub mod render_loop;
pub mod surface;
pub mod web;

pub use color::Color;
pub use config::NetworkConfig;
pub use error::{NetworkError, Result};
pub use field::{particle_count, ParticleField};
pub use links::{link_alpha, AllPairs, Link, NeighborSearch};
pub use particle::Particle;
pub use render_loop::{CancelToken, FrameStats, RenderLoop, Tick};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use web::{start_network, start_network_with_seed, NetworkHandle};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    logger::init(log::LevelFilter::Info);
}

// console.time / console.timeEnd around a scope. Only talks to the console
// in browser builds with the `timing` feature on.
pub struct Timer<'a> {
    #[cfg_attr(not(all(target_arch = "wasm32", feature = "timing")), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(target_arch = "wasm32", feature = "timing"))]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(all(target_arch = "wasm32", feature = "timing"))]
        web_sys::console::time_end_with_label(self.name);
    }
}
