// Render loop struct that owns the surface dimensions and the particle field,
// advances the simulation once per frame and draws links and nodes onto
// whatever `Surface` the host hands it.

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::field::ParticleField;
use crate::links::{link_alpha, AllPairs, Link, NeighborSearch};
use crate::surface::Surface;
use crate::Timer;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag, checked at the top of every tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A frame was drawn; the driver should schedule the next one.
    Continue,
    /// The loop was cancelled; nothing was drawn.
    Stopped,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct RenderLoop<R = StdRng, N = AllPairs> {
    width: u32,
    height: u32,
    config: NetworkConfig,
    field: ParticleField<R>,
    search: N,
    links: Vec<Link>,
    cancel: CancelToken,
}

impl<R: Rng> RenderLoop<R, AllPairs> {
    pub fn new(config: NetworkConfig, rng: R) -> Result<Self> {
        RenderLoop::with_search(config, rng, AllPairs)
    }
}

impl<R: Rng, N: NeighborSearch> RenderLoop<R, N> {
    pub fn with_search(config: NetworkConfig, rng: R, search: N) -> Result<Self> {
        config.validate()?;
        Ok(RenderLoop {
            width: 0,
            height: 0,
            config,
            field: ParticleField::new(config, rng),
            search,
            links: Vec::new(),
            cancel: CancelToken::new(),
        })
    }

    /// Adopts new surface dimensions and reseeds the field for them before
    /// returning, so the next frame never sees stale particles.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.field.seed(width, height);
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<FrameStats> {
        let _timer = Timer::new("RenderLoop::render_frame");
        let (w, h) = (self.width as f64, self.height as f64);
        surface.clear(w, h)?;

        self.field.step(self.width, self.height);

        let links = &mut self.links;
        links.clear();
        self.search.for_each_link(
            self.field.particles(),
            self.config.link_distance,
            |link| links.push(link),
        );
        for link in links.iter() {
            let alpha = link_alpha(link.distance, self.config.link_distance, self.config.link_alpha);
            surface.stroke_line(
                link.from,
                link.to,
                self.config.accent.with_alpha(alpha),
                self.config.link_width,
            )?;
        }

        let node_color = self.config.accent.with_alpha(self.config.node_alpha);
        for particle in self.field.particles() {
            surface.fill_circle(particle.pos, particle.radius, node_color)?;
        }

        Ok(FrameStats {
            particles: self.field.len(),
            links: self.links.len(),
        })
    }

    /// One iteration of the loop body. Returns `Tick::Stopped` without
    /// touching the surface once the cancel token is set.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Tick> {
        if self.cancel.is_cancelled() {
            return Ok(Tick::Stopped);
        }
        self.render_frame(surface)?;
        Ok(Tick::Continue)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}
