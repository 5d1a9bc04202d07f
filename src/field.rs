// Owns the particle set and the random source used to (re)generate it.
// Pure data plus update rule; drawing lives in the render loop.

use crate::config::NetworkConfig;
use crate::particle::Particle;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    config: NetworkConfig,
    rng: R,
}

/// Number of particles a `width` x `height` surface gets: one per
/// `density_divisor` square pixels, capped at `max_particles`.
pub fn particle_count(width: u32, height: u32, config: &NetworkConfig) -> usize {
    let area = width as f64 * height as f64;
    let count = (area / config.density_divisor).floor() as usize;
    count.min(config.max_particles)
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: NetworkConfig, rng: R) -> Self {
        ParticleField {
            particles: Vec::new(),
            config,
            rng,
        }
    }

    /// Throws away every particle and generates a fresh set sized for the
    /// given surface.
    pub fn seed(&mut self, width: u32, height: u32) {
        let count = particle_count(width, height, &self.config);
        let (w, h) = (width as f64, height as f64);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(&mut self.rng, w, h, &self.config));
        }
        self.particles = particles;
        debug!("seeded {} particles for {}x{}", count, width, height);
    }

    /// Advances every particle by exactly one tick.
    pub fn step(&mut self, width: u32, height: u32) {
        let (w, h) = (width as f64, height as f64);
        for particle in &mut self.particles {
            particle.advance(w, h);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }
}
