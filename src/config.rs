// Tunable constants for the network. Defaults reproduce the look of the
// original background animation.

use crate::color::Color;
use crate::error::{NetworkError, Result};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    /// Hard cap on the particle count regardless of surface area.
    pub max_particles: usize,
    /// Surface area (in square pixels) that "buys" one particle.
    pub density_divisor: f64,
    /// Per-axis velocity bound at creation, in pixels per tick.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Pairs at or beyond this distance are not linked.
    pub link_distance: f64,
    /// Alpha of a link between two coincident particles.
    pub link_alpha: f64,
    pub link_width: f64,
    pub node_alpha: f64,
    pub accent: Color,
}

impl NetworkConfig {
    pub const MAX_PARTICLES: usize = 60;
    pub const DENSITY_DIVISOR: f64 = 25000.0;
    pub const MAX_SPEED: f64 = 0.2;
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 2.0;
    pub const LINK_DISTANCE: f64 = 180.0;
    pub const LINK_ALPHA: f64 = 0.15;
    pub const LINK_WIDTH: f64 = 0.5;
    pub const NODE_ALPHA: f64 = 0.4;
    pub const ACCENT: u32 = 0x10b981;

    pub fn validate(&self) -> Result<()> {
        if !(self.density_divisor > 0.0) {
            return Err(invalid("density_divisor must be positive"));
        }
        if !(self.max_speed >= 0.0) {
            return Err(invalid("max_speed must not be negative"));
        }
        if !(self.min_radius > 0.0 && self.min_radius < self.max_radius) {
            return Err(invalid("radius range must be positive and non-empty"));
        }
        if !(self.link_distance > 0.0) {
            return Err(invalid("link_distance must be positive"));
        }
        if !(self.link_width > 0.0) {
            return Err(invalid("link_width must be positive"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> NetworkError {
    NetworkError::InvalidConfig(msg.to_owned())
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            max_particles: Self::MAX_PARTICLES,
            density_divisor: Self::DENSITY_DIVISOR,
            max_speed: Self::MAX_SPEED,
            min_radius: Self::MIN_RADIUS,
            max_radius: Self::MAX_RADIUS,
            link_distance: Self::LINK_DISTANCE,
            link_alpha: Self::LINK_ALPHA,
            link_width: Self::LINK_WIDTH,
            node_alpha: Self::NODE_ALPHA,
            accent: Color::from_rgb_u32(Self::ACCENT),
        }
    }
}
