// Simple particle struct to keep track of individual position, velocity, and radius

use crate::config::NetworkConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniformly placed inside the surface, with each velocity component
    // in [-max_speed, max_speed) and a radius in [min_radius, max_radius)
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &NetworkConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let radius =
            rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Moves by one tick of velocity, then flips each velocity component whose
    // axis ended up outside the surface. Position is left where it landed.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particle_respects_bounds() {
        let config = NetworkConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, 640.0, 480.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 640.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 480.0);
            assert!(p.vel[0].abs() <= 0.2 && p.vel[1].abs() <= 0.2);
            assert!(p.radius >= 0.5 && p.radius < 2.0);
        }
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut p = Particle::new(10.0, 20.0, 0.1, -0.2, 1.0);
        p.advance(100.0, 100.0);
        assert!((p.pos[0] - 10.1).abs() < 1e-12);
        assert!((p.pos[1] - 19.8).abs() < 1e-12);
        assert_eq!(p.vel, [0.1, -0.2]);
    }

    #[test]
    fn crossing_left_edge_flips_once() {
        let mut p = Particle::new(0.1, 50.0, -0.2, 0.0, 1.0);
        p.advance(100.0, 100.0);
        assert!(p.pos[0] < 0.0);
        assert_eq!(p.vel[0], 0.2);

        // Next tick brings it back inside without another flip
        p.advance(100.0, 100.0);
        assert!(p.pos[0] >= 0.0);
        assert_eq!(p.vel[0], 0.2);
    }

    #[test]
    fn axes_reflect_independently() {
        let mut p = Particle::new(99.95, 50.0, 0.1, 0.1, 1.0);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel, [-0.1, 0.1]);
    }

    #[test]
    fn position_is_never_clamped() {
        let mut p = Particle::new(100.0, 100.0, 0.2, 0.2, 1.0);
        p.advance(100.0, 100.0);
        assert!(p.pos[0] > 100.0 && p.pos[1] > 100.0);
    }

    #[test]
    fn radius_is_untouched_by_motion() {
        let mut p = Particle::new(0.0, 0.0, -0.2, -0.2, 1.25);
        for _ in 0..10 {
            p.advance(5.0, 5.0);
        }
        assert_eq!(p.radius, 1.25);
    }
}
