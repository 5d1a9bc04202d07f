// Proximity search: finds every pair of particles close enough to be
// joined by a line. The brute-force scan is fine for the particle counts
// this renders; anything smarter plugs in through `NeighborSearch`.

use crate::particle::Particle;
use vecmath::{vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub distance: f64,
}

pub trait NeighborSearch {
    /// Calls `visit` once for every unordered pair of distinct particles
    /// strictly closer than `max_dist`.
    fn for_each_link<F: FnMut(Link)>(&self, particles: &[Particle], max_dist: f64, visit: F);

    fn links(&self, particles: &[Particle], max_dist: f64) -> Vec<Link> {
        let mut links = Vec::new();
        self.for_each_link(particles, max_dist, |link| links.push(link));
        links
    }
}

/// Checks all n(n-1)/2 pairs.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllPairs;

impl NeighborSearch for AllPairs {
    fn for_each_link<F: FnMut(Link)>(&self, particles: &[Particle], max_dist: f64, mut visit: F) {
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let distance = vec2_len(vec2_sub(a.pos, b.pos));
                if distance < max_dist {
                    visit(Link {
                        from: a.pos,
                        to: b.pos,
                        distance,
                    });
                }
            }
        }
    }
}

/// Stroke alpha for a link: `max_alpha` at distance zero, fading linearly
/// to nothing at `max_dist`.
pub fn link_alpha(distance: f64, max_dist: f64, max_alpha: f64) -> f64 {
    if distance >= max_dist {
        0.0
    } else {
        (1.0 - distance / max_dist) * max_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0)
    }

    #[test]
    fn near_pair_is_linked() {
        let links = AllPairs.links(&[at(0.0, 0.0), at(100.0, 0.0)], 180.0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].distance, 100.0);
        let alpha = link_alpha(links[0].distance, 180.0, 0.15);
        assert!((alpha - 0.0666666).abs() < 1e-4);
    }

    #[test]
    fn far_pair_is_not_linked() {
        assert!(AllPairs.links(&[at(0.0, 0.0), at(200.0, 0.0)], 180.0).is_empty());
    }

    #[test]
    fn exact_cutoff_is_not_linked() {
        assert!(AllPairs.links(&[at(0.0, 0.0), at(180.0, 0.0)], 180.0).is_empty());
        assert_eq!(link_alpha(180.0, 180.0, 0.15), 0.0);
    }

    #[test]
    fn each_pair_visited_once() {
        let cluster: Vec<Particle> = (0..10).map(|i| at(i as f64, 0.0)).collect();
        assert_eq!(AllPairs.links(&cluster, 180.0).len(), 45);
    }

    #[test]
    fn uses_euclidean_distance() {
        let links = AllPairs.links(&[at(1.0, 1.0), at(4.0, 5.0)], 180.0);
        assert_eq!(links[0].distance, 5.0);
        assert_eq!(links[0].from, [1.0, 1.0]);
        assert_eq!(links[0].to, [4.0, 5.0]);
    }

    #[test]
    fn alpha_strictly_decreases_with_distance() {
        let mut prev = link_alpha(0.0, 180.0, 0.15);
        assert_eq!(prev, 0.15);
        for d in 1..180 {
            let alpha = link_alpha(d as f64, 180.0, 0.15);
            assert!(alpha < prev);
            prev = alpha;
        }
    }

    #[test]
    fn empty_and_single_produce_nothing() {
        assert!(AllPairs.links(&[], 180.0).is_empty());
        assert!(AllPairs.links(&[at(3.0, 3.0)], 180.0).is_empty());
    }
}
