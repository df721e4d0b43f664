//! Anchor point sampling
//!
//! Picks world-positioned points on ground cells for scene decoration (the
//! caller scatters trees, lights and the like at them). Every ground cell
//! gets an independent Bernoulli draw at the caller's probability, so the
//! sequence is lazy but not idempotent: invoking the sampler again re-draws.

use rand::Rng;

use crate::cave::CaveMap;
use crate::grid::VOID;

/// A sampled decoration point in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

/// Lazily sample ground cells with probability `luck` each, yielding their
/// world-space positions (cell coordinates scaled by the configured cell
/// width). Each call consumes fresh randomness from `rng`.
pub fn sample_anchors<'a, R: Rng>(
    map: &'a CaveMap,
    luck: f64,
    rng: &'a mut R,
) -> impl Iterator<Item = Anchor> + 'a {
    let luck = luck.clamp(0.0, 1.0);
    let cell_width = map.config.cell_width;

    map.grid
        .iter()
        .filter(|(_, _, &value)| value != VOID)
        .filter(move |_| rng.gen_bool(luck))
        .map(move |(x, y, _)| Anchor {
            x: x as f32 * cell_width,
            y: y as f32 * cell_width,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::generate_cave;
    use crate::config::CaveConfig;
    use crate::seeds::MapSeeds;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_map() -> CaveMap {
        let config = CaveConfig {
            chance_to_start_alive: 1.0,
            border_width: 1,
            simulation_steps: 0,
            ground_region_threshold: 0,
            void_region_threshold: 0,
            ..CaveConfig::default()
        };
        generate_cave(10, 10, &config, MapSeeds::from_master(5))
    }

    #[test]
    fn test_full_luck_yields_every_ground_cell() {
        let map = small_map();
        let mut rng = ChaCha8Rng::seed_from_u64(map.seeds.anchors);

        let anchors: Vec<Anchor> = sample_anchors(&map, 1.0, &mut rng).collect();
        assert_eq!(anchors.len(), map.ground_cells());
    }

    #[test]
    fn test_zero_luck_yields_nothing() {
        let map = small_map();
        let mut rng = ChaCha8Rng::seed_from_u64(map.seeds.anchors);
        assert_eq!(sample_anchors(&map, 0.0, &mut rng).count(), 0);
    }

    #[test]
    fn test_positions_are_scaled_to_world_space() {
        let map = small_map();
        let cell_width = map.config.cell_width;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for anchor in sample_anchors(&map, 1.0, &mut rng) {
            assert_eq!(anchor.x % cell_width, 0.0);
            assert_eq!(anchor.y % cell_width, 0.0);
        }
    }

    #[test]
    fn test_redraws_per_invocation() {
        // Same RNG threaded through two calls: the second call continues the
        // stream, so the draws differ between invocations.
        let map = small_map();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let first: Vec<Anchor> = sample_anchors(&map, 0.4, &mut rng).collect();
        let second: Vec<Anchor> = sample_anchors(&map, 0.4, &mut rng).collect();
        assert_ne!(first, second);

        // Restarting the RNG restarts the sequence.
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let replay: Vec<Anchor> = sample_anchors(&map, 0.4, &mut rng).collect();
        assert_eq!(first, replay);
    }
}
