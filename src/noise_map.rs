//! Fractal noise maps
//!
//! The second terrain generator: a layered-octave noise heightmap normalized
//! to [0, 1], classified into caller-defined terrain bands. Complements the
//! cellular cave pipeline for maps that want rolling height variation
//! instead of binary caves.

use noise::{NoiseFn, Perlin, Seedable};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;

/// Fallback when a non-positive scale is requested.
pub const DEFAULT_SCALE: f64 = 50.0;

/// Octave parameters for noise generation.
#[derive(Clone, Debug)]
pub struct NoiseOptions {
    /// Zoom factor: sample coordinates are divided by this.
    pub scale: f64,
    /// Number of noise layers to stack.
    pub octaves: u32,
    /// Amplitude falloff per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// A named height band for classifying noise values.
#[derive(Clone, Debug)]
pub struct TerrainType {
    pub name: &'static str,
    /// Upper height bound of the band, inclusive.
    pub height: f32,
}

/// Find the band a height value falls in: the first entry whose upper bound
/// is at or above the value. Bands are expected sorted by ascending height.
pub fn classify_height(bands: &[TerrainType], height: f32) -> Option<&TerrainType> {
    bands.iter().find(|band| height <= band.height)
}

/// Generate a width×height noise map with values normalized into [0, 1] by
/// inverse-lerping between the observed extremes. Each octave samples at a
/// random offset so maps differ per seed; amplitude and frequency follow the
/// persistence/lacunarity schedule.
pub fn generate_noise_map(
    width: usize,
    height: usize,
    options: &NoiseOptions,
    seed: u64,
) -> Grid<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let perlin = Perlin::new(1).set_seed(seed as u32);

    let scale = if options.scale > 0.0 {
        options.scale
    } else {
        DEFAULT_SCALE
    };
    let octaves = options.octaves.max(1);

    let offsets: Vec<(f64, f64)> = (0..octaves)
        .map(|_| {
            (
                rng.gen_range(-100_000..=100_000) as f64,
                rng.gen_range(-100_000..=100_000) as f64,
            )
        })
        .collect();

    let half_width = width as f64 / 2.0;
    let half_height = height as f64 / 2.0;

    let mut map = Grid::new_with(width, height, 0.0f32);
    let mut min_value = f32::MAX;
    let mut max_value = f32::MIN;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let mut amplitude = 1.0;
            let mut frequency = 1.0;
            let mut value = 0.0;

            for &(ox, oy) in &offsets {
                let sample_x = (ox + x as f64 - half_width) / scale * frequency;
                let sample_y = (oy + y as f64 - half_height) / scale * frequency;

                value += perlin.get([sample_x, sample_y]) * amplitude;
                amplitude *= options.persistence;
                frequency *= options.lacunarity;
            }

            let value = value as f32;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            map.set(x, y, value);
        }
    }

    // Normalize against the observed range.
    let range = max_value - min_value;
    if range > 0.0 {
        for (_, _, value) in map.iter_mut() {
            *value = (*value - min_value) / range;
        }
    }

    map
}
