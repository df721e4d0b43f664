//! Generation configuration
//!
//! One immutable bundle of knobs passed into the pipeline, replacing
//! scattered per-system defaults. Serializable so a config can be kept in a
//! JSON file next to a favorite seed.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable parameters for one generation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Probability that a non-border cell starts as ground.
    pub chance_to_start_alive: f64,
    /// Cells within this margin of any map edge are forced void.
    pub border_width: usize,
    /// Ground regions smaller than this are erased to void.
    pub ground_region_threshold: usize,
    /// Void regions smaller than this are filled back to ground.
    pub void_region_threshold: usize,
    /// Number of smoothing generations to run.
    pub simulation_steps: u32,
    /// Disk radius used when carving passages between rooms.
    pub connections_radius: usize,
    /// World units per cell, used when placing anchor points.
    pub cell_width: f32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            chance_to_start_alive: 0.58,
            border_width: 2,
            ground_region_threshold: 50,
            void_region_threshold: 50,
            simulation_steps: 8,
            connections_radius: 3,
            cell_width: 50.0,
        }
    }
}

impl CaveConfig {
    /// Load a configuration from a JSON file. Missing fields fall back to
    /// their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = CaveConfig::default();
        assert_eq!(config.chance_to_start_alive, 0.58);
        assert_eq!(config.border_width, 2);
        assert_eq!(config.ground_region_threshold, 50);
        assert_eq!(config.void_region_threshold, 50);
        assert_eq!(config.simulation_steps, 8);
        assert_eq!(config.connections_radius, 3);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: CaveConfig =
            serde_json::from_str(r#"{ "simulation_steps": 3, "border_width": 1 }"#).unwrap();
        assert_eq!(config.simulation_steps, 3);
        assert_eq!(config.border_width, 1);
        assert_eq!(config.chance_to_start_alive, 0.58);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CaveConfig {
            simulation_steps: 12,
            connections_radius: 1,
            ..CaveConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: CaveConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.simulation_steps, 12);
        assert_eq!(back.connections_radius, 1);
    }
}
