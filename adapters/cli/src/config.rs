//! Optional TOML configuration for the terminal front-end.

use std::{fs, path::Path};

use serde::Deserialize;
use tokenfield_core::GeoPosition;
use tokenfield_world::{DEFAULT_SPAWN, DEFAULT_VIEWPORT_HALF_CELLS};

const DEFAULT_GPS_SEED: u64 = 0x7f4a_7c15;

/// Tunables the player may override through a configuration file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Latitude new sessions spawn at.
    pub(crate) spawn_lat: f64,
    /// Longitude new sessions spawn at.
    pub(crate) spawn_lng: f64,
    /// Half-size of the viewport window measured in cells.
    pub(crate) viewport_half_cells: u32,
    /// Seed driving the simulated geolocation walk.
    pub(crate) gps_seed: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            spawn_lat: DEFAULT_SPAWN.lat(),
            spawn_lng: DEFAULT_SPAWN.lng(),
            viewport_half_cells: DEFAULT_VIEWPORT_HALF_CELLS,
            gps_seed: DEFAULT_GPS_SEED,
        }
    }
}

impl CliConfig {
    /// Loads the configuration file, falling back to defaults on any failure.
    pub(crate) fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(error) => {
                    log::warn!("ignoring invalid config {}: {error}", path.display());
                    Self::default()
                }
            },
            Err(error) => {
                log::warn!("could not read config {}: {error}", path.display());
                Self::default()
            }
        }
    }

    /// Spawn position assembled from the configured coordinates.
    pub(crate) fn spawn(&self) -> GeoPosition {
        GeoPosition::new(self.spawn_lat, self.spawn_lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_path_yields_defaults() {
        let config = CliConfig::load(None);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.spawn(), DEFAULT_SPAWN);
    }

    #[test]
    fn partial_files_fill_remaining_fields_with_defaults() {
        let config: CliConfig = toml::from_str("viewport_half_cells = 4").expect("config parses");
        assert_eq!(config.viewport_half_cells, 4);
        assert_eq!(config.spawn(), DEFAULT_SPAWN);
        assert_eq!(config.gps_seed, DEFAULT_GPS_SEED);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<CliConfig>("unknown_field = 1").is_err());
    }

    #[test]
    fn full_files_override_every_field() {
        let config: CliConfig = toml::from_str(
            "spawn_lat = 36.97\nspawn_lng = -122.02\nviewport_half_cells = 6\ngps_seed = 7",
        )
        .expect("config parses");
        assert_eq!(config.spawn(), GeoPosition::new(36.97, -122.02));
        assert_eq!(config.viewport_half_cells, 6);
        assert_eq!(config.gps_seed, 7);
    }
}
