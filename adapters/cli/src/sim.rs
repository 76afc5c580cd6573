//! Simulated geolocation source standing in for real positioning hardware.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tokenfield_core::{GeoPosition, TILE_DEGREES};
use tokenfield_system_movement::{PositionError, PositionSource};

const DROPOUT_PROBABILITY: f64 = 0.05;
const MAX_STEP_TILES: f64 = 0.6;

/// Seeded random walk emitting one position fix per poll.
///
/// An occasional dropout exercises the position-error path the same way a
/// real receiver losing its fix would.
#[derive(Debug)]
pub(crate) struct SimulatedGps {
    rng: ChaCha8Rng,
    position: GeoPosition,
}

impl SimulatedGps {
    /// Creates a walk starting at `start`, reproducible for a given seed.
    pub(crate) fn new(seed: u64, start: GeoPosition) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            position: start,
        }
    }
}

impl PositionSource for SimulatedGps {
    fn current(&mut self) -> Result<GeoPosition, PositionError> {
        Ok(self.position)
    }

    fn poll_updates(&mut self, out: &mut Vec<Result<GeoPosition, PositionError>>) {
        if self.rng.gen_bool(DROPOUT_PROBABILITY) {
            out.push(Err(PositionError::Unavailable));
            return;
        }

        let dlat = self.rng.gen_range(-MAX_STEP_TILES..=MAX_STEP_TILES) * TILE_DEGREES;
        let dlng = self.rng.gen_range(-MAX_STEP_TILES..=MAX_STEP_TILES) * TILE_DEGREES;
        self.position = GeoPosition::new(self.position.lat() + dlat, self.position.lng() + dlng);
        out.push(Ok(self.position));
    }
}
