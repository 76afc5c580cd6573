//! Deterministic content oracle deriving default tokens from coordinates.

use tokenfield_core::{CellCoord, TokenValue};

/// Probability that an untouched cell starts with a token.
pub(crate) const TOKEN_SPAWN_PROBABILITY: f64 = 0.1;

const LUCK_SEED: u64 = 0x51ce_7a3d_9bb4_02e7;
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Default token for a cell the player has never touched.
///
/// Pure and idempotent: the result depends only on the coordinate and is
/// stable across runs and processes. Used only when the override store has
/// no record for the cell.
#[must_use]
pub fn initial_token(cell: CellCoord) -> TokenValue {
    if luck(&cell.key()) < TOKEN_SPAWN_PROBABILITY {
        TokenValue::new(1)
    } else {
        TokenValue::EMPTY
    }
}

/// Deterministic pseudo-random number in `[0, 1)` derived from a string key.
fn luck(key: &str) -> f64 {
    let mut hash = FNV_OFFSET ^ LUCK_SEED;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94d0_49bb_1331_11eb);
    hash ^= hash >> 31;

    (hash >> 11) as f64 / (1u64 << 53) as f64
}
