#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Tokenfield engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! adapters to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use serde::{Deserialize, Serialize};

use crate::session::SessionSnapshot;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Tokenfield.";

/// Angular side length of a single grid cell expressed in degrees.
pub const TILE_DEGREES: f64 = 1e-4;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Imports a previously persisted session before the first reconcile.
    LoadSession {
        /// Snapshot restored from the persistence collaborator.
        snapshot: SessionSnapshot,
    },
    /// Replaces the tracked viewport bounds and reconciles the active set.
    SetViewport {
        /// Visible bounds reported by the viewport collaborator.
        bounds: GeoBounds,
    },
    /// Moves the player to an absolute position and reconciles.
    SetPlayerPosition {
        /// New player position reported by the position source.
        position: GeoPosition,
    },
    /// Advances the player exactly one cell edge in the given direction.
    StepPlayer {
        /// Direction of travel for the unit step.
        direction: Direction,
    },
    /// Requests a token exchange between the player and an active cell.
    InteractWithCell {
        /// Coordinate of the cell the player activated.
        cell: CellCoord,
    },
    /// Selects which movement input strategy drives the player.
    SetMovementMode {
        /// Mode that should become active.
        mode: MovementMode,
    },
    /// Clears all overrides and the inventory, starting a new game.
    ResetSession,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a cell was materialized into the active set.
    CellSpawned {
        /// Coordinate of the spawned cell.
        cell: CellCoord,
        /// Immutable spatial bounds of the cell.
        bounds: CellBounds,
        /// Token the cell starts with (override or oracle default).
        token: TokenValue,
        /// Whether the cell is within the player's reach.
        reachable: bool,
    },
    /// Confirms that a cell left the active set and must be torn down.
    CellDespawned {
        /// Coordinate of the despawned cell.
        cell: CellCoord,
    },
    /// Reports that a cell's visible state changed.
    CellRefreshed {
        /// Coordinate of the refreshed cell.
        cell: CellCoord,
        /// Current token held by the cell.
        token: TokenValue,
        /// Whether the cell is within the player's reach.
        reachable: bool,
    },
    /// Announces the player's new position.
    PlayerMoved {
        /// Position the player now occupies.
        position: GeoPosition,
    },
    /// Announces the new content of the single-slot inventory.
    InventoryChanged {
        /// Token now held by the player.
        token: TokenValue,
    },
    /// Reports the outcome of a token exchange with a cell in reach.
    ExchangeResolved {
        /// Coordinate of the cell involved in the exchange.
        cell: CellCoord,
        /// Which of the exchange cases applied.
        outcome: ExchangeOutcome,
        /// Token remaining in the cell after the exchange.
        cell_token: TokenValue,
        /// Token held by the player after the exchange.
        inventory_token: TokenValue,
    },
    /// Reports that an interaction request was rejected without state change.
    InteractionRejected {
        /// Coordinate the player attempted to interact with.
        cell: CellCoord,
        /// Specific reason the interaction was rejected.
        reason: RejectionReason,
    },
    /// Announces that the active movement input strategy changed.
    MovementModeChanged {
        /// Mode that became active after processing commands.
        mode: MovementMode,
    },
    /// Announces that a token reached the winning denomination.
    ///
    /// Emitted at most once per session; purely informational.
    VictoryAchieved {
        /// Token value that crossed the win threshold.
        token: TokenValue,
    },
    /// Confirms that the session was reset to a fresh state.
    SessionReset,
}

/// Location of a single grid cell expressed as signed tile indices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellCoord {
    i: i32,
    j: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Latitude tile index of the cell.
    #[must_use]
    pub const fn i(&self) -> i32 {
        self.i
    }

    /// Longitude tile index of the cell.
    #[must_use]
    pub const fn j(&self) -> i32 {
        self.j
    }

    /// Returns the cell containing the provided position.
    #[must_use]
    pub fn containing(position: GeoPosition) -> Self {
        Self {
            i: (position.lat() / TILE_DEGREES).floor() as i32,
            j: (position.lng() / TILE_DEGREES).floor() as i32,
        }
    }

    /// Canonical string key used for override lookups and oracle hashing.
    ///
    /// The mapping coordinate to key is injective and stable for the process
    /// lifetime.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{},{}", self.i, self.j)
    }

    /// Parses a canonical key back into a coordinate.
    ///
    /// Returns `None` when the key does not follow the `"i,j"` shape.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        let (i, j) = key.split_once(',')?;
        Some(Self {
            i: i.parse().ok()?,
            j: j.parse().ok()?,
        })
    }

    /// Returns the neighboring coordinate one cell away in the direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.i + 1, self.j),
            Direction::East => Self::new(self.i, self.j + 1),
            Direction::South => Self::new(self.i - 1, self.j),
            Direction::West => Self::new(self.i, self.j - 1),
        }
    }
}

/// Geographic position expressed in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    lat: f64,
    lng: f64,
}

impl GeoPosition {
    /// Creates a new position from latitude and longitude degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude component in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude component in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another position in meters.
    #[must_use]
    pub fn distance_meters(self, other: GeoPosition) -> f64 {
        let lat_a = self.lat.to_radians();
        let lat_b = other.lat.to_radians();
        let half_dlat = (other.lat - self.lat).to_radians() / 2.0;
        let half_dlng = (other.lng - self.lng).to_radians() / 2.0;

        let chord = half_dlat.sin().powi(2)
            + lat_a.cos() * lat_b.cos() * half_dlng.sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * chord.sqrt().asin()
    }

    /// Returns the position one cell edge away in the given direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.lat + TILE_DEGREES, self.lng),
            Direction::East => Self::new(self.lat, self.lng + TILE_DEGREES),
            Direction::South => Self::new(self.lat - TILE_DEGREES, self.lng),
            Direction::West => Self::new(self.lat, self.lng - TILE_DEGREES),
        }
    }
}

/// Axis-aligned geographic rectangle expressed in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl GeoBounds {
    /// Creates a new bounds rectangle from its edges.
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Builds bounds spanning `half_cells` cells on every side of a center.
    #[must_use]
    pub fn around(center: GeoPosition, half_cells: u32) -> Self {
        let half_span = f64::from(half_cells) * TILE_DEGREES;
        Self {
            south: center.lat() - half_span,
            west: center.lng() - half_span,
            north: center.lat() + half_span,
            east: center.lng() + half_span,
        }
    }

    /// Southern edge in degrees latitude.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western edge in degrees longitude.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern edge in degrees latitude.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern edge in degrees longitude.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Reports whether the position lies within the bounds.
    #[must_use]
    pub fn contains(&self, position: GeoPosition) -> bool {
        position.lat() >= self.south
            && position.lat() <= self.north
            && position.lng() >= self.west
            && position.lng() <= self.east
    }
}

/// Immutable spatial bounds of a single grid cell.
///
/// Instances are produced exclusively by the world's geometry cache so that
/// each coordinate is computed at most once per process lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl CellBounds {
    /// Creates cell bounds from explicit edges.
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Southern edge in degrees latitude.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western edge in degrees longitude.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern edge in degrees latitude.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern edge in degrees longitude.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Geometric center of the cell used for reachability checks.
    #[must_use]
    pub fn center(&self) -> GeoPosition {
        GeoPosition::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Integer denomination of a collectible token.
///
/// Zero means "no collectible present"; the same type backs both cell
/// content and the single-slot player inventory.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenValue(u32);

impl TokenValue {
    /// The empty token slot.
    pub const EMPTY: Self = Self(0);

    /// Creates a new token value with the provided denomination.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric denomination.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether the slot holds no collectible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Combines two matching tokens into their doubled denomination.
    #[must_use]
    pub const fn merged_with(self, other: TokenValue) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward increasing latitude.
    North,
    /// Movement toward increasing longitude.
    East,
    /// Movement toward decreasing latitude.
    South,
    /// Movement toward decreasing longitude.
    West,
}

/// Movement input strategy that drives the player position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementMode {
    /// Position updates follow the external geolocation stream.
    Geolocation,
    /// Position updates follow discrete directional-pad steps.
    Directional,
}

impl MovementMode {
    /// Returns the other movement mode, used by toggle controls.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Geolocation => Self::Directional,
            Self::Directional => Self::Geolocation,
        }
    }
}

/// Which of the exchange cases resolved a cell interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeOutcome {
    /// The player took the cell's token into the empty inventory.
    Taken,
    /// The player dropped the held token into the empty cell.
    Dropped,
    /// Two matching tokens merged into their doubled denomination.
    Crafted,
    /// Cell and inventory hold different non-empty tokens; nothing moved.
    Mismatched,
    /// Both sides were empty; nothing to do.
    Idle,
}

/// Reasons a cell interaction request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The cell center lies beyond the player's maximum reach.
    OutOfReach,
    /// The coordinate is not materialized in the active set.
    Inactive,
}

/// Serialized shapes exchanged with the persistence collaborator.
pub mod session {
    use serde::{Deserialize, Serialize};

    use super::{GeoPosition, MovementMode, TokenValue};

    /// Persisted deviation from the deterministic default of one cell.
    ///
    /// `token: None` encodes the explicit-empty sentinel: the cell must never
    /// respawn. `token: Some(v)` supersedes the oracle with `v` on respawn,
    /// including `v = 0`, which stays interactable. An absent record means the
    /// oracle default applies; the three states are never collapsed.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct OverrideRecord {
        /// Canonical cell key the record applies to.
        pub key: String,
        /// Overriding token, or `None` for the deleted sentinel.
        pub token: Option<TokenValue>,
    }

    /// Complete persisted state of one play session.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SessionSnapshot {
        /// Every recorded override in canonical key order.
        pub overrides: Vec<OverrideRecord>,
        /// Token held by the single-slot player inventory.
        pub inventory: TokenValue,
        /// Last known player position.
        pub position: GeoPosition,
        /// Movement input strategy selected by the player.
        pub movement_mode: MovementMode,
    }

    impl SessionSnapshot {
        /// Creates a fresh snapshot for a player standing at `position`.
        #[must_use]
        pub fn starting_at(position: GeoPosition) -> Self {
            Self {
                overrides: Vec::new(),
                inventory: TokenValue::EMPTY,
                position,
                movement_mode: MovementMode::Geolocation,
            }
        }
    }
}
