#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Tokenfield adapters.
//!
//! Backends receive declarative [`Scene`] descriptors composed from world
//! queries and never touch the world directly. Cell adornments are derived
//! each refresh purely from the current token value and reachability, never
//! from stored history.

use anyhow::Result as AnyResult;
use std::{error::Error, fmt};

use tokenfield_core::{
    CellBounds, CellCoord, Direction, GeoBounds, GeoPosition, MovementMode, TokenValue,
};
use tokenfield_world::{query, World};

const TOKEN_FILL: Color = Color::from_rgb_u8(0xff, 0xc1, 0x07);
const EMPTY_FILL: Color = Color::from_rgb_u8(0x9e, 0x9e, 0x9e);
const PLAYER_FILL: Color = Color::from_rgb_u8(0x58, 0x47, 0xff);
const OUT_OF_REACH_LIGHTEN: f32 = 0.45;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Directional-pad press detected on this frame, if any.
    pub pad: Option<Direction>,
    /// Whether the adapter detected a movement-mode toggle on this frame.
    pub mode_toggle: bool,
    /// Cell the player clicked or tapped on this frame, if any.
    pub clicked_cell: Option<CellCoord>,
    /// Whether the player requested a new game on this frame.
    pub reset_requested: bool,
}

/// Immutable description of a single rendered cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPresentation {
    /// Coordinate of the cell.
    pub cell: CellCoord,
    /// Spatial bounds of the rendered rectangle.
    pub bounds: CellBounds,
    /// Token currently held by the cell.
    pub token: TokenValue,
    /// Whether the cell is within the player's reach.
    pub reachable: bool,
}

impl CellPresentation {
    /// Builds the presentation for an active cell snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &query::CellSnapshot) -> Self {
        Self {
            cell: snapshot.cell,
            bounds: snapshot.bounds,
            token: snapshot.token,
            reachable: snapshot.reachable,
        }
    }

    /// Fill color derived from the current token and reachability.
    #[must_use]
    pub fn fill(&self) -> Color {
        let base = if self.token.is_empty() {
            EMPTY_FILL
        } else {
            TOKEN_FILL
        };

        if self.reachable {
            base
        } else {
            base.lighten(OUT_OF_REACH_LIGHTEN)
        }
    }

    /// Value label shown on the cell, or `None` for an empty cell.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if self.token.is_empty() {
            None
        } else {
            Some(self.token.to_string())
        }
    }
}

/// Marker rendered at the player's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerPresentation {
    /// Position the marker is anchored at.
    pub position: GeoPosition,
    /// Fill color of the marker.
    pub color: Color,
}

impl PlayerPresentation {
    /// Creates a player marker at the provided position.
    #[must_use]
    pub const fn new(position: GeoPosition) -> Self {
        Self {
            position,
            color: PLAYER_FILL,
        }
    }
}

/// Status panel shown alongside the map.
#[derive(Clone, Debug, PartialEq)]
pub struct HudPresentation {
    /// Token held by the single-slot inventory.
    pub inventory: TokenValue,
    /// Movement strategy currently driving the player.
    pub movement_mode: MovementMode,
    /// Whether the one-time victory acknowledgment should be shown.
    pub victory: bool,
}

impl HudPresentation {
    /// Creates a new status panel descriptor.
    #[must_use]
    pub const fn new(inventory: TokenValue, movement_mode: MovementMode, victory: bool) -> Self {
        Self {
            inventory,
            movement_mode,
            victory,
        }
    }

    /// Text shown for the inventory slot.
    #[must_use]
    pub fn inventory_label(&self) -> String {
        if self.inventory.is_empty() {
            "inventory: empty".to_owned()
        } else {
            format!("inventory: token {}", self.inventory)
        }
    }
}

/// Scene description combining the viewport, the player and all active cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Bounds currently visible in the viewport.
    pub viewport: GeoBounds,
    /// Marker rendered at the player position.
    pub player: PlayerPresentation,
    /// Active cells in deterministic coordinate order.
    pub cells: Vec<CellPresentation>,
    /// Status panel contents.
    pub hud: HudPresentation,
}

impl Scene {
    /// Composes a scene from the world's current query surface.
    #[must_use]
    pub fn from_world(world: &World) -> Self {
        Self {
            viewport: query::viewport(world),
            player: PlayerPresentation::new(query::player_position(world)),
            cells: query::cell_view(world)
                .iter()
                .map(CellPresentation::from_snapshot)
                .collect(),
            hud: HudPresentation::new(
                query::inventory(world),
                query::movement_mode(world),
                query::victory_announced(world),
            ),
        }
    }

    /// Retrieves the presentation of a specific cell, if it is active.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<&CellPresentation> {
        self.cells.iter().find(|candidate| candidate.cell == cell)
    }
}

/// Map view collaborator owning the tracked bounds.
pub trait ViewportControl {
    /// Bounds currently visible to the player.
    fn visible_bounds(&self) -> GeoBounds;

    /// Re-centers the view on the provided position.
    fn move_to(&mut self, center: GeoPosition);

    /// Returns the new bounds once after each change, `None` otherwise.
    fn take_bounds_change(&mut self) -> Option<GeoBounds>;
}

/// Viewport that keeps a fixed-size window centered on the player.
#[derive(Clone, Copy, Debug)]
pub struct FollowViewport {
    center: GeoPosition,
    half_cells: u32,
    dirty: bool,
}

impl FollowViewport {
    /// Creates a viewport spanning `half_cells` cells on every side.
    ///
    /// Returns an error when `half_cells` is zero. The initial bounds count
    /// as a pending change so the first poll drives the startup reconcile.
    pub fn new(center: GeoPosition, half_cells: u32) -> Result<Self, RenderingError> {
        if half_cells == 0 {
            return Err(RenderingError::InvalidHalfSpan { half_cells });
        }

        Ok(Self {
            center,
            half_cells,
            dirty: true,
        })
    }
}

impl ViewportControl for FollowViewport {
    fn visible_bounds(&self) -> GeoBounds {
        GeoBounds::around(self.center, self.half_cells)
    }

    fn move_to(&mut self, center: GeoPosition) {
        if center != self.center {
            self.center = center;
            self.dirty = true;
        }
    }

    fn take_bounds_change(&mut self) -> Option<GeoBounds> {
        if self.dirty {
            self.dirty = false;
            Some(self.visible_bounds())
        } else {
            None
        }
    }
}

/// Rendering backend capable of presenting Tokenfield scenes.
pub trait RenderingBackend {
    /// Runs the backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives per-frame input captured
    /// by the adapter and may replace the scene before it is rendered.
    fn run<F>(self, scene: Scene, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// The viewport half-span must cover at least one cell.
    InvalidHalfSpan {
        /// Provided half-span that failed validation.
        half_cells: u32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHalfSpan { half_cells } => {
                write!(f, "half_cells must be positive (received {half_cells})")
            }
        }
    }
}

impl Error for RenderingError {}
