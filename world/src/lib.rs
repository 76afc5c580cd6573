#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Tokenfield.
//!
//! The world owns the active cell registry, the override store, the geometry
//! cache and the single-slot inventory. Adapters and systems mutate it
//! exclusively through [`apply`], which reconciles the active set against the
//! tracked viewport and broadcasts [`Event`]s describing every change.

pub mod geometry;
pub mod oracle;
pub mod overrides;

use std::collections::{BTreeMap, BTreeSet};

use tokenfield_core::{
    session::SessionSnapshot, CellBounds, CellCoord, Command, Event, GeoBounds, GeoPosition,
    MovementMode, RejectionReason, TokenValue, WELCOME_BANNER,
};
use tokenfield_system_exchange as exchange;

use crate::geometry::GeometryCache;
use crate::overrides::{CellOverride, OverrideState, OverrideStore};

/// Position new sessions start from when no persisted position exists.
pub const DEFAULT_SPAWN: GeoPosition = GeoPosition::new(57.476538, -4.225123);

/// Half-size of the default viewport window measured in cells.
pub const DEFAULT_VIEWPORT_HALF_CELLS: u32 = 8;

/// Maximum distance at which the player may interact with a cell, in meters.
pub const REACH_METERS: f64 = 25.0;

const VIEWPORT_MARGIN_CELLS: i32 = 2;

/// Represents the authoritative Tokenfield session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    viewport: GeoBounds,
    player: GeoPosition,
    inventory: TokenValue,
    movement_mode: MovementMode,
    overrides: OverrideStore,
    geometry: GeometryCache,
    cells: BTreeMap<CellCoord, ActiveCell>,
    victory_announced: bool,
}

impl World {
    /// Creates a new session ready for its first reconcile.
    ///
    /// No cell is materialized until the first command arrives; adapters load
    /// the persisted session (or push the initial viewport) at startup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            viewport: GeoBounds::around(DEFAULT_SPAWN, DEFAULT_VIEWPORT_HALF_CELLS),
            player: DEFAULT_SPAWN,
            inventory: TokenValue::EMPTY,
            movement_mode: MovementMode::Geolocation,
            overrides: OverrideStore::new(),
            geometry: GeometryCache::new(),
            cells: BTreeMap::new(),
            victory_announced: false,
        }
    }

    fn reconcile(&mut self, out_events: &mut Vec<Event>) {
        let desired = desired_cells(&self.viewport);

        for cell in desired.iter().copied() {
            if self.cells.contains_key(&cell) {
                continue;
            }

            let token = match self.overrides.restore(cell) {
                OverrideState::Deleted => continue,
                OverrideState::Value(token) => token,
                OverrideState::Unset => oracle::initial_token(cell),
            };

            let bounds = self.geometry.bounds_for(cell);
            let reachable = within_reach(self.player, bounds);
            let _ = self.cells.insert(
                cell,
                ActiveCell {
                    bounds,
                    token,
                    reachable,
                },
            );
            out_events.push(Event::CellSpawned {
                cell,
                bounds,
                token,
                reachable,
            });
        }

        let stale: Vec<CellCoord> = self
            .cells
            .keys()
            .filter(|cell| !desired.contains(cell))
            .copied()
            .collect();
        for cell in stale {
            self.despawn(cell, out_events);
        }

        let player = self.player;
        for (cell, state) in self.cells.iter_mut() {
            let reachable = within_reach(player, state.bounds);
            if reachable != state.reachable {
                state.reachable = reachable;
                out_events.push(Event::CellRefreshed {
                    cell: *cell,
                    token: state.token,
                    reachable,
                });
            }
        }
    }

    fn despawn(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if self.cells.remove(&cell).is_some() {
            out_events.push(Event::CellDespawned { cell });
        }
    }

    fn handle_interaction(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        let (before, reachable) = match self.cells.get(&cell) {
            Some(state) => (state.token, state.reachable),
            None => {
                out_events.push(Event::InteractionRejected {
                    cell,
                    reason: RejectionReason::Inactive,
                });
                return;
            }
        };

        if !reachable {
            out_events.push(Event::InteractionRejected {
                cell,
                reason: RejectionReason::OutOfReach,
            });
            return;
        }

        let resolved = exchange::resolve(before, self.inventory);
        out_events.push(Event::ExchangeResolved {
            cell,
            outcome: resolved.outcome,
            cell_token: resolved.cell,
            inventory_token: resolved.inventory,
        });

        if resolved.cell != before {
            if let Some(state) = self.cells.get_mut(&cell) {
                state.token = resolved.cell;
                out_events.push(Event::CellRefreshed {
                    cell,
                    token: resolved.cell,
                    reachable,
                });
            }
            self.overrides.save(cell, CellOverride::Value(resolved.cell));
        }

        if resolved.inventory != self.inventory {
            self.inventory = resolved.inventory;
            out_events.push(Event::InventoryChanged {
                token: self.inventory,
            });
        }

        if resolved.won && !self.victory_announced {
            self.victory_announced = true;
            let token = if resolved.cell == exchange::WIN_TOKEN {
                resolved.cell
            } else {
                resolved.inventory
            };
            out_events.push(Event::VictoryAchieved { token });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadSession { snapshot } => {
            world.overrides.load_all(&snapshot.overrides);
            world.inventory = snapshot.inventory;
            world.player = snapshot.position;
            world.movement_mode = snapshot.movement_mode;
            world.viewport = GeoBounds::around(snapshot.position, DEFAULT_VIEWPORT_HALF_CELLS);
            world.victory_announced = false;

            out_events.push(Event::PlayerMoved {
                position: world.player,
            });
            out_events.push(Event::InventoryChanged {
                token: world.inventory,
            });
            out_events.push(Event::MovementModeChanged {
                mode: world.movement_mode,
            });
            world.reconcile(out_events);
        }
        Command::SetViewport { bounds } => {
            world.viewport = bounds;
            world.reconcile(out_events);
        }
        Command::SetPlayerPosition { position } => {
            if position != world.player {
                world.player = position;
                out_events.push(Event::PlayerMoved { position });
            }
            world.reconcile(out_events);
        }
        Command::StepPlayer { direction } => {
            world.player = world.player.step(direction);
            out_events.push(Event::PlayerMoved {
                position: world.player,
            });
            world.reconcile(out_events);
        }
        Command::InteractWithCell { cell } => {
            world.handle_interaction(cell, out_events);
        }
        Command::SetMovementMode { mode } => {
            if world.movement_mode != mode {
                world.movement_mode = mode;
                out_events.push(Event::MovementModeChanged { mode });
            }
        }
        Command::ResetSession => {
            world.overrides.reset();
            world.inventory = TokenValue::EMPTY;
            world.victory_announced = false;

            out_events.push(Event::SessionReset);
            out_events.push(Event::InventoryChanged {
                token: TokenValue::EMPTY,
            });

            let active: Vec<CellCoord> = world.cells.keys().copied().collect();
            for cell in active {
                world.despawn(cell, out_events);
            }
            world.reconcile(out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use tokenfield_core::{
        session::SessionSnapshot, CellBounds, CellCoord, GeoBounds, GeoPosition, MovementMode,
        TokenValue,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Bounds currently tracked by the reconciler.
    #[must_use]
    pub fn viewport(world: &World) -> GeoBounds {
        world.viewport
    }

    /// Current player position.
    #[must_use]
    pub fn player_position(world: &World) -> GeoPosition {
        world.player
    }

    /// Token held by the single-slot player inventory.
    #[must_use]
    pub fn inventory(world: &World) -> TokenValue {
        world.inventory
    }

    /// Movement input strategy currently selected.
    #[must_use]
    pub fn movement_mode(world: &World) -> MovementMode {
        world.movement_mode
    }

    /// Reports whether the victory acknowledgment has been shown this session.
    #[must_use]
    pub fn victory_announced(world: &World) -> bool {
        world.victory_announced
    }

    /// Captures a read-only view of the currently materialized cells.
    #[must_use]
    pub fn cell_view(world: &World) -> CellView {
        let snapshots = world
            .cells
            .iter()
            .map(|(cell, state)| CellSnapshot {
                cell: *cell,
                bounds: state.bounds,
                token: state.token,
                reachable: state.reachable,
            })
            .collect();
        CellView { snapshots }
    }

    /// Retrieves a single active cell, if the coordinate is materialized.
    #[must_use]
    pub fn cell_at(world: &World, cell: CellCoord) -> Option<CellSnapshot> {
        world.cells.get(&cell).map(|state| CellSnapshot {
            cell,
            bounds: state.bounds,
            token: state.token,
            reachable: state.reachable,
        })
    }

    /// Exports the persisted shape of the session for the storage adapter.
    #[must_use]
    pub fn session_snapshot(world: &World) -> SessionSnapshot {
        SessionSnapshot {
            overrides: world.overrides.records(),
            inventory: world.inventory,
            position: world.player,
            movement_mode: world.movement_mode,
        }
    }

    /// Read-only snapshot describing all materialized cells.
    #[derive(Clone, Debug)]
    pub struct CellView {
        snapshots: Vec<CellSnapshot>,
    }

    impl CellView {
        /// Iterator over the captured snapshots in coordinate order.
        pub fn iter(&self) -> impl Iterator<Item = &CellSnapshot> {
            self.snapshots.iter()
        }

        /// Number of materialized cells.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether any cell is materialized.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<CellSnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single active cell used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct CellSnapshot {
        /// Coordinate of the cell.
        pub cell: CellCoord,
        /// Immutable spatial bounds of the cell.
        pub bounds: CellBounds,
        /// Token currently held by the cell.
        pub token: TokenValue,
        /// Whether the cell is within the player's reach.
        pub reachable: bool,
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveCell {
    bounds: CellBounds,
    token: TokenValue,
    reachable: bool,
}

fn within_reach(player: GeoPosition, bounds: CellBounds) -> bool {
    bounds.center().distance_meters(player) <= REACH_METERS
}

fn desired_cells(viewport: &GeoBounds) -> BTreeSet<CellCoord> {
    let south_west =
        CellCoord::containing(GeoPosition::new(viewport.south(), viewport.west()));
    let north_east =
        CellCoord::containing(GeoPosition::new(viewport.north(), viewport.east()));

    let mut cells = BTreeSet::new();
    let i_range = south_west.i().saturating_sub(VIEWPORT_MARGIN_CELLS)
        ..=north_east.i().saturating_add(VIEWPORT_MARGIN_CELLS);
    for i in i_range {
        let j_range = south_west.j().saturating_sub(VIEWPORT_MARGIN_CELLS)
            ..=north_east.j().saturating_add(VIEWPORT_MARGIN_CELLS);
        for j in j_range {
            let _ = cells.insert(CellCoord::new(i, j));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenfield_core::{session::OverrideRecord, Direction, ExchangeOutcome, TILE_DEGREES};

    fn drive(world: &mut World, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, command, &mut events);
        events
    }

    fn spawn_cell() -> CellCoord {
        CellCoord::containing(DEFAULT_SPAWN)
    }

    fn session_with_override(token: Option<TokenValue>) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::starting_at(DEFAULT_SPAWN);
        snapshot.overrides.push(OverrideRecord {
            key: spawn_cell().key(),
            token,
        });
        snapshot
    }

    #[test]
    fn reconciliation_materializes_the_viewport_with_margin() {
        let mut world = World::new();
        let events = drive(
            &mut world,
            Command::SetViewport {
                bounds: GeoBounds::around(DEFAULT_SPAWN, 2),
            },
        );

        let spawned = events
            .iter()
            .filter(|event| matches!(event, Event::CellSpawned { .. }))
            .count();
        assert_eq!(spawned, 81);
        assert_eq!(query::cell_view(&world).len(), 81);
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let mut world = World::new();
        let bounds = GeoBounds::around(DEFAULT_SPAWN, 2);
        let _ = drive(&mut world, Command::SetViewport { bounds });
        let before = query::cell_view(&world).into_vec();

        let events = drive(&mut world, Command::SetViewport { bounds });

        assert!(events.is_empty(), "second reconcile emitted {events:?}");
        assert_eq!(query::cell_view(&world).into_vec(), before);
    }

    #[test]
    fn cells_leaving_the_desired_set_are_torn_down() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::SetViewport {
                bounds: GeoBounds::around(DEFAULT_SPAWN, 2),
            },
        );

        let events = drive(
            &mut world,
            Command::SetViewport {
                bounds: GeoBounds::around(GeoPosition::new(0.0, 0.0), 2),
            },
        );

        let despawned = events
            .iter()
            .filter(|event| matches!(event, Event::CellDespawned { .. }))
            .count();
        assert_eq!(despawned, 81);
        assert!(query::cell_at(&world, spawn_cell()).is_none());
        assert_eq!(query::cell_view(&world).len(), 81);
    }

    #[test]
    fn deleted_overrides_never_rematerialize_until_reset() {
        let target = spawn_cell().step(Direction::East);
        let mut snapshot = SessionSnapshot::starting_at(DEFAULT_SPAWN);
        snapshot.overrides.push(OverrideRecord {
            key: target.key(),
            token: None,
        });

        let mut world = World::new();
        let events = drive(&mut world, Command::LoadSession { snapshot });
        assert!(events
            .iter()
            .all(|event| !matches!(event, Event::CellSpawned { cell, .. } if *cell == target)));
        assert!(query::cell_at(&world, target).is_none());

        let viewport = query::viewport(&world);
        let _ = drive(
            &mut world,
            Command::SetViewport { bounds: viewport },
        );
        assert!(query::cell_at(&world, target).is_none());

        let _ = drive(&mut world, Command::ResetSession);
        assert!(query::cell_at(&world, target).is_some());
    }

    #[test]
    fn out_of_reach_interactions_are_rejected_without_state_change() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: SessionSnapshot::starting_at(DEFAULT_SPAWN),
            },
        );

        let far = CellCoord::new(spawn_cell().i() + 6, spawn_cell().j());
        let before = query::cell_at(&world, far).expect("cell is active");
        assert!(!before.reachable);

        let events = drive(&mut world, Command::InteractWithCell { cell: far });

        assert_eq!(
            events,
            vec![Event::InteractionRejected {
                cell: far,
                reason: RejectionReason::OutOfReach,
            }]
        );
        assert_eq!(query::cell_at(&world, far), Some(before));
    }

    #[test]
    fn interacting_with_an_unmaterialized_cell_is_rejected() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: SessionSnapshot::starting_at(DEFAULT_SPAWN),
            },
        );

        let absent = CellCoord::new(spawn_cell().i() + 100, spawn_cell().j());
        let events = drive(&mut world, Command::InteractWithCell { cell: absent });

        assert_eq!(
            events,
            vec![Event::InteractionRejected {
                cell: absent,
                reason: RejectionReason::Inactive,
            }]
        );
    }

    #[test]
    fn taking_a_token_persists_the_emptied_cell_across_respawns() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: session_with_override(Some(TokenValue::new(1))),
            },
        );

        let events = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        assert!(events.contains(&Event::ExchangeResolved {
            cell: spawn_cell(),
            outcome: ExchangeOutcome::Taken,
            cell_token: TokenValue::EMPTY,
            inventory_token: TokenValue::new(1),
        }));
        assert!(events.contains(&Event::InventoryChanged {
            token: TokenValue::new(1),
        }));

        let exported = query::session_snapshot(&world);
        assert!(exported.overrides.contains(&OverrideRecord {
            key: spawn_cell().key(),
            token: Some(TokenValue::EMPTY),
        }));

        let _ = drive(
            &mut world,
            Command::SetViewport {
                bounds: GeoBounds::around(GeoPosition::new(10.0, 10.0), 2),
            },
        );
        assert!(query::cell_at(&world, spawn_cell()).is_none());

        let _ = drive(
            &mut world,
            Command::SetViewport {
                bounds: GeoBounds::around(DEFAULT_SPAWN, 2),
            },
        );
        let respawned = query::cell_at(&world, spawn_cell()).expect("cell respawns");
        assert_eq!(respawned.token, TokenValue::EMPTY);
        assert_eq!(query::inventory(&world), TokenValue::new(1));
    }

    #[test]
    fn an_emptied_cell_stays_open_for_drops() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: session_with_override(Some(TokenValue::new(1))),
            },
        );

        let _ = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        let events = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );

        assert!(events.contains(&Event::ExchangeResolved {
            cell: spawn_cell(),
            outcome: ExchangeOutcome::Dropped,
            cell_token: TokenValue::new(1),
            inventory_token: TokenValue::EMPTY,
        }));
        let cell = query::cell_at(&world, spawn_cell()).expect("cell stays active");
        assert_eq!(cell.token, TokenValue::new(1));
        assert_eq!(query::inventory(&world), TokenValue::EMPTY);
    }

    #[test]
    fn crafting_to_the_win_threshold_announces_victory_once() {
        let mut snapshot = session_with_override(Some(TokenValue::new(8)));
        snapshot.inventory = TokenValue::new(8);

        let mut world = World::new();
        let _ = drive(&mut world, Command::LoadSession { snapshot });

        let events = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        assert!(events.contains(&Event::VictoryAchieved {
            token: TokenValue::new(16),
        }));
        assert!(query::victory_announced(&world));

        let again = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        assert!(again.contains(&Event::ExchangeResolved {
            cell: spawn_cell(),
            outcome: ExchangeOutcome::Taken,
            cell_token: TokenValue::EMPTY,
            inventory_token: TokenValue::new(16),
        }));
        assert!(again
            .iter()
            .all(|event| !matches!(event, Event::VictoryAchieved { .. })));
    }

    #[test]
    fn mismatched_tokens_leave_the_session_untouched() {
        let mut snapshot = session_with_override(Some(TokenValue::new(4)));
        snapshot.inventory = TokenValue::new(1);

        let mut world = World::new();
        let _ = drive(&mut world, Command::LoadSession { snapshot });
        let overrides_before = query::session_snapshot(&world).overrides;

        let events = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );

        assert!(events.contains(&Event::ExchangeResolved {
            cell: spawn_cell(),
            outcome: ExchangeOutcome::Mismatched,
            cell_token: TokenValue::new(4),
            inventory_token: TokenValue::new(1),
        }));
        assert!(events
            .iter()
            .all(|event| !matches!(event, Event::InventoryChanged { .. })));
        assert_eq!(query::session_snapshot(&world).overrides, overrides_before);
    }

    #[test]
    fn reset_restores_oracle_defaults_and_empties_the_inventory() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: session_with_override(Some(TokenValue::new(1))),
            },
        );
        let _ = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        assert_eq!(query::inventory(&world), TokenValue::new(1));

        let events = drive(&mut world, Command::ResetSession);

        assert!(events.contains(&Event::SessionReset));
        assert_eq!(query::inventory(&world), TokenValue::EMPTY);
        assert!(query::session_snapshot(&world).overrides.is_empty());
        let cell = query::cell_at(&world, spawn_cell()).expect("cell respawns");
        assert_eq!(cell.token, oracle::initial_token(spawn_cell()));
        assert!(!query::victory_announced(&world));
    }

    #[test]
    fn movement_mode_changes_are_announced_only_on_change() {
        let mut world = World::new();

        let events = drive(
            &mut world,
            Command::SetMovementMode {
                mode: MovementMode::Directional,
            },
        );
        assert_eq!(
            events,
            vec![Event::MovementModeChanged {
                mode: MovementMode::Directional,
            }]
        );

        let repeat = drive(
            &mut world,
            Command::SetMovementMode {
                mode: MovementMode::Directional,
            },
        );
        assert!(repeat.is_empty());
    }

    #[test]
    fn stepping_the_player_advances_one_tile() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: SessionSnapshot::starting_at(DEFAULT_SPAWN),
            },
        );

        let events = drive(
            &mut world,
            Command::StepPlayer {
                direction: Direction::North,
            },
        );

        let position = query::player_position(&world);
        assert!((position.lat() - (DEFAULT_SPAWN.lat() + TILE_DEGREES)).abs() < 1e-12);
        assert!(events.contains(&Event::PlayerMoved { position }));
    }

    #[test]
    fn moving_toward_a_cell_refreshes_its_reachability() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: SessionSnapshot::starting_at(DEFAULT_SPAWN),
            },
        );

        let far = CellCoord::new(spawn_cell().i() + 6, spawn_cell().j());
        let bounds = query::cell_at(&world, far).expect("cell is active").bounds;
        assert!(!query::cell_at(&world, far).expect("cell is active").reachable);

        let events = drive(
            &mut world,
            Command::SetPlayerPosition {
                position: bounds.center(),
            },
        );

        let refreshed = query::cell_at(&world, far).expect("cell is active");
        assert!(refreshed.reachable);
        assert!(events.iter().any(|event| matches!(
            event,
            Event::CellRefreshed { cell, reachable: true, .. } if *cell == far
        )));
    }

    #[test]
    fn exported_snapshots_rebuild_an_equivalent_session() {
        let mut world = World::new();
        let _ = drive(
            &mut world,
            Command::LoadSession {
                snapshot: session_with_override(Some(TokenValue::new(2))),
            },
        );
        let _ = drive(
            &mut world,
            Command::InteractWithCell { cell: spawn_cell() },
        );
        let _ = drive(
            &mut world,
            Command::SetMovementMode {
                mode: MovementMode::Directional,
            },
        );

        let exported = query::session_snapshot(&world);
        let mut restored = World::new();
        let _ = drive(&mut restored, Command::LoadSession { snapshot: exported });

        assert_eq!(query::inventory(&restored), TokenValue::new(2));
        assert_eq!(
            query::movement_mode(&restored),
            MovementMode::Directional
        );
        assert_eq!(
            query::cell_at(&restored, spawn_cell()).map(|cell| cell.token),
            Some(TokenValue::EMPTY)
        );
        assert_eq!(
            query::cell_view(&restored).len(),
            query::cell_view(&world).len()
        );
    }

    #[test]
    fn welcome_banner_greets_the_player() {
        let world = World::new();
        assert_eq!(query::welcome_banner(&world), WELCOME_BANNER);
    }
}
