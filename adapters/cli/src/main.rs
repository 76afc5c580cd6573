#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Tokenfield experience.
//!
//! All mutation flows through world commands; this binary only gathers input,
//! renders scenes, and applies persistence write-through after every batch.

mod config;
mod session_transfer;
mod sim;
mod store;
mod terminal;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use tokenfield_core::{Command, Event, ExchangeOutcome, RejectionReason};
use tokenfield_rendering::{FollowViewport, RenderingBackend, Scene, ViewportControl};
use tokenfield_storage::SessionStore;
use tokenfield_system_movement::{DirectionalFeed, GeolocationFeed, Movement, PositionSource};
use tokenfield_world::{apply, query, World};

use crate::config::CliConfig;
use crate::sim::SimulatedGps;
use crate::store::FileStore;
use crate::terminal::TerminalBackend;

/// Location-based collectible game played from the terminal.
#[derive(Debug, Parser)]
#[command(name = "tokenfield")]
struct Args {
    /// Directory holding the persisted session files.
    #[arg(long, default_value = "tokenfield-data")]
    data_dir: PathBuf,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace the persisted session with the provided session code.
    #[arg(long, value_name = "CODE")]
    import: Option<String>,

    /// Print the persisted session as a shareable code and exit.
    #[arg(long)]
    export: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = CliConfig::load(args.config.as_deref());

    let mut gps = SimulatedGps::new(config.gps_seed, config.spawn());
    let mut sessions = SessionStore::new(FileStore::open(&args.data_dir));

    // The one-shot position request resolves before any cell is spawned.
    let fallback = match gps.current() {
        Ok(position) => position,
        Err(error) => {
            log::warn!("no initial position fix: {error}");
            config.spawn()
        }
    };

    let snapshot = if let Some(code) = args.import.as_deref() {
        let imported = session_transfer::decode(code).context("invalid session code")?;
        sessions.save_all(&imported);
        imported
    } else {
        sessions.load_session(fallback)
    };

    if args.export {
        println!("{}", session_transfer::encode(&snapshot));
        return Ok(());
    }

    let mut world = World::new();
    println!("{}", query::welcome_banner(&world));

    let movement_mode = snapshot.movement_mode;
    let mut events = Vec::new();
    apply(&mut world, Command::LoadSession { snapshot }, &mut events);

    let mut viewport = FollowViewport::new(
        query::player_position(&world),
        config.viewport_half_cells,
    )?;
    if let Some(bounds) = viewport.take_bounds_change() {
        apply(&mut world, Command::SetViewport { bounds }, &mut events);
    }
    sessions.record_events(&events, &query::session_snapshot(&world));

    let mut movement = Movement::new(
        movement_mode,
        GeolocationFeed::new(gps),
        DirectionalFeed::new(),
    );

    let scene = Scene::from_world(&world);
    TerminalBackend::new().run(scene, move |input, scene| {
        let mut events = Vec::new();

        if let Some(cell) = input.clicked_cell {
            apply(&mut world, Command::InteractWithCell { cell }, &mut events);
        }
        if input.reset_requested {
            apply(&mut world, Command::ResetSession, &mut events);
        }
        if let Some(direction) = input.pad {
            movement.directional_mut().press(direction);
        }

        let mut movement_commands = Vec::new();
        movement.handle(&events, input.mode_toggle, &mut movement_commands);

        let before = events.len();
        for command in movement_commands {
            apply(&mut world, command, &mut events);
        }

        // A confirmed mode switch re-enables the other feed mid-frame so its
        // first samples arrive without waiting a turn.
        if events[before..]
            .iter()
            .any(|event| matches!(event, Event::MovementModeChanged { .. }))
        {
            let mut follow_ups = Vec::new();
            movement.handle(&events[before..], false, &mut follow_ups);
            for command in follow_ups {
                apply(&mut world, command, &mut events);
            }
        }

        let last_position = events.iter().rev().find_map(|event| match event {
            Event::PlayerMoved { position } => Some(*position),
            _ => None,
        });
        if let Some(position) = last_position {
            viewport.move_to(position);
        }
        if let Some(bounds) = viewport.take_bounds_change() {
            apply(&mut world, Command::SetViewport { bounds }, &mut events);
        }

        announce(&events);
        sessions.record_events(&events, &query::session_snapshot(&world));
        *scene = Scene::from_world(&world);
    })
}

fn announce(events: &[Event]) {
    for event in events {
        match event {
            Event::VictoryAchieved { token } => {
                println!("*** you assembled the {token} token. you win! ***");
            }
            Event::InteractionRejected { cell, reason } => {
                let reason = match reason {
                    RejectionReason::OutOfReach => "out of reach",
                    RejectionReason::Inactive => "not on the map",
                };
                println!("cell {} is {reason}", cell.key());
            }
            Event::ExchangeResolved {
                outcome: ExchangeOutcome::Mismatched,
                ..
            } => {
                println!("no action available: the tokens do not match");
            }
            _ => {}
        }
    }
}
