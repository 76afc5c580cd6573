//! Line-oriented terminal backend rendering scenes as ASCII grids.

use std::io::{self, BufRead as _, Write as _};

use anyhow::Result as AnyResult;

use tokenfield_core::{CellCoord, Direction, GeoPosition, MovementMode, TokenValue};
use tokenfield_rendering::{FrameInput, RenderingBackend, Scene};

const HELP_TEXT: &str =
    "commands: n/e/s/w step, go (advance a tick), click <i> <j>, mode, reset, help, quit";

/// Backend that draws one frame per line of player input.
#[derive(Debug, Default)]
pub(crate) struct TerminalBackend;

impl TerminalBackend {
    /// Creates the terminal backend.
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RenderingBackend for TerminalBackend {
    fn run<F>(self, mut scene: Scene, mut update_scene: F) -> AnyResult<()>
    where
        F: FnMut(FrameInput, &mut Scene) + 'static,
    {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        print!("{}", render_scene(&scene));
        println!("{HELP_TEXT}");

        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            match line {
                "quit" | "q" => break,
                "help" | "?" => {
                    println!("{HELP_TEXT}");
                    continue;
                }
                _ => {}
            }

            let Some(input) = parse_input(line) else {
                println!("unrecognized command '{line}' (try 'help')");
                continue;
            };

            update_scene(input, &mut scene);
            print!("{}", render_scene(&scene));
        }

        Ok(())
    }
}

/// Parses a line of player input into a frame input snapshot.
fn parse_input(line: &str) -> Option<FrameInput> {
    let mut input = FrameInput::default();
    match line {
        "" | "go" => Some(input),
        "n" => {
            input.pad = Some(Direction::North);
            Some(input)
        }
        "e" => {
            input.pad = Some(Direction::East);
            Some(input)
        }
        "s" => {
            input.pad = Some(Direction::South);
            Some(input)
        }
        "w" => {
            input.pad = Some(Direction::West);
            Some(input)
        }
        "mode" => {
            input.mode_toggle = true;
            Some(input)
        }
        "reset" => {
            input.reset_requested = true;
            Some(input)
        }
        other => {
            let mut parts = other.split_whitespace();
            if parts.next()? != "click" {
                return None;
            }
            let i = parts.next()?.parse().ok()?;
            let j = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            input.clicked_cell = Some(CellCoord::new(i, j));
            Some(input)
        }
    }
}

/// Draws the scene as a grid of glyphs followed by the status panel.
///
/// `@` marks the player, digits mark reachable tokens, `o` marks tokens out
/// of reach, `.` marks empty cells and blanks mark cells that are not
/// materialized.
pub(crate) fn render_scene(scene: &Scene) -> String {
    use std::fmt::Write as _;

    let south_west =
        CellCoord::containing(GeoPosition::new(scene.viewport.south(), scene.viewport.west()));
    let north_east =
        CellCoord::containing(GeoPosition::new(scene.viewport.north(), scene.viewport.east()));
    let player_cell = CellCoord::containing(scene.player.position);

    let mut out = String::new();
    for i in (south_west.i()..=north_east.i()).rev() {
        for j in south_west.j()..=north_east.j() {
            let coord = CellCoord::new(i, j);
            let glyph = if coord == player_cell {
                '@'
            } else {
                match scene.cell(coord) {
                    None => ' ',
                    Some(cell) if cell.token.is_empty() => '.',
                    Some(cell) if cell.reachable => token_glyph(cell.token),
                    Some(_) => 'o',
                }
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", scene.hud.inventory_label());
    let _ = writeln!(
        out,
        "movement: {}",
        match scene.hud.movement_mode {
            MovementMode::Geolocation => "geolocation",
            MovementMode::Directional => "pad",
        }
    );
    if scene.hud.victory {
        let _ = writeln!(out, "*** you win ***");
    }
    out
}

fn token_glyph(token: TokenValue) -> char {
    char::from_digit(token.get(), 10).unwrap_or('#')
}
