#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement input system translating player input into world commands.
//!
//! Two input strategies exist: an external geolocation stream and a discrete
//! directional pad. Exactly one is active at a time, selected by the world's
//! persisted movement mode; switching tears the previous feed's subscriptions
//! down before the next one is enabled.

use std::{collections::VecDeque, error::Error, fmt};

use tokenfield_core::{Command, Direction, Event, GeoPosition, MovementMode};

/// Errors surfaced by a position source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositionError {
    /// The source has not produced a fix yet.
    Unavailable,
    /// The source reported a failure described by the message.
    Failed(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "no position fix available"),
            Self::Failed(message) => write!(f, "position source failed: {message}"),
        }
    }
}

impl Error for PositionError {}

/// External collaborator supplying geographic position updates.
///
/// The update stream is lazy, unbounded and not restartable; errors are
/// logged by the consumer and never halt the game.
pub trait PositionSource {
    /// One-shot request for the current position, used once at startup.
    fn current(&mut self) -> Result<GeoPosition, PositionError>;

    /// Drains the updates accumulated since the previous poll.
    fn poll_updates(&mut self, out: &mut Vec<Result<GeoPosition, PositionError>>);
}

/// Sample produced by the active movement feed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementSample {
    /// Unit step in a cardinal direction.
    Step(Direction),
    /// Absolute position fix.
    Moved(GeoPosition),
}

/// Capability implemented by each movement input backend.
///
/// A disabled feed must drop its input instead of queueing it, so that
/// re-enabling never replays stale samples.
pub trait MovementFeed {
    /// Activates the feed's subscriptions.
    fn enable(&mut self);

    /// Tears down the feed's subscriptions.
    fn disable(&mut self);

    /// Drains pending samples into `out`.
    fn poll(&mut self, out: &mut Vec<MovementSample>);
}

/// Movement feed backed by an external geolocation stream.
#[derive(Debug)]
pub struct GeolocationFeed<S> {
    source: S,
    enabled: bool,
}

impl<S> GeolocationFeed<S> {
    /// Creates a disabled feed wrapping the provided position source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            enabled: false,
        }
    }
}

impl<S: PositionSource> MovementFeed for GeolocationFeed<S> {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn poll(&mut self, out: &mut Vec<MovementSample>) {
        let mut updates = Vec::new();
        self.source.poll_updates(&mut updates);
        if !self.enabled {
            return;
        }

        for update in updates {
            match update {
                Ok(position) => out.push(MovementSample::Moved(position)),
                Err(error) => log::warn!("dropping position update: {error}"),
            }
        }
    }
}

/// Movement feed backed by discrete directional-pad presses.
#[derive(Debug, Default)]
pub struct DirectionalFeed {
    pending: VecDeque<Direction>,
    enabled: bool,
}

impl DirectionalFeed {
    /// Creates a disabled pad feed with no pending presses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pad press; ignored while the feed is disabled.
    pub fn press(&mut self, direction: Direction) {
        if self.enabled {
            self.pending.push_back(direction);
        }
    }
}

impl MovementFeed for DirectionalFeed {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.pending.clear();
    }

    fn poll(&mut self, out: &mut Vec<MovementSample>) {
        if !self.enabled {
            return;
        }

        out.extend(self.pending.drain(..).map(MovementSample::Step));
    }
}

/// System that owns both movement feeds and emits movement commands.
#[derive(Debug)]
pub struct Movement<G, D> {
    geolocation: G,
    directional: D,
    mode: MovementMode,
}

impl<G: MovementFeed, D: MovementFeed> Movement<G, D> {
    /// Creates the system with the persisted mode's feed enabled.
    #[must_use]
    pub fn new(mode: MovementMode, geolocation: G, directional: D) -> Self {
        let mut movement = Self {
            geolocation,
            directional,
            mode,
        };
        movement.activate(mode);
        movement
    }

    /// Currently active movement mode.
    #[must_use]
    pub const fn mode(&self) -> MovementMode {
        self.mode
    }

    /// Mutable access to the directional feed for adapters delivering input.
    pub fn directional_mut(&mut self) -> &mut D {
        &mut self.directional
    }

    /// Consumes world events and adapter input to emit movement commands.
    ///
    /// `toggle_requested` reports that the player pressed the mode toggle on
    /// this frame; the resulting mode change takes effect when the world
    /// confirms it through [`Event::MovementModeChanged`].
    pub fn handle(&mut self, events: &[Event], toggle_requested: bool, out: &mut Vec<Command>) {
        for event in events {
            if let Event::MovementModeChanged { mode } = event {
                if *mode != self.mode {
                    self.mode = *mode;
                    self.activate(*mode);
                }
            }
        }

        if toggle_requested {
            out.push(Command::SetMovementMode {
                mode: self.mode.toggled(),
            });
        }

        let mut samples = Vec::new();
        match self.mode {
            MovementMode::Geolocation => self.geolocation.poll(&mut samples),
            MovementMode::Directional => self.directional.poll(&mut samples),
        }

        for sample in samples {
            match sample {
                MovementSample::Step(direction) => {
                    out.push(Command::StepPlayer { direction });
                }
                MovementSample::Moved(position) => {
                    out.push(Command::SetPlayerPosition { position });
                }
            }
        }
    }

    fn activate(&mut self, mode: MovementMode) {
        match mode {
            MovementMode::Geolocation => {
                self.directional.disable();
                self.geolocation.enable();
            }
            MovementMode::Directional => {
                self.geolocation.disable();
                self.directional.enable();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_pad_presses_are_dropped() {
        let mut pad = DirectionalFeed::new();
        pad.press(Direction::North);

        pad.enable();
        let mut samples = Vec::new();
        pad.poll(&mut samples);
        assert!(samples.is_empty());

        pad.press(Direction::East);
        pad.poll(&mut samples);
        assert_eq!(samples, vec![MovementSample::Step(Direction::East)]);
    }

    #[test]
    fn disabling_the_pad_clears_queued_presses() {
        let mut pad = DirectionalFeed::new();
        pad.enable();
        pad.press(Direction::South);
        pad.disable();
        pad.enable();

        let mut samples = Vec::new();
        pad.poll(&mut samples);
        assert!(samples.is_empty());
    }
}
