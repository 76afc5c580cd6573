#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Persistence adapter bridging world events to a key-value store.
//!
//! The store is an external collaborator: every failure is logged and
//! degrades to defaults so the game stays playable offline or with a broken
//! disk. Nothing in this crate ever panics on bad data.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use tokenfield_core::{
    session::SessionSnapshot, Event, GeoPosition, MovementMode, TokenValue,
};

/// Keys under which the session shapes are persisted.
pub mod keys {
    /// Override-record list.
    pub const OVERRIDES: &str = "tokenfield.overrides";
    /// Single-slot inventory token.
    pub const INVENTORY: &str = "tokenfield.inventory";
    /// Last known player position.
    pub const POSITION: &str = "tokenfield.position";
    /// Movement-mode flag.
    pub const MOVEMENT_MODE: &str = "tokenfield.movement_mode";
}

/// Errors surfaced by key-value store implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A value could not be written to the backing medium.
    #[error("could not write key '{key}': {message}")]
    WriteFailed {
        /// Key the write targeted.
        key: String,
        /// Backend-specific failure description.
        message: String,
    },
    /// A value could not be read from the backing medium.
    #[error("could not read key '{key}': {message}")]
    ReadFailed {
        /// Key the read targeted.
        key: String,
        /// Backend-specific failure description.
        message: String,
    },
}

/// External key-value persistence collaborator.
pub trait KeyValueStore {
    /// Stores a serialized value under the key, replacing any prior value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Loads the serialized value stored under the key, if any.
    fn load(&mut self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Write-through bridge between the world's event stream and a store.
#[derive(Debug)]
pub struct SessionStore<K> {
    store: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Wraps a key-value store in the session bridge.
    #[must_use]
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Assembles the persisted session, falling back per shape on failure.
    ///
    /// Called once at startup, strictly before any cell is spawned.
    pub fn load_session(&mut self, fallback_position: GeoPosition) -> SessionSnapshot {
        SessionSnapshot {
            overrides: self.load_or(keys::OVERRIDES, Vec::new()),
            inventory: self.load_or(keys::INVENTORY, TokenValue::EMPTY),
            position: self.load_or(keys::POSITION, fallback_position),
            movement_mode: self.load_or(keys::MOVEMENT_MODE, MovementMode::Geolocation),
        }
    }

    /// Applies write-through for every persisted shape the batch touched.
    pub fn record_events(&mut self, events: &[Event], snapshot: &SessionSnapshot) {
        let mut overrides = false;
        let mut inventory = false;
        let mut position = false;
        let mut mode = false;
        for event in events {
            match event {
                Event::ExchangeResolved { .. } | Event::SessionReset => overrides = true,
                Event::InventoryChanged { .. } => inventory = true,
                Event::PlayerMoved { .. } => position = true,
                Event::MovementModeChanged { .. } => mode = true,
                _ => {}
            }
        }

        if overrides {
            self.write(keys::OVERRIDES, &snapshot.overrides);
        }
        if inventory {
            self.write(keys::INVENTORY, &snapshot.inventory);
        }
        if position {
            self.write(keys::POSITION, &snapshot.position);
        }
        if mode {
            self.write(keys::MOVEMENT_MODE, &snapshot.movement_mode);
        }
    }

    /// Persists every shape unconditionally, used when the session ends.
    pub fn save_all(&mut self, snapshot: &SessionSnapshot) {
        self.write(keys::OVERRIDES, &snapshot.overrides);
        self.write(keys::INVENTORY, &snapshot.inventory);
        self.write(keys::POSITION, &snapshot.position);
        self.write(keys::MOVEMENT_MODE, &snapshot.movement_mode);
    }

    fn load_or<T: DeserializeOwned>(&mut self, key: &str, fallback: T) -> T {
        match self.store.load(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(error) => {
                    log::warn!("discarding corrupt value for '{key}': {error}");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(error) => {
                log::warn!("falling back to default for '{key}': {error}");
                fallback
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(error) => {
                log::warn!("could not serialize value for '{key}': {error}");
                return;
            }
        };

        if let Err(error) = self.store.save(key, &raw) {
            log::warn!("write-through for '{key}' failed: {error}");
        }
    }
}

/// In-memory key-value store used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, for degrade-and-continue tests.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw serialized value stored under the key, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores a raw serialized value directly, bypassing the bridge.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        let _ = self.entries.insert(key.to_owned(), value.to_owned());
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed {
                key: key.to_owned(),
                message: "injected failure".to_owned(),
            });
        }

        let _ = self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn load(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }
}
