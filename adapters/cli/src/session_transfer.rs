#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tokenfield_core::session::{OverrideRecord, SessionSnapshot};
use tokenfield_core::{GeoPosition, MovementMode, TokenValue};

const TRANSFER_DOMAIN: &str = "tokens";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded session payload.
pub(crate) const TRANSFER_HEADER: &str = "tokens:v1";
/// Delimiter used to separate the prefix, position and payload.
const FIELD_DELIMITER: char = ':';

/// Encodes a session into a single-line string suitable for sharing.
pub(crate) fn encode(snapshot: &SessionSnapshot) -> String {
    let payload = SerializableSession {
        overrides: snapshot.overrides.clone(),
        inventory: snapshot.inventory,
        movement_mode: snapshot.movement_mode,
    };
    let json = serde_json::to_vec(&payload).expect("session serialization never fails");
    let encoded = STANDARD_NO_PAD.encode(json);
    format!(
        "{TRANSFER_HEADER}:{}x{}:{encoded}",
        snapshot.position.lat(),
        snapshot.position.lng()
    )
}

/// Decodes a session from the provided string representation.
pub(crate) fn decode(value: &str) -> Result<SessionSnapshot, SessionTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionTransferError::EmptyPayload);
    }

    let mut parts = trimmed.split(FIELD_DELIMITER);
    let domain = parts.next().ok_or(SessionTransferError::MissingPrefix)?;
    let version = parts.next().ok_or(SessionTransferError::MissingVersion)?;
    let position = parts.next().ok_or(SessionTransferError::MissingPosition)?;
    let payload = parts.next().ok_or(SessionTransferError::MissingPayload)?;

    if domain != TRANSFER_DOMAIN {
        return Err(SessionTransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != TRANSFER_VERSION {
        return Err(SessionTransferError::UnsupportedVersion(version.to_owned()));
    }

    let position = parse_position(position)?;
    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(SessionTransferError::InvalidEncoding)?;
    let decoded: SerializableSession =
        serde_json::from_slice(&bytes).map_err(SessionTransferError::InvalidPayload)?;

    Ok(SessionSnapshot {
        overrides: decoded.overrides,
        inventory: decoded.inventory,
        position,
        movement_mode: decoded.movement_mode,
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializableSession {
    overrides: Vec<OverrideRecord>,
    inventory: TokenValue,
    movement_mode: MovementMode,
}

/// Errors that can occur while decoding session transfer strings.
#[derive(Debug)]
pub(crate) enum SessionTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded session.
    MissingPrefix,
    /// The encoded session did not contain a version segment.
    MissingVersion,
    /// The encoded session did not include the player position.
    MissingPosition,
    /// The encoded session did not include the payload segment.
    MissingPayload,
    /// The encoded session used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded session used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The player position could not be parsed from the encoded session.
    InvalidPosition(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
}

impl fmt::Display for SessionTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "session code was empty"),
            Self::MissingPrefix => write!(f, "session code is missing the prefix"),
            Self::MissingVersion => write!(f, "session code is missing the version"),
            Self::MissingPosition => write!(f, "session code is missing the position"),
            Self::MissingPayload => write!(f, "session code is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "session prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "session version '{version}' is not supported")
            }
            Self::InvalidPosition(position) => {
                write!(f, "could not parse player position '{position}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode session payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse session payload: {error}")
            }
        }
    }
}

impl Error for SessionTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_position(position: &str) -> Result<GeoPosition, SessionTransferError> {
    let (lat, lng) = position
        .split_once(['x', 'X'])
        .ok_or_else(|| SessionTransferError::InvalidPosition(position.to_owned()))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| SessionTransferError::InvalidPosition(position.to_owned()))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| SessionTransferError::InvalidPosition(position.to_owned()))?;

    if !lat.is_finite() || !lng.is_finite() {
        return Err(SessionTransferError::InvalidPosition(position.to_owned()));
    }

    Ok(GeoPosition::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenfield_core::CellCoord;

    #[test]
    fn round_trip_fresh_session() {
        let snapshot = SessionSnapshot::starting_at(GeoPosition::new(57.476538, -4.225123));

        let encoded = encode(&snapshot);
        assert!(encoded.starts_with(&format!("{TRANSFER_HEADER}:57.476538x-4.225123:")));

        let decoded = decode(&encoded).expect("session decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn round_trip_played_session() {
        let mut snapshot = SessionSnapshot::starting_at(GeoPosition::new(0.00015, -0.00025));
        snapshot.inventory = TokenValue::new(4);
        snapshot.movement_mode = MovementMode::Directional;
        snapshot.overrides.push(OverrideRecord {
            key: CellCoord::new(1, -2).key(),
            token: Some(TokenValue::EMPTY),
        });
        snapshot.overrides.push(OverrideRecord {
            key: CellCoord::new(3, 3).key(),
            token: None,
        });

        let decoded = decode(&encode(&snapshot)).expect("session decodes");
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn rejects_foreign_prefixes_and_versions() {
        assert!(matches!(
            decode("coins:v1:1x1:e30"),
            Err(SessionTransferError::InvalidPrefix(_))
        ));
        assert!(matches!(
            decode("tokens:v2:1x1:e30"),
            Err(SessionTransferError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn rejects_malformed_positions_and_payloads() {
        assert!(matches!(
            decode(""),
            Err(SessionTransferError::EmptyPayload)
        ));
        assert!(matches!(
            decode("tokens:v1:notapos:e30"),
            Err(SessionTransferError::InvalidPosition(_))
        ));
        assert!(matches!(
            decode("tokens:v1:1x1:@@@"),
            Err(SessionTransferError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode("tokens:v1:1x1:e30"),
            Err(SessionTransferError::InvalidPayload(_))
        ));
    }
}
