//! Structured `serverinfo` reply parser.
//!
//! Server builds that support it answer `serverinfo` with a JSON object:
//!
//! ```json
//! {
//!   "Hostname": "My Server",
//!   "MaxPlayers": 100,
//!   "Players": 12,
//!   "Queued": 0,
//!   "Joining": 1,
//!   "EntityCount": 154021,
//!   "Uptime": 86400,
//!   "Map": "Procedural Map"
//! }
//! ```
//!
//! Every field is optional. A key with the wrong JSON type is treated as
//! missing.

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Map, Value};

// ============================================================================
// Keys
// ============================================================================

const KEY_HOSTNAME: &str = "Hostname";
const KEY_MAP: &str = "Map";
const KEY_PLAYERS: &str = "Players";
const KEY_MAX_PLAYERS: &str = "MaxPlayers";
const KEY_QUEUED: &str = "Queued";
const KEY_JOINING: &str = "Joining";
const KEY_ENTITY_COUNT: &str = "EntityCount";
const KEY_UPTIME: &str = "Uptime";

// ============================================================================
// ServerInfo
// ============================================================================

/// Fields extracted from a structured `serverinfo` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    /// Server hostname.
    pub hostname: Option<String>,
    /// Current map.
    pub map: Option<String>,
    /// Connected players.
    pub players_online: Option<u32>,
    /// Player slots.
    pub max_players: Option<u32>,
    /// Players waiting in queue.
    pub queued: Option<u32>,
    /// Players currently joining.
    pub joining: Option<u32>,
    /// Live entities.
    pub entity_count: Option<u64>,
    /// Seconds since server start.
    pub uptime_seconds: Option<u64>,
}

/// Parses a `serverinfo` reply body.
///
/// Returns `None` when the body is not a JSON object, so the caller can
/// fall back to the free-text dump. Never fails otherwise.
#[must_use]
pub fn parse_server_info(text: &str) -> Option<ServerInfo> {
    let value: Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;

    Some(ServerInfo {
        hostname: string_field(object, KEY_HOSTNAME),
        map: string_field(object, KEY_MAP),
        players_online: count_field(object, KEY_PLAYERS),
        max_players: count_field(object, KEY_MAX_PLAYERS),
        queued: count_field(object, KEY_QUEUED),
        joining: count_field(object, KEY_JOINING),
        entity_count: number_field(object, KEY_ENTITY_COUNT),
        uptime_seconds: number_field(object, KEY_UPTIME),
    })
}

/// Non-empty string value, trimmed.
fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    let value = object.get(key)?.as_str()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Non-negative number. Floats are rounded to the nearest integer.
fn number_field(object: &Map<String, Value>, key: &str) -> Option<u64> {
    let value = object.get(key)?;
    if let Some(n) = value.as_u64() {
        return Some(n);
    }

    let n = value.as_f64()?;
    (n.is_finite() && n >= 0.0).then(|| n.round() as u64)
}

/// Like [`number_field`], limited to `u32`.
///
/// Fractional counts such as `12.7` are rounded to the nearest integer
/// rather than treated as absent.
fn count_field(object: &Map<String, Value>, key: &str) -> Option<u32> {
    number_field(object, key).and_then(|n| u32::try_from(n).ok())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reply() {
        let text = r#"{
            "Hostname": "Box",
            "MaxPlayers": 100,
            "Players": 12,
            "Queued": 3,
            "Joining": 1,
            "EntityCount": 154021,
            "GameTime": "06/01/2024 08:00:00",
            "Uptime": 86400,
            "Map": "Hapis",
            "Framerate": 59.0
        }"#;

        let info = parse_server_info(text).expect("structured");
        assert_eq!(
            info,
            ServerInfo {
                hostname: Some("Box".into()),
                map: Some("Hapis".into()),
                players_online: Some(12),
                max_players: Some(100),
                queued: Some(3),
                joining: Some(1),
                entity_count: Some(154_021),
                uptime_seconds: Some(86_400),
            }
        );
    }

    #[test]
    fn test_wrong_types_are_absent() {
        let text = r#"{"Hostname": 5, "Map": null, "Players": "12", "MaxPlayers": -1, "Queued": true}"#;
        let info = parse_server_info(text).expect("structured");
        assert_eq!(info, ServerInfo::default());
    }

    #[test]
    fn test_float_values_are_rounded() {
        let info = parse_server_info(r#"{"Uptime": 12.5, "EntityCount": 7.4}"#).expect("structured");
        assert_eq!(info.uptime_seconds, Some(13));
        assert_eq!(info.entity_count, Some(7));

        let info = parse_server_info(r#"{"Players": 12.7, "MaxPlayers": 99.2}"#).expect("structured");
        assert_eq!(info.players_online, Some(13));
        assert_eq!(info.max_players, Some(99));
    }

    #[test]
    fn test_count_overflow_is_absent() {
        let info = parse_server_info(r#"{"Players": 5000000000}"#).expect("structured");
        assert_eq!(info.players_online, None);
    }

    #[test]
    fn test_blank_hostname_is_absent() {
        let info = parse_server_info(r#"{"Hostname": "   ", "Map": " Hapis "}"#).expect("structured");
        assert_eq!(info.hostname, None);
        assert_eq!(info.map.as_deref(), Some("Hapis"));
    }

    #[test]
    fn test_non_object_is_not_structured() {
        assert!(parse_server_info("not json").is_none());
        assert!(parse_server_info("[1, 2, 3]").is_none());
        assert!(parse_server_info("42").is_none());
        assert!(parse_server_info("").is_none());
        assert!(parse_server_info("{\"Players\": 1").is_none());
    }
}
