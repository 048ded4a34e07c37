//! Snapshot value types.

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Hostname used when no reply carries one.
pub const DEFAULT_HOSTNAME: &str = "Rust Server";

// ============================================================================
// Player
// ============================================================================

/// One connected client, as listed in the `status` dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// 17-digit SteamID64, kept as text.
    pub steam_id: String,
    /// Display name.
    pub name: String,
    /// Seconds connected, rounded to the nearest second.
    pub connected_seconds: u64,
    /// Round-trip time in milliseconds.
    pub ping: u32,
}

// ============================================================================
// ServerSnapshot
// ============================================================================

/// Point-in-time capture of server metadata and player roster.
///
/// Built once per poll cycle and handed to a
/// [`SnapshotSink`](crate::storage::SnapshotSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSnapshot {
    /// Server hostname. Never empty.
    pub hostname: String,
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
    /// Live entities (structured reply only).
    pub entity_count: Option<u64>,
    /// Seconds since server start (structured reply only).
    pub uptime_seconds: Option<u64>,
    /// Verbatim `status` reply the player rows were parsed from.
    pub raw_status: String,
    /// Player rows in the order they appeared.
    pub players: Vec<Player>,
}

// ============================================================================
// Tests
// ============================================================================
