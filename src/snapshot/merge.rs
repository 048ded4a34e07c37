//! Field-by-field merge of the two parser outputs.
//!
//! Precedence per field, highest first:
//!
//! | Field | Sources |
//! |-------|---------|
//! | `hostname` | structured → free text → [`DEFAULT_HOSTNAME`] |
//! | `map`, population | structured → free text → absent |
//! | `entity_count`, `uptime_seconds` | structured → absent |
//! | `players`, `raw_status` | free text only |

// ============================================================================
// Imports
// ============================================================================

use crate::status::{ServerInfo, StatusMeta};

use super::model::{DEFAULT_HOSTNAME, Player, ServerSnapshot};

// ============================================================================
// Merge
// ============================================================================

/// Returns the first present value in priority order.
#[inline]
pub fn first_present<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Builds the snapshot from both parser outputs.
#[must_use]
pub fn merge(
    structured: Option<ServerInfo>,
    meta: StatusMeta,
    players: Vec<Player>,
    raw_status: String,
) -> ServerSnapshot {
    let info = structured.unwrap_or_default();

    ServerSnapshot {
        hostname: first_present([info.hostname, meta.hostname])
            .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
        map: first_present([info.map, meta.map]),
        players_online: first_present([info.players_online, meta.players_online]),
        max_players: first_present([info.max_players, meta.max_players]),
        queued: first_present([info.queued, meta.queued]),
        joining: first_present([info.joining, meta.joining]),
        entity_count: info.entity_count,
        uptime_seconds: info.uptime_seconds,
        raw_status,
        players,
    }
}

// ============================================================================
// Tests
// ============================================================================
