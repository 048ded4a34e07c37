//! Free-text `status` dump parser.
//!
//! The dump has a metadata block followed by one row per connected
//! player. Both parsers are total: lines that do not match are skipped and
//! missing values come back as `None`.

// ============================================================================
// Imports
// ============================================================================

use regex::Captures;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::snapshot::Player;

use super::patterns::{HOSTNAME_LINE, MAP_LINE, PLAYER_ROW, POPULATION_LINE};

// ============================================================================
// StatusMeta
// ============================================================================

/// Metadata extracted from the `status` dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMeta {
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
}

/// Extracts hostname, map and population from a `status` dump.
///
/// The four population numbers are all present or all absent.
#[must_use]
pub fn parse_status_meta(text: &str) -> StatusMeta {
    let population = POPULATION_LINE.captures(text).and_then(|caps| {
        Some((
            capture_u32(&caps, 1)?,
            capture_u32(&caps, 2)?,
            capture_u32(&caps, 3)?,
            capture_u32(&caps, 4)?,
        ))
    });

    let (players_online, max_players, queued, joining) = match population {
        Some((online, max, queued, joining)) => (Some(online), Some(max), Some(queued), Some(joining)),
        None => (None, None, None, None),
    };

    StatusMeta {
        hostname: trimmed_value(HOSTNAME_LINE.captures(text)),
        map: trimmed_value(MAP_LINE.captures(text)),
        players_online,
        max_players,
        queued,
        joining,
    }
}

/// Extracts player rows in line order.
///
/// A steam id seen twice keeps its first row.
#[must_use]
pub fn parse_players(text: &str) -> Vec<Player> {
    let mut seen = FxHashSet::default();
    let mut players = Vec::new();

    for line in text.lines() {
        let Some(player) = parse_player_row(line) else {
            continue;
        };

        if !seen.insert(player.steam_id.clone()) {
            trace!(steam_id = %player.steam_id, "Skipping duplicate player row");
            continue;
        }

        players.push(player);
    }

    players
}

/// Parses a single player row.
#[must_use]
pub fn parse_player_row(line: &str) -> Option<Player> {
    let caps = PLAYER_ROW.captures(line)?;

    let seconds: f64 = caps.get(4)?.as_str().parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }

    Some(Player {
        steam_id: caps.get(1)?.as_str().to_string(),
        name: caps.get(2)?.as_str().trim().to_string(),
        connected_seconds: round_seconds(seconds),
        ping: capture_u32(&caps, 3)?,
    })
}

/// Rounds fractional seconds to the nearest integer, halves away from zero.
#[inline]
#[must_use]
pub fn round_seconds(seconds: f64) -> u64 {
    seconds.round() as u64
}

fn capture_u32(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

fn trimmed_value(caps: Option<Captures<'_>>) -> Option<String> {
    let value = caps?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// Tests
// ============================================================================
