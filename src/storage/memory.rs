//! In-memory snapshot sink.
//!
//! Keeps the most recent snapshots plus a last-seen roster keyed by steam id,
//! the same shape a database sink upserts into.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::snapshot::{Player, ServerSnapshot};

use super::SnapshotSink;

// ============================================================================
// Constants
// ============================================================================

/// Snapshots kept by [`MemorySink::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

// ============================================================================
// MemorySink
// ============================================================================

/// Thread-safe in-memory sink.
///
/// History is capped at `history_limit` snapshots; the oldest is evicted
/// first. The roster holds one row per distinct steam id and is not capped.
#[derive(Debug)]
pub struct MemorySink {
    snapshots: Mutex<VecDeque<ServerSnapshot>>,
    roster: Mutex<FxHashMap<String, Player>>,
    history_limit: usize,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl MemorySink {
    /// Creates an empty sink keeping [`DEFAULT_HISTORY_LIMIT`] snapshots.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink keeping at most `limit` snapshots (at least one).
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            snapshots: Mutex::new(VecDeque::new()),
            roster: Mutex::new(FxHashMap::default()),
            history_limit: limit.max(1),
        }
    }

    /// Returns the retained snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ServerSnapshot> {
        self.snapshots.lock().iter().cloned().collect()
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<ServerSnapshot> {
        self.snapshots.lock().back().cloned()
    }

    /// Returns the number of retained snapshots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.lock().len()
    }

    /// Returns `true` if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.lock().is_empty()
    }

    /// Returns the latest row seen for `steam_id` across all snapshots.
    #[must_use]
    pub fn player(&self, steam_id: &str) -> Option<Player> {
        self.roster.lock().get(steam_id).cloned()
    }
}

#[async_trait]
impl SnapshotSink for MemorySink {
    async fn write_snapshot(&self, snapshot: &ServerSnapshot) -> Result<()> {
        {
            let mut snapshots = self.snapshots.lock();
            while snapshots.len() >= self.history_limit {
                snapshots.pop_front();
            }
            snapshots.push_back(snapshot.clone());
        }

        let mut roster = self.roster.lock();
        for player in &snapshot.players {
            roster.insert(player.steam_id.clone(), player.clone());
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::snapshot::assemble;

    fn status(name: &str, seconds: &str) -> String {
        format!(r#"76561190000000001 "{name}" 50 {seconds}s 1.2.3.4:5 0.0 0 1"#)
    }

    #[tokio::test]
    async fn test_memory_sink_records_snapshots() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_snapshot(&assemble("{}", status("Alice", "10.0")))
            .await
            .expect("write");
        sink.write_snapshot(&assemble("{}", status("Alice2", "20.0")))
            .await
            .expect("write");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.snapshots()[0].players[0].name, "Alice");

        let latest = sink.latest().expect("latest");
        assert_eq!(latest.players[0].connected_seconds, 20);

        let player = sink.player("76561190000000001").expect("roster entry");
        assert_eq!(player.name, "Alice2");
        assert!(sink.player("76561190000000002").is_none());
    }

    #[tokio::test]
    async fn test_history_limit_evicts_oldest() {
        let sink = MemorySink::with_history_limit(2);

        for (name, seconds) in [("A", "1.0"), ("B", "2.0"), ("C", "3.0")] {
            sink.write_snapshot(&assemble("{}", status(name, seconds)))
                .await
                .expect("write");
        }

        assert_eq!(sink.len(), 2);
        let names: Vec<String> = sink
            .snapshots()
            .iter()
            .map(|s| s.players[0].name.clone())
            .collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(sink.player("76561190000000001").expect("roster").name, "C");
    }

    #[test]
    fn test_zero_history_limit_keeps_one() {
        let sink = MemorySink::with_history_limit(0);
        assert_eq!(sink.history_limit, 1);
        assert_eq!(MemorySink::new().history_limit, DEFAULT_HISTORY_LIMIT);
    }
}
