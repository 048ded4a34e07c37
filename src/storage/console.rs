//! Sink that logs snapshots through `tracing`.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::snapshot::ServerSnapshot;

use super::SnapshotSink;

/// Logs a one-line summary per snapshot and one line per player.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[async_trait]
impl SnapshotSink for ConsoleSink {
    async fn write_snapshot(&self, snapshot: &ServerSnapshot) -> Result<()> {
        info!(
            hostname = %snapshot.hostname,
            map = ?snapshot.map,
            players_online = ?snapshot.players_online,
            max_players = ?snapshot.max_players,
            queued = ?snapshot.queued,
            joining = ?snapshot.joining,
            entity_count = ?snapshot.entity_count,
            uptime_seconds = ?snapshot.uptime_seconds,
            "[SNAPSHOT]"
        );

        for player in &snapshot.players {
            info!(
                steam_id = %player.steam_id,
                name = %player.name,
                ping = player.ping,
                connected_seconds = player.connected_seconds,
                "[PLAYER]"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::snapshot::assemble;

    #[tokio::test]
    async fn test_console_sink_accepts_snapshot() {
        let snapshot = assemble("not json", "hostname: Box".to_string());
        ConsoleSink
            .write_snapshot(&snapshot)
            .await
            .expect("console sink never fails");
    }
}
