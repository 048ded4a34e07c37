//! Snapshot storage collaborators.
//!
//! The poller hands each finished [`ServerSnapshot`] to a [`SnapshotSink`]
//! exactly once. Sinks own persistence; failures are returned to the
//! caller and never retried here.
//!
//! | Sink | Behaviour |
//! |------|-----------|
//! | [`ConsoleSink`] | Logs the snapshot through `tracing` |
//! | [`MemorySink`] | Keeps snapshots in memory |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::snapshot::ServerSnapshot;

// ============================================================================
// Submodules
// ============================================================================

/// Sink that logs snapshots.
pub mod console;

/// Sink that keeps snapshots in memory.
pub mod memory;

// ============================================================================
// Re-exports
// ============================================================================

pub use console::ConsoleSink;
pub use memory::MemorySink;

// ============================================================================
// SnapshotSink
// ============================================================================

/// Destination for assembled snapshots.
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Persists one snapshot.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Storage`](crate::Error::Storage).
    async fn write_snapshot(&self, snapshot: &ServerSnapshot) -> Result<()>;
}
