//! Poll entry points.
//!
//! A [`Poller`] opens a fresh session per call, assembles one snapshot and
//! closes the session again. No state survives between calls, so
//! concurrent polls are independent.
//!
//! # Example
//!
//! ```no_run
//! use rcon_snapshot::{ConsoleSink, Poller, RconConfig, Result};
//!
//! # async fn example() -> Result<()> {
//! let poller = Poller::new(RconConfig::from_env()?);
//! let snapshot = poller.poll_once(&ConsoleSink).await?;
//! println!("{} players online", snapshot.players.len());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::snapshot::{ServerSnapshot, poll_session};
use crate::storage::SnapshotSink;
use crate::transport::Session;

// ============================================================================
// Submodules
// ============================================================================

/// Remote console configuration.
pub mod config;

pub use config::{RconConfig, RconConfigBuilder};

// ============================================================================
// Poller
// ============================================================================

/// Polls one remote console.
#[derive(Debug, Clone)]
pub struct Poller {
    config: RconConfig,
}

impl Poller {
    /// Creates a poller for `config`.
    #[inline]
    #[must_use]
    pub fn new(config: RconConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RconConfig {
        &self.config
    }

    /// Produces one snapshot now.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionTimeout`](crate::Error::ConnectionTimeout) / [`Error::ConnectionRejected`](crate::Error::ConnectionRejected) if the session cannot be opened
    /// - any request error from [`poll_session`]
    pub async fn poll(&self) -> Result<ServerSnapshot> {
        let endpoint = self.config.endpoint();

        let session = Session::open(&endpoint, self.config.handshake_timeout)
            .await?
            .with_request_timeout(self.config.request_timeout);

        let snapshot = poll_session(session).await?;

        debug!(
            endpoint = %endpoint.authority(),
            hostname = %snapshot.hostname,
            players = snapshot.players.len(),
            "Poll completed"
        );

        Ok(snapshot)
    }

    /// Polls, then writes the snapshot to `sink` exactly once.
    ///
    /// A failed poll writes nothing.
    ///
    /// # Errors
    ///
    /// Poll errors as in [`Poller::poll`], or the sink's storage error.
    pub async fn poll_once(&self, sink: &dyn SnapshotSink) -> Result<ServerSnapshot> {
        let snapshot = self.poll().await?;

        if let Err(e) = sink.write_snapshot(&snapshot).await {
            warn!(error = %e, "Failed to store snapshot");
            return Err(e);
        }

        info!(
            hostname = %snapshot.hostname,
            players = snapshot.players.len(),
            "Snapshot stored"
        );

        Ok(snapshot)
    }
}

// ============================================================================
// Free Function
// ============================================================================

/// Produces one snapshot from `host:port`.
///
/// `timeout_ms` bounds the handshake and each of the two requests.
///
/// # Errors
///
/// [`Error::Config`](crate::Error::Config) for invalid arguments, otherwise
/// as in [`Poller::poll`].
pub async fn poll(
    host: &str,
    port: u16,
    credential: &str,
    timeout_ms: u64,
) -> Result<ServerSnapshot> {
    let timeout = Duration::from_millis(timeout_ms);

    let config = RconConfig::builder()
        .host(host)
        .port(port)
        .credential(credential)
        .handshake_timeout(timeout)
        .request_timeout(timeout)
        .build()?;

    Poller::new(config).poll().await
}

// ============================================================================
// Tests
// ============================================================================
