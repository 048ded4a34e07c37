//! RCON Snapshot - WebRCON telemetry client for game servers.
//!
//! This library polls a live game server through its WebRCON console and
//! turns the replies into one [`ServerSnapshot`]: hostname, map,
//! population, uptime and the connected player roster.
//!
//! # Architecture
//!
//! One poll cycle looks like this:
//!
//! - **Session**: Opens a WebSocket to `ws://host:port/<password>`
//! - **Correlator**: Sends `serverinfo` and `status`, matches replies by `Identifier`
//! - **Parsers**: Decode the JSON `serverinfo` reply and the free-text `status` dump
//! - **Assembler**: Merges both per field and closes the session
//!
//! Key design principles:
//!
//! - One session per poll, never reused
//! - Replies routed strictly by identifier, never by arrival order
//! - Parsing never fails; missing data becomes `None`
//! - Event-driven (no polling loops inside the client)
//!
//! # Quick Start
//!
//! ```no_run
//! use rcon_snapshot::{Poller, RconConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = RconConfig::builder()
//!         .host("127.0.0.1")
//!         .port(28016)
//!         .credential("password")
//!         .build()?;
//!
//!     let snapshot = Poller::new(config).poll().await?;
//!     println!("{}: {:?} players", snapshot.hostname, snapshot.players_online);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Request identifiers |
//! | [`poller`] | Configuration and poll entry points |
//! | [`protocol`] | WebRCON envelope and commands |
//! | [`snapshot`] | Snapshot model and assembly |
//! | [`status`] | `serverinfo` and `status` parsers |
//! | [`storage`] | Snapshot sinks |
//! | [`transport`] | WebSocket session and correlator |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe request identifiers.
pub mod identifiers;

/// Configuration and poll entry points.
///
/// Use [`Poller::new`] with an [`RconConfig`] to poll a console.
pub mod poller;

/// WebRCON protocol message types.
pub mod protocol;

/// Snapshot model and assembly.
pub mod snapshot;

/// Parsers for the `serverinfo` and `status` replies.
pub mod status;

/// Snapshot storage collaborators.
pub mod storage;

/// WebSocket transport layer.
///
/// Session handshake, event loop and request correlation.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{RequestId, RequestIdGenerator};

// Poller types
pub use poller::{Poller, RconConfig, RconConfigBuilder, poll};

// Protocol types
pub use protocol::{Command, Envelope};

// Snapshot types
pub use snapshot::{Player, ServerSnapshot};

// Storage types
pub use storage::{ConsoleSink, MemorySink, SnapshotSink};

// Transport types
pub use transport::{Endpoint, Scheme, Session};
