//! WebSocket transport layer.
//!
//! This module handles communication with the remote console via WebSocket.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Session (Rust) │                              │  Game server    │
//! │                 │         WebSocket            │                 │
//! │  Correlation    │◄────────────────────────────►│  WebRCON        │
//! │  map by id      │   ws://host:port/<pass>      │  listener       │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Session Lifecycle
//!
//! 1. `Session::open` - Handshake with a bounded deadline
//! 2. `Session::send` / `Session::execute` - Correlated requests
//! 3. `Session::close` - Close socket, cancel pending requests
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `endpoint` | Connection URI and credential escaping |
//! | `session` | WebSocket session and event loop |

// ============================================================================
// Submodules
// ============================================================================

/// Connection URI and credential escaping.
pub mod endpoint;

/// WebSocket session and event loop.
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use endpoint::{Endpoint, Scheme};
pub use session::{
    DEFAULT_CLOSE_TIMEOUT, DEFAULT_HANDSHAKE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, MAX_PENDING_REQUESTS,
    Session,
};
