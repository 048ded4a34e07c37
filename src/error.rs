//! Error types for the WebRCON snapshot client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use rcon_snapshot::{Poller, Result};
//!
//! async fn example(poller: &Poller) -> Result<()> {
//!     let snapshot = poller.poll().await?;
//!     println!("{} players online", snapshot.players.len());
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Connect | [`Error::ConnectionTimeout`], [`Error::ConnectionRejected`] |
//! | Request | [`Error::RequestTimeout`], [`Error::ConnectionClosed`], [`Error::Cancelled`], [`Error::DuplicateRequest`], [`Error::TooManyPending`] |
//! | Storage | [`Error::Storage`] |
//! | External | [`Error::Json`] |
//!
//! Parsing the server's status text never produces an error. Missing or
//! malformed fields come back as `None`.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;
use tokio_tungstenite::tungstenite::Error as WsError;

use crate::identifiers::RequestId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging. None of them
/// carry the RCON credential.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when host, port or credential are missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Connect Errors
    // ========================================================================
    /// WebSocket handshake did not finish in time.
    #[error("Connection timeout after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// WebSocket handshake was rejected.
    ///
    /// Covers refused TCP connections, TLS failures and HTTP upgrade
    /// rejections (a wrong password shows up here as well).
    #[error("Connection to {endpoint} rejected: {source}")]
    ConnectionRejected {
        /// `host:port` of the remote console.
        endpoint: String,
        /// Underlying handshake failure.
        #[source]
        source: Box<WsError>,
    },

    // ========================================================================
    // Request Errors
    // ========================================================================
    /// No reply with a matching identifier arrived in time.
    #[error("Request {request_id} timed out after {timeout_ms}ms")]
    RequestTimeout {
        /// The request ID that timed out.
        request_id: RequestId,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// The socket closed or failed while the request was pending.
    #[error("Connection closed")]
    ConnectionClosed,

    /// The session was closed locally while the request was pending.
    #[error("Request cancelled: session closed")]
    Cancelled,

    /// An identifier was reused before its previous request resolved.
    #[error("Request {request_id} is already pending on this session")]
    DuplicateRequest {
        /// The identifier that is already in flight.
        request_id: RequestId,
    },

    /// The pending request table is full.
    #[error("Too many pending requests: {pending}/{max}")]
    TooManyPending {
        /// Requests currently waiting for a reply.
        pending: usize,
        /// Configured maximum.
        max: usize,
    },

    // ========================================================================
    // Storage Errors
    // ========================================================================
    /// Storage collaborator failed to persist a snapshot.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a connection timeout error.
    #[inline]
    pub fn connection_timeout(timeout_ms: u64) -> Self {
        Self::ConnectionTimeout { timeout_ms }
    }

    /// Creates a connection rejected error.
    #[inline]
    pub fn connection_rejected(endpoint: impl Into<String>, source: WsError) -> Self {
        Self::ConnectionRejected {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Creates a request timeout error.
    #[inline]
    pub fn request_timeout(request_id: RequestId, timeout_ms: u64) -> Self {
        Self::RequestTimeout {
            request_id,
            timeout_ms,
        }
    }

    /// Creates a duplicate request error.
    #[inline]
    pub fn duplicate_request(request_id: RequestId) -> Self {
        Self::DuplicateRequest { request_id }
    }

    /// Creates a storage error.
    #[inline]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::ConnectionTimeout { .. } | Self::RequestTimeout { .. }
        )
    }

    /// Returns `true` if the session could not be established.
    #[inline]
    #[must_use]
    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionTimeout { .. } | Self::ConnectionRejected { .. }
        )
    }

    /// Returns `true` if the request failed because its session went away.
    #[inline]
    #[must_use]
    pub fn is_transport_closed(&self) -> bool {
        matches!(self, Self::ConnectionClosed | Self::Cancelled)
    }

    /// Returns `true` if a single correlated request failed.
    #[inline]
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::RequestTimeout { .. }
                | Self::ConnectionClosed
                | Self::Cancelled
                | Self::DuplicateRequest { .. }
                | Self::TooManyPending { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
