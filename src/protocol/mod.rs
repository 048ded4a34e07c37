//! WebRCON protocol message types.
//!
//! This module defines the wire format exchanged with the remote console.
//!
//! # Protocol Overview
//!
//! | Message | Direction | Purpose |
//! |---------|-----------|---------|
//! | `Envelope` | Local → Remote | Console command with a fresh identifier |
//! | `Envelope` | Remote → Local | Command output, or unsolicited console chatter |
//!
//! Replies are matched to requests solely by `Identifier` equality.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Console commands |
//! | `envelope` | JSON envelope shared by requests and replies |

// ============================================================================
// Submodules
// ============================================================================

/// Console commands.
pub mod command;

/// JSON envelope shared by requests and replies.
pub mod envelope;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::Command;
pub use envelope::Envelope;
