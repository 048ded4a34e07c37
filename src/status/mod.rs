//! Parsers for the server's status replies.
//!
//! Two independent parsers, both side-effect free and total:
//!
//! | Parser | Input | Output |
//! |--------|-------|--------|
//! | [`parse_server_info`] | `serverinfo` reply (JSON) | `Option<ServerInfo>` |
//! | [`parse_status_meta`] | `status` reply (free text) | [`StatusMeta`] |
//! | [`parse_players`] | `status` reply (free text) | `Vec<Player>` |
//!
//! Malformed input degrades to absent fields; it is never an error.

// ============================================================================
// Submodules
// ============================================================================

/// Named line patterns for the free-text dump.
pub mod patterns;

/// Structured `serverinfo` parser.
pub mod server_info;

/// Free-text `status` parser.
pub mod status_dump;

// ============================================================================
// Re-exports
// ============================================================================

pub use server_info::{ServerInfo, parse_server_info};
pub use status_dump::{StatusMeta, parse_player_row, parse_players, parse_status_meta, round_seconds};
