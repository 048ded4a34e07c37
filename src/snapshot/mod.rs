//! Snapshot model and assembly.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | [`ServerSnapshot`] and [`Player`] |
//! | `merge` | Per-field precedence between the two parsers |
//! | `assembler` | Two correlated requests → one snapshot |

// ============================================================================
// Submodules
// ============================================================================

/// Two correlated requests → one snapshot.
pub mod assembler;

/// Per-field precedence between the two parsers.
pub mod merge;

/// Snapshot value types.
pub mod model;

// ============================================================================
// Re-exports
// ============================================================================

pub use assembler::{assemble, poll_session};
pub use merge::{first_present, merge};
pub use model::{DEFAULT_HOSTNAME, Player, ServerSnapshot};
