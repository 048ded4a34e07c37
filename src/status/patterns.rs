//! Line patterns for the free-text `status` dump.
//!
//! The dump is an unversioned format. Each pattern is a separate constant
//! so it can be tested and adjusted on its own when the server output
//! drifts.
//!
//! ```text
//! hostname: My Server
//! version : 2587 secure (secure mode enabled, connected to Steam3)
//! map     : Procedural Map
//! players : 12 (100 max) (0 queued) (1 joining)
//!
//! id                name   ping connected addr                 owner violation kicks entity
//! 76561190000000001 "Alice" 64   1207.423s 129.222.76.28:33912       0.0       0     116786
//! ```
//!
//! Digit classes are spelled `[0-9]` because `\d` matches every Unicode digit.

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Metadata Patterns
// ============================================================================

/// `hostname: <value>`. Group 1 is the untrimmed value.
pub static HOSTNAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)^[ \t]*hostname[ \t]*:[ \t]*(.+)$"));

/// `map : <value>`. Group 1 is the untrimmed value.
pub static MAP_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)^[ \t]*map[ \t]*:[ \t]*(.+)$"));

/// `players : N (M max) (Q queued) (J joining)`. Groups 1-4 in that order.
pub static POPULATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?im)^[ \t]*players[ \t]*:[ \t]*([0-9]+)[ \t]*\(([0-9]+)[ \t]*max\)[ \t]*\(([0-9]+)[ \t]*queued\)[ \t]*\(([0-9]+)[ \t]*joining\)",
    )
});

// ============================================================================
// Player Row Pattern
// ============================================================================

/// One player row, matched against a single line.
///
/// Groups: 1 steam id, 2 name, 3 ping, 4 connected seconds. The address,
/// violation, kicks and entity columns must be present but are not captured.
pub static PLAYER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"^\s*([0-9]{17})\s+"([^"]+)"\s+([0-9]+)\s+([0-9.]+)s\s+\S+\s+\S+\s+[0-9]+\s+[0-9]+\s*$"#,
    )
});

/// Compiles a pattern literal.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid status pattern {pattern:?}: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
