//! Type-safe identifiers for WebRCON requests.
//!
//! WebRCON correlates replies by the integer `Identifier` field of the
//! envelope. [`RequestId`] wraps that integer so it cannot be mixed up
//! with ports, pings or player counts.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

use serde::{Deserialize, Serialize};

// ============================================================================
// RequestId
// ============================================================================

/// Identifier of one correlated request on a session.
///
/// The server echoes it back unchanged in the reply. Unsolicited console
/// output typically carries `0` or `-1`, which is why both are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(i32);

impl RequestId {
    /// Identifier used for the `serverinfo` query of a poll cycle.
    pub const SERVER_INFO: Self = Self(1);

    /// Identifier used for the `status` query of a poll cycle.
    pub const STATUS: Self = Self(2);

    /// Creates an identifier from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[inline]
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for identifiers the server uses for broadcast output.
    #[inline]
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.0 <= 0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RequestId {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

// ============================================================================
// RequestIdGenerator
// ============================================================================

/// Monotonically increasing identifier source, one per session.
///
/// Starts above [`RequestId::STATUS`] so ad-hoc commands never collide
/// with the two fixed poll identifiers.
#[derive(Debug)]
pub struct RequestIdGenerator {
    next: AtomicI32,
}

impl RequestIdGenerator {
    /// First identifier handed out by [`RequestIdGenerator::new`].
    pub const FIRST: i32 = 1000;

    /// Creates a generator starting at [`RequestIdGenerator::FIRST`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Self::FIRST)
    }

    /// Creates a generator starting at `first`.
    #[inline]
    #[must_use]
    pub const fn starting_at(first: i32) -> Self {
        Self {
            next: AtomicI32::new(first),
        }
    }

    /// Returns the next identifier.
    ///
    /// Wraps back to [`RequestIdGenerator::FIRST`] instead of entering the
    /// reserved range.
    pub fn next_id(&self) -> RequestId {
        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            let following = current.checked_add(1).unwrap_or(Self::FIRST);
            match self.next.compare_exchange_weak(
                current,
                following,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return RequestId(current),
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for RequestIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
