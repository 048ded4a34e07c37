//! Console commands sent over WebRCON.
//!
//! A poll cycle only needs two of them:
//!
//! | Command | Reply |
//! |---------|-------|
//! | `serverinfo` | JSON object on builds that support it |
//! | `status` | Human-readable dump with metadata and player rows |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// Command
// ============================================================================

/// A console command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// `serverinfo`: structured server info.
    ServerInfo,
    /// `status`: free-text status dump.
    Status,
    /// Any other console command, sent verbatim.
    Custom(String),
}

impl Command {
    /// Creates a custom command.
    #[inline]
    #[must_use]
    pub fn custom(command: impl Into<String>) -> Self {
        Self::Custom(command.into())
    }

    /// Returns the console text for this command.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ServerInfo => "serverinfo",
            Self::Status => "status",
            Self::Custom(command) => command,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        match value {
            "serverinfo" => Self::ServerInfo,
            "status" => Self::Status,
            other => Self::Custom(other.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_commands() {
        assert_eq!(Command::ServerInfo.as_str(), "serverinfo");
        assert_eq!(Command::Status.as_str(), "status");
    }

    #[test]
    fn test_custom_command_is_verbatim() {
        let command = Command::custom("say hello");
        assert_eq!(command.to_string(), "say hello");
    }

    #[test]
    fn test_from_str_recognizes_known_commands() {
        assert_eq!(Command::from("status"), Command::Status);
        assert_eq!(Command::from("serverinfo"), Command::ServerInfo);
        assert_eq!(Command::from("playerlist"), Command::custom("playerlist"));
    }
}
