//! Error types for the fallible edges of the game
//!
//! Nothing in the simulation itself can fail. Errors only come from parsing
//! configuration, validating it, and talking to the browser.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    /// Configuration override was not valid JSON for [`crate::GameConfig`]
    ConfigParse(String),
    /// A configuration field is outside its allowed range
    InvalidConfig { field: &'static str, reason: &'static str },
    /// Client-side storage is not available (private mode, native build, ...)
    StorageUnavailable,
    /// A required DOM element is missing from the page
    MissingElement(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
            Self::StorageUnavailable => write!(f, "local storage unavailable"),
            Self::MissingElement(id) => write!(f, "missing DOM element #{id}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = GameError::InvalidConfig {
            field: "lane_count",
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid config field `lane_count`: must be at least 1"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: GameError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
