//! Error types for jumps.

use std::error::Error;
use std::fmt;

/// Errors that can occur while jumping.
#[derive(Debug)]
pub enum JumpError {
    /// The target already is the current location.
    RedundantJump { key: String },
    /// Cycling was requested with nothing in the history.
    EmptyHistory,
    /// The navigation backend failed to open the target.
    ///
    /// The history has already been updated when this is returned.
    LoadFailure { key: String, source: anyhow::Error },
}

impl JumpError {
    /// Returns true for errors that only tell the user nothing happened.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            JumpError::RedundantJump { .. } | JumpError::EmptyHistory
        )
    }
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpError::RedundantJump { key } => write!(f, "Already at {}", key),
            JumpError::EmptyHistory => write!(f, "No bookmark history yet"),
            // The backend's own causes follow through `source()`
            JumpError::LoadFailure { source, .. } => write!(f, "{}", source),
        }
    }
}

impl Error for JumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JumpError::LoadFailure { source, .. } => source.source(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_failure() -> JumpError {
        JumpError::LoadFailure {
            key: "~/bm".to_string(),
            source: anyhow::anyhow!("No such file").context("Failed to read ~/bm"),
        }
    }

    #[test]
    fn test_load_failure_shows_backend_message() {
        let err = load_failure();
        assert_eq!(err.to_string(), "Failed to read ~/bm");
        assert!(!err.is_informational());

        let report = anyhow::Error::from(load_failure());
        assert_eq!(format!("{:#}", report), "Failed to read ~/bm: No such file");
    }

    #[test]
    fn test_load_failure_exposes_backend_causes() {
        let err = load_failure();
        let cause = err.source().map(|cause| cause.to_string());
        assert_eq!(cause.as_deref(), Some("No such file"));
        assert_eq!(
            anyhow::Error::from(load_failure()).chain().count(),
            2,
            "each cause is reported once"
        );
        assert!(JumpError::EmptyHistory.source().is_none());
    }

    #[test]
    fn test_informational_errors() {
        assert!(JumpError::EmptyHistory.is_informational());
        assert!(JumpError::RedundantJump {
            key: "a".to_string()
        }
        .is_informational());
    }
}
