use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while retrieving the date. The display
/// treats every variant the same way: log it and stay unloaded.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchFailure {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response body: {0}")]
    Parse(String),

    #[error("Response body has no date field")]
    MissingDate,

    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),
}

impl FetchFailure {
    pub fn transport(err: impl Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn parse(err: impl Display) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<gloo_net::Error> for FetchFailure {
    fn from(err: gloo_net::Error) -> Self {
        Self::transport(err)
    }
}

/// Errors reading the page-embedded configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            FetchFailure::transport("connection refused").to_string(),
            "Request failed: connection refused"
        );
        assert_eq!(
            FetchFailure::MissingDate.to_string(),
            "Response body has no date field"
        );
        assert_eq!(
            FetchFailure::TimedOut(Duration::from_millis(1500)).to_string(),
            "Request timed out after 1.5s"
        );
    }

    #[test]
    fn test_parse_failure_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure = FetchFailure::parse(&err);
        assert!(matches!(failure, FetchFailure::Parse(ref msg) if msg.contains("EOF")));
    }
}
