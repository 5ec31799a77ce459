//! Error types for the share card engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from the engine.
///
/// Sparse telemetry, unknown enum strings and row overflow are all handled
/// inside the engine and never show up here. Only a request the engine cannot
/// lay out at all, or a failing canvas backend, is reported.
#[derive(Error, Debug)]
pub enum Error {
    /// The request is not a well-formed card request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested format identifier is not in the supported set
    #[error("Unsupported format: {0} (supported: 1:1, 9:16)")]
    UnsupportedFormat(String),

    /// The requested card type has no renderer
    #[error(
        "Unknown card type: {0} (supported: erg_summary, erg_summary_alt, regatta_result, \
         regatta_summary, season_recap, team_leaderboard)"
    )]
    UnknownCardType(String),

    /// The request body could not be decoded
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A canvas backend rejected a draw call during replay
    #[error("Canvas error: {0}")]
    Canvas(String),
}

impl Error {
    /// True for every variant that means "reject the request" to the caller.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Error::InvalidRequest(_)
                | Error::UnsupportedFormat(_)
                | Error::UnknownCardType(_)
                | Error::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_are_grouped() {
        assert!(Error::UnsupportedFormat("4:5".into()).is_invalid_request());
        assert!(Error::UnknownCardType("poster".into()).is_invalid_request());
        assert!(!Error::Canvas("surface lost".into()).is_invalid_request());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let e = Error::UnsupportedFormat("4:5".into());
        assert!(e.to_string().contains("4:5"));
        let e = Error::UnknownCardType("poster".into());
        assert!(e.to_string().contains("poster"));
        assert!(e.to_string().contains("regatta_summary, season_recap"));
    }
}
