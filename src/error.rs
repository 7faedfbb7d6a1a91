use thiserror::Error;

/// Failures raised by the remote access layer and the resolution helpers.
///
/// Tools never let one of these escape to the host: every variant is turned
/// into display text at the operation boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP-level failure before Linear answered.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Linear answered but reported the request as failed (GraphQL errors,
    /// missing data, or a mutation with success=false).
    #[error("Linear rejected the request: {0}")]
    Remote(String),
    /// Both ticket lookup paths came back empty.
    #[error("no ticket found for \"{0}\"")]
    NotFound(String),
    #[error("unknown team \"{key}\". Available team keys: {}", .known.join(", "))]
    UnknownTeam { key: String, known: Vec<String> },
    #[error("unknown status \"{name}\" for team {team}. Available statuses: {}", .known.join(", "))]
    UnknownStatus {
        name: String,
        team: String,
        known: Vec<String>,
    },
}

pub type ApiResult<T> = std::result::Result<T, Error>;
