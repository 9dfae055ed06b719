use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Store mutations only ever produce `Validation`, `Conflict` and
/// `NotFound`; `Storage` covers snapshot and data-directory failures at the
/// store lifecycle boundary. `Transport` is reserved for the remote backend,
/// which normalizes network failures, non-2xx statuses and malformed
/// payloads into it.
#[derive(Error, Debug)]
pub enum DataError {
    /// Network unreachable, unexpected status or undecodable body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Input rejected before any state was touched.
    #[error("validation error: {0}")]
    Validation(String),

    /// Illegal entity-state transition (double booking, re-resolving a
    /// request, archiving an active task, ...).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Operation referenced an id that does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// On-device snapshot storage problem (missing data directory, I/O).
    #[error("storage error: {0}")]
    Storage(String),
}

impl DataError {
    /// HTTP status the REST boundary maps this error to, and from which the
    /// remote backend recovers the variant.
    pub fn status_code(&self) -> u16 {
        match self {
            DataError::Transport(_) | DataError::Storage(_) => 500,
            DataError::Validation(_) => 400,
            DataError::Conflict(_) => 409,
            DataError::NotFound(_) => 404,
        }
    }
}
