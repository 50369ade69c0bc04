use patchwork_transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("safe nonce advanced since the transaction was built: {0}")]
    StaleNonce(String),
    #[error("proposal already known to the service: {0}")]
    DuplicateHash(String),
    #[error("transaction service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("transaction service rejected the proposal: {0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(TransportError),
}

impl Error {
    /// Map a raw transport failure onto the submission taxonomy. The
    /// service reports validation failures as 422 with a message body;
    /// only the nonce and duplicate cases are recoverable.
    pub(crate) fn classify(e: TransportError) -> Self {
        match e {
            TransportError::NonSuccessStatus { status, body } => {
                let lower = body.to_lowercase();
                if status >= 500 {
                    Error::ServiceUnavailable(body)
                } else if status == 422 && lower.contains("nonce") {
                    Error::StaleNonce(body)
                } else if lower.contains("already exist") || lower.contains("duplicate") {
                    Error::DuplicateHash(body)
                } else {
                    Error::Rejected(body)
                }
            }
            TransportError::Utils(e) if e.is_network_error() => {
                Error::ServiceUnavailable(e.to_string())
            }
            other => Error::Transport(other),
        }
    }
}
