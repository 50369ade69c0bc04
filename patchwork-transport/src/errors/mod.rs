use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("service returned status {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },
    #[error("node response {0}")]
    NodeResponseError(String),
    #[error("query result empty")]
    EmptyResult,
    #[error("Utils error: {0}")]
    Utils(#[from] patchwork_utils::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }
}
