use alloy::primitives::B256;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("unknown command {0}")]
    UnknownCommand(String),
    #[error("expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("argument {index} is not a valid {expected}: {value}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("signature request rejected")]
    UserRejected,
    #[error("no signing provider available")]
    NoProvider,
    #[error("provider error: {0}")]
    Provider(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    TransportError(#[from] patchwork_transport::errors::TransportError),
    #[error("utils error {0}")]
    UtilsError(#[from] patchwork_utils::error::Error),
    #[error("encode error {0}")]
    Encode(#[from] EncodeError),
    #[error("sign error {0}")]
    Signer(#[from] SignerError),
    #[error("local safe tx hash {local} does not match contract reported {reported}")]
    HashMismatch { local: B256, reported: B256 },
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::TransportError(e) => e.is_network_error(),
            Error::UtilsError(e) => e.is_network_error(),
            _ => false,
        }
    }
}
