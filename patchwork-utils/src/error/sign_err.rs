#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("Message error: {0}")]
    Message(String),
    #[error("Key error: {0}")]
    KeyError(String),
    #[error("Recovery error: {0}")]
    Recovery(String),
}
