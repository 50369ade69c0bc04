use alloy::primitives::Address;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("{signer} is not an owner of safe {safe}")]
    NotAnOwner { signer: Address, safe: Address },
    #[error("{0}")]
    ChainInteract(#[from] patchwork_chain_interact::Error),
    #[error("{0}")]
    Service(#[from] patchwork_transport_service::Error),
    #[error("sign error {0}")]
    Signer(#[from] patchwork_chain_interact::SignerError),
}
