pub mod config;
pub mod error;
pub mod proposer;

pub use config::{ConfigError, ManagementConfig};
pub use error::{Error, Result};
pub use proposer::{NonceSource, ProposalGateway, ProposalReceipt, Proposer};
