use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeInfo {
    pub address: String,
    pub nonce: u64,
    pub threshold: u32,
    pub owners: Vec<String>,
    pub version: Option<String>,
}

impl SafeInfo {
    pub fn is_owner(&self, address: Address) -> bool {
        self.owners.iter().any(|owner| {
            patchwork_utils::address::parse_eth_address(owner)
                .map(|a| a == address)
                .unwrap_or(false)
        })
    }

    /// The nonce the service expects the next proposal to carry.
    pub fn next_nonce(&self) -> U256 {
        U256::from(self.nonce)
    }
}
