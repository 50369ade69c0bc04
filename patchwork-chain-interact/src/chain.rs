use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::protocol::contract;
use crate::provider::Provider;
use crate::safe::SafeTransaction;

pub struct EthChain {
    pub provider: Provider,
}

impl EthChain {
    pub fn new(provider: Provider) -> crate::Result<Self> {
        Ok(Self { provider })
    }

    /// Current nonce of the Safe contract itself, read fresh per proposal.
    pub async fn safe_nonce(&self, safe: Address) -> crate::Result<U256> {
        let call = contract::nonceCall {};
        let tx = TransactionRequest::default()
            .with_to(safe)
            .with_input(call.abi_encode());

        let res = self.provider.eth_call(tx).await?;
        Ok(patchwork_utils::unit::u256_from_str(&res)?)
    }

    /// The hash the Safe contract itself computes for this record.
    pub async fn reported_tx_hash(
        &self,
        safe: Address,
        tx: &SafeTransaction,
    ) -> crate::Result<B256> {
        let request = TransactionRequest::default()
            .with_to(safe)
            .with_input(tx.hash_call().abi_encode());

        let res = self.provider.eth_call(request).await?;
        Ok(patchwork_utils::address::parse_b256(&res)?)
    }

    /// Compute the digest locally and cross-check it against the wallet's
    /// own `getTransactionHash`. A divergence means the local byte layout
    /// is wrong and nothing built from it may be signed.
    pub async fn verified_tx_hash(
        &self,
        safe: Address,
        tx: &SafeTransaction,
    ) -> crate::Result<B256> {
        let chain_id = self.provider.chain_id().await?;
        let local = tx.safe_tx_hash(safe, chain_id);
        let reported = self.reported_tx_hash(safe, tx).await?;

        if local != reported {
            return Err(crate::Error::HashMismatch { local, reported });
        }
        Ok(local)
    }
}
