use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, B256, U256};
use patchwork_chain_interact::operations::{encode_command, CallSpec};
use patchwork_chain_interact::safe::SafeTransaction;
use patchwork_chain_interact::signer::DigestSigner;
use patchwork_chain_interact::types::{EncodedCall, SafeSignature};
use patchwork_chain_interact::{EthChain, Provider, SignerError};
use patchwork_transport::client::RpcClient;
use patchwork_transport_service::{
    consts, Error as ServiceError, ProposeTransactionReq, SafeInfo, SafeTransactionApi,
};

use crate::config::ManagementConfig;
use crate::error::{Error, Result};

/// Where the wallet's next nonce comes from. Implemented for the chain
/// (the Safe contract's own counter) and for the coordination service
/// (its tracked view of the same counter).
pub trait NonceSource {
    fn next_nonce(&self, safe: Address) -> impl Future<Output = Result<U256>> + Send;
}

impl NonceSource for EthChain {
    fn next_nonce(&self, safe: Address) -> impl Future<Output = Result<U256>> + Send {
        async move { Ok(self.safe_nonce(safe).await?) }
    }
}

impl NonceSource for SafeTransactionApi {
    fn next_nonce(&self, safe: Address) -> impl Future<Output = Result<U256>> + Send {
        async move { Ok(self.safe_info(safe).await?.next_nonce()) }
    }
}

/// The coordination-service capability the pipeline needs: wallet info
/// and proposal submission.
pub trait ProposalGateway {
    fn safe_info(&self, safe: Address) -> impl Future<Output = Result<SafeInfo>> + Send;

    fn propose(
        &self,
        safe: Address,
        req: &ProposeTransactionReq,
    ) -> impl Future<Output = Result<()>> + Send;
}

impl ProposalGateway for SafeTransactionApi {
    fn safe_info(&self, safe: Address) -> impl Future<Output = Result<SafeInfo>> + Send {
        async move { Ok(SafeTransactionApi::safe_info(self, safe).await?) }
    }

    fn propose(
        &self,
        safe: Address,
        req: &ProposeTransactionReq,
    ) -> impl Future<Output = Result<()>> + Send {
        async move { Ok(self.propose_transaction(safe, req).await?) }
    }
}

#[derive(Debug, Clone)]
pub struct ProposalReceipt {
    pub safe_tx_hash: B256,
    pub nonce: U256,
    /// The service already held this exact proposal; no new record was
    /// created.
    pub already_known: bool,
}

/// Single-flight proposal pipeline: encode, fetch a fresh nonce, build,
/// hash, sign, submit. One proposal in flight per call; every stage
/// before the signer is pure, so abandoning at the prompt needs no
/// rollback.
pub struct Proposer<N, G, S> {
    config: Arc<ManagementConfig>,
    nonce_source: N,
    gateway: G,
    signer: S,
    service_attempts: usize,
    retry_delay: Duration,
}

impl<S: DigestSigner> Proposer<EthChain, SafeTransactionApi, S> {
    /// Wire the pipeline to the real chain and coordination service.
    pub fn from_config(config: Arc<ManagementConfig>, signer: S) -> Result<Self> {
        let client = RpcClient::new(&config.rpc_url, None)
            .map_err(patchwork_chain_interact::Error::from)?;
        let provider = Provider::new(client).map_err(Error::ChainInteract)?;
        let chain = EthChain::new(provider).map_err(Error::ChainInteract)?;
        let api = SafeTransactionApi::new(&config.tx_service_url)?;

        Ok(Self::new(config, chain, api, signer))
    }
}

impl<N, G, S> Proposer<N, G, S>
where
    N: NonceSource,
    G: ProposalGateway,
    S: DigestSigner,
{
    pub fn new(config: Arc<ManagementConfig>, nonce_source: N, gateway: G, signer: S) -> Self {
        Self {
            config,
            nonce_source,
            gateway,
            signer,
            service_attempts: 3,
            retry_delay: Duration::from_secs(1),
        }
    }

    pub fn with_retry_policy(mut self, service_attempts: usize, retry_delay: Duration) -> Self {
        self.service_attempts = service_attempts.max(1);
        self.retry_delay = retry_delay;
        self
    }

    pub async fn propose(&self, spec: &CallSpec) -> Result<ProposalReceipt> {
        // a bad form submission fails here, before any network round trip
        let call = encode_command(self.config.contract_address, spec)
            .map_err(patchwork_chain_interact::Error::from)?;

        let safe = self.config.safe_address;
        let info = self.gateway.safe_info(safe).await?;
        let sender = self.signer.signer_address();
        if !info.is_owner(sender) {
            return Err(Error::NotAnOwner {
                signer: sender,
                safe,
            });
        }

        match self.submit_fresh(&call).await {
            Err(Error::Service(ServiceError::StaleNonce(msg))) => {
                // another transaction consumed the nonce while this one
                // was in flight; rebuild against the advanced counter,
                // once
                tracing::warn!("stale nonce, rebuilding proposal: {msg}");
                self.submit_fresh(&call).await
            }
            other => other,
        }
    }

    async fn submit_fresh(&self, call: &EncodedCall) -> Result<ProposalReceipt> {
        let safe = self.config.safe_address;
        let nonce = self.nonce_source.next_nonce(safe).await?;

        let tx = SafeTransaction::new(call, nonce);
        let safe_tx_hash = tx.safe_tx_hash(safe, self.config.chain_id);

        let signature = match self.signer.sign_digest(&safe_tx_hash).await {
            Ok(signature) => signature,
            Err(SignerError::UserRejected) => {
                tracing::info!("proposal abandoned at the signing prompt");
                return Err(SignerError::UserRejected.into());
            }
            Err(e) => return Err(e.into()),
        };

        let req = proposal_request(&tx, safe_tx_hash, &signature);

        let mut attempt = 1;
        loop {
            match self.gateway.propose(safe, &req).await {
                Ok(()) => {
                    tracing::info!(hash = %safe_tx_hash, nonce = %nonce, "proposal submitted");
                    return Ok(ProposalReceipt {
                        safe_tx_hash,
                        nonce,
                        already_known: false,
                    });
                }
                Err(Error::Service(ServiceError::DuplicateHash(msg))) => {
                    tracing::info!("proposal already pending: {msg}");
                    return Ok(ProposalReceipt {
                        safe_tx_hash,
                        nonce,
                        already_known: true,
                    });
                }
                Err(Error::Service(ServiceError::ServiceUnavailable(msg)))
                    if attempt < self.service_attempts =>
                {
                    tracing::warn!("transaction service unavailable (attempt {attempt}): {msg}");
                    attempt += 1;
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn proposal_request(
    tx: &SafeTransaction,
    safe_tx_hash: B256,
    signature: &SafeSignature,
) -> ProposeTransactionReq {
    ProposeTransactionReq {
        to: tx.to.to_string(),
        value: tx.value.to_string(),
        data: patchwork_utils::hex_func::hex_encode_prefixed(&tx.data),
        operation: tx.operation.as_u8(),
        safe_tx_gas: tx.safe_tx_gas.to_string(),
        base_gas: tx.base_gas.to_string(),
        gas_price: tx.gas_price.to_string(),
        gas_token: tx.gas_token.to_string(),
        refund_receiver: tx.refund_receiver.to_string(),
        nonce: tx.nonce.to_string(),
        contract_transaction_hash: safe_tx_hash.to_string(),
        sender: signature.signer.to_string(),
        signature: signature.to_hex(),
        origin: Some(consts::PROPOSAL_ORIGIN.to_string()),
    }
}
