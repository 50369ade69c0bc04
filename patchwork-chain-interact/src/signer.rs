use std::future::Future;

use alloy::primitives::{Address, B256, Bytes};

use crate::errors::SignerError;
use crate::types::{ChainPrivateKey, SafeSignature};

/// Signing capability of a connected wallet: an address and the ability to
/// sign a 32-byte digest. Signing may suspend on an external approval
/// prompt, so it is async and may resolve with `UserRejected`.
pub trait DigestSigner {
    fn signer_address(&self) -> Address;

    fn sign_digest(
        &self,
        digest: &B256,
    ) -> impl Future<Output = Result<SafeSignature, SignerError>> + Send;
}

/// In-process signer over a raw private key. Keys stay inside; callers
/// only ever see the [`DigestSigner`] capability.
pub struct LocalSigner {
    key: ChainPrivateKey,
    address: Address,
}

impl LocalSigner {
    pub fn new(key: ChainPrivateKey) -> crate::Result<Self> {
        let address = patchwork_utils::sign::address_from_private_key(&key)?;
        Ok(Self { key, address })
    }
}

impl DigestSigner for LocalSigner {
    fn signer_address(&self) -> Address {
        self.address
    }

    fn sign_digest(
        &self,
        digest: &B256,
    ) -> impl Future<Output = Result<SafeSignature, SignerError>> + Send {
        let result = patchwork_utils::sign::sign_digest(digest.as_slice(), &self.key)
            .map(|signature| SafeSignature {
                signer: self.address,
                signature: Bytes::copy_from_slice(&signature),
            })
            .map_err(|e| SignerError::Provider(e.to_string()));

        async move { result }
    }
}

/// Recover the address that signed `digest`; for a valid signature this
/// equals [`SafeSignature::signer`].
pub fn recover_signer(digest: &B256, signature: &[u8]) -> crate::Result<Address> {
    Ok(patchwork_utils::sign::recover_address(
        digest.as_slice(),
        signature,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;

    // anvil default account 0
    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn test_sign_recovers_to_signer() {
        let signer = LocalSigner::new(ChainPrivateKey::from(KEY)).unwrap();
        let digest = keccak256(b"a safe tx digest");

        let signature = signer.sign_digest(&digest).await.unwrap();
        assert_eq!(signature.signature.len(), 65);
        assert_eq!(signature.signer, signer.signer_address());

        let recovered = recover_signer(&digest, &signature.signature).unwrap();
        assert_eq!(recovered, signer.signer_address());
    }

    #[tokio::test]
    async fn test_signature_binds_to_digest() {
        let signer = LocalSigner::new(ChainPrivateKey::from(KEY)).unwrap();
        let digest = keccak256(b"one digest");
        let other = keccak256(b"another digest");

        let signature = signer.sign_digest(&digest).await.unwrap();
        let recovered = recover_signer(&other, &signature.signature).unwrap();
        assert_ne!(recovered, signer.signer_address());
    }

    #[test]
    fn test_rejects_malformed_key() {
        assert!(LocalSigner::new(ChainPrivateKey::from("0x1234")).is_err());
    }
}
