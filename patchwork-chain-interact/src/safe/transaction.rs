use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::sol_types::{Eip712Domain, SolStruct};

use crate::protocol::contract;
use crate::types::{EncodedCall, Operation};

/// A Safe multisig transaction. Gas fields default to zero, meaning no
/// refund and whatever gas the executor supplies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafeTransaction {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub operation: Operation,
    pub safe_tx_gas: U256,
    pub base_gas: U256,
    pub gas_price: U256,
    pub gas_token: Address,
    pub refund_receiver: Address,
    pub nonce: U256,
}

impl SafeTransaction {
    /// The nonce must be the wallet's current one, fetched immediately
    /// before the call; a stale value is rejected at submission.
    pub fn new(call: &EncodedCall, nonce: U256) -> Self {
        Self {
            to: call.to,
            value: call.value,
            data: call.data.clone(),
            operation: Operation::Call,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce,
        }
    }

    /// `DelegateCall` runs in the wallet's own storage context, so it is
    /// never the default and has to be requested explicitly.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Signing domain of a Safe >= 1.3.0: chain id plus wallet address,
    /// nothing else.
    pub fn domain(safe_address: Address, chain_id: u64) -> Eip712Domain {
        Eip712Domain::new(
            None,
            None,
            Some(U256::from(chain_id)),
            Some(safe_address),
            None,
        )
    }

    /// The digest every co-signer commits to:
    /// `keccak256(0x19 || 0x01 || domainSeparator || hashStruct(SafeTx))`.
    pub fn safe_tx_hash(&self, safe_address: Address, chain_id: u64) -> B256 {
        self.as_safe_tx()
            .eip712_signing_hash(&Self::domain(safe_address, chain_id))
    }

    fn as_safe_tx(&self) -> contract::SafeTx {
        contract::SafeTx {
            to: self.to,
            value: self.value,
            data: self.data.clone(),
            operation: self.operation.as_u8(),
            safeTxGas: self.safe_tx_gas,
            baseGas: self.base_gas,
            gasPrice: self.gas_price,
            gasToken: self.gas_token,
            refundReceiver: self.refund_receiver,
            nonce: self.nonce,
        }
    }

    /// The wallet's own `getTransactionHash` view call over the same
    /// record, for cross-checking the local digest against the contract.
    pub fn hash_call(&self) -> contract::getTransactionHashCall {
        contract::getTransactionHashCall {
            to: self.to,
            value: self.value,
            data: self.data.clone(),
            operation: self.operation.as_u8(),
            safeTxGas: self.safe_tx_gas,
            baseGas: self.base_gas,
            gasPrice: self.gas_price,
            gasToken: self.gas_token,
            refundReceiver: self.refund_receiver,
            _nonce: self.nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256, keccak256};
    use alloy::sol_types::SolValue;

    // keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
    const DOMAIN_TYPE_HASH: B256 =
        b256!("47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218");

    // keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,
    // uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,
    // address refundReceiver,uint256 nonce)")
    const SAFE_TX_TYPE_HASH: B256 =
        b256!("bb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8");

    const CHAIN_ID: u64 = 8453;

    fn safe_address() -> Address {
        address!("Fe794c3918aAF57E85E238370BDc4005cE6E5f39")
    }

    fn sample_tx() -> SafeTransaction {
        let call = EncodedCall {
            to: address!("00000000001616e65bb9fda42dfbb7155406549b"),
            value: U256::ZERO,
            data: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
        };
        SafeTransaction::new(&call, U256::from(7))
    }

    #[test]
    fn test_defaults() {
        let tx = sample_tx();
        assert_eq!(tx.operation, Operation::Call);
        assert_eq!(tx.operation.as_u8(), 0);
        assert_eq!(tx.safe_tx_gas, U256::ZERO);
        assert_eq!(tx.base_gas, U256::ZERO);
        assert_eq!(tx.gas_price, U256::ZERO);
        assert_eq!(tx.gas_token, Address::ZERO);
        assert_eq!(tx.refund_receiver, Address::ZERO);

        let tx = tx.with_operation(Operation::DelegateCall);
        assert_eq!(tx.operation.as_u8(), 1);
    }

    #[test]
    fn test_safe_tx_type_hash_matches_deployed_contract() {
        let encoded_type = contract::SafeTx::eip712_encode_type();
        assert_eq!(keccak256(encoded_type.as_bytes()), SAFE_TX_TYPE_HASH);
    }

    #[test]
    fn test_domain_separator_matches_manual_layout() {
        let domain = SafeTransaction::domain(safe_address(), CHAIN_ID);

        let encoded =
            (DOMAIN_TYPE_HASH, U256::from(CHAIN_ID), safe_address()).abi_encode();
        assert_eq!(domain.separator(), keccak256(&encoded));
    }

    #[test]
    fn test_signing_hash_matches_manual_layout() {
        let tx = sample_tx();

        let domain_separator = keccak256(
            (DOMAIN_TYPE_HASH, U256::from(CHAIN_ID), safe_address()).abi_encode(),
        );
        let struct_hash = keccak256(
            (
                SAFE_TX_TYPE_HASH,
                tx.to,
                tx.value,
                keccak256(&tx.data),
                U256::from(tx.operation.as_u8()),
                tx.safe_tx_gas,
                tx.base_gas,
                tx.gas_price,
                tx.gas_token,
                tx.refund_receiver,
                tx.nonce,
            )
                .abi_encode(),
        );

        let mut preimage = Vec::with_capacity(66);
        preimage.extend_from_slice(&[0x19, 0x01]);
        preimage.extend_from_slice(domain_separator.as_slice());
        preimage.extend_from_slice(struct_hash.as_slice());

        assert_eq!(
            tx.safe_tx_hash(safe_address(), CHAIN_ID),
            keccak256(&preimage)
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = sample_tx().safe_tx_hash(safe_address(), CHAIN_ID);
        let b = sample_tx().safe_tx_hash(safe_address(), CHAIN_ID);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_field_is_hashed() {
        let base = sample_tx();
        let base_hash = base.safe_tx_hash(safe_address(), CHAIN_ID);

        let other = address!("5985CE40d3dACf7c1352e464691BC7fb03215928");
        let mutations = [
            SafeTransaction {
                to: other,
                ..base.clone()
            },
            SafeTransaction {
                value: U256::from(1),
                ..base.clone()
            },
            SafeTransaction {
                data: Bytes::from(vec![0xde, 0xad, 0xbe, 0xee]),
                ..base.clone()
            },
            base.clone().with_operation(Operation::DelegateCall),
            SafeTransaction {
                safe_tx_gas: U256::from(21000),
                ..base.clone()
            },
            SafeTransaction {
                base_gas: U256::from(21000),
                ..base.clone()
            },
            SafeTransaction {
                gas_price: U256::from(1),
                ..base.clone()
            },
            SafeTransaction {
                gas_token: other,
                ..base.clone()
            },
            SafeTransaction {
                refund_receiver: other,
                ..base.clone()
            },
            SafeTransaction {
                nonce: U256::from(8),
                ..base.clone()
            },
        ];

        for mutated in mutations {
            assert_ne!(
                mutated.safe_tx_hash(safe_address(), CHAIN_ID),
                base_hash,
                "hash ignored a field change: {mutated:?}"
            );
        }

        // domain changes re-bind the digest too
        assert_ne!(base.safe_tx_hash(other, CHAIN_ID), base_hash);
        assert_ne!(base.safe_tx_hash(safe_address(), 11155111), base_hash);
    }
}
