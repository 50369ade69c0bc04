use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use crate::protocol::contract;
use crate::types::EncodedCall;

/// Propose a new protocol fee configuration, in basis points
/// (10000 = 100%).
pub struct ProtocolFeeOpt {
    pub contract: Address,
    pub mint_bp: U256,
    pub patch_bp: U256,
    pub assign_bp: U256,
}

impl ProtocolFeeOpt {
    pub fn new(contract: Address, mint_bp: U256, patch_bp: U256, assign_bp: U256) -> Self {
        Self {
            contract,
            mint_bp,
            patch_bp,
            assign_bp,
        }
    }

    pub fn build_call(&self) -> EncodedCall {
        let call = contract::proposeProtocolFeeConfigCall {
            config: contract::FeeConfig {
                mintBp: self.mint_bp,
                patchBp: self.patch_bp,
                assignBp: self.assign_bp,
            },
        };

        EncodedCall {
            to: self.contract,
            value: U256::ZERO,
            data: call.abi_encode().into(),
        }
    }
}
