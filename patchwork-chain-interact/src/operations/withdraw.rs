use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use crate::protocol::contract;
use crate::types::EncodedCall;

/// Withdraw accumulated fees from a protocol scope. The call carries no
/// native value; the amount moves inside the contract.
pub struct WithdrawOpt {
    pub contract: Address,
    pub scope_name: String,
    pub amount: U256,
}

impl WithdrawOpt {
    pub fn new(contract: Address, scope_name: &str, amount: U256) -> Self {
        Self {
            contract,
            scope_name: scope_name.to_string(),
            amount,
        }
    }

    pub fn build_call(&self) -> EncodedCall {
        let call = contract::withdrawCall {
            scopeName: self.scope_name.clone(),
            amount: self.amount,
        };

        EncodedCall {
            to: self.contract,
            value: U256::ZERO,
            data: call.abi_encode().into(),
        }
    }
}
