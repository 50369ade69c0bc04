use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use crate::protocol::contract;
use crate::types::EncodedCall;

pub struct AddBankerOpt {
    pub contract: Address,
    pub banker: Address,
}

impl AddBankerOpt {
    pub fn new(contract: Address, banker: Address) -> Self {
        Self { contract, banker }
    }

    pub fn build_call(&self) -> EncodedCall {
        let call = contract::addBankerCall { addr: self.banker };

        EncodedCall {
            to: self.contract,
            value: U256::ZERO,
            data: call.abi_encode().into(),
        }
    }
}

pub struct RemoveBankerOpt {
    pub contract: Address,
    pub banker: Address,
}

impl RemoveBankerOpt {
    pub fn new(contract: Address, banker: Address) -> Self {
        Self { contract, banker }
    }

    pub fn build_call(&self) -> EncodedCall {
        let call = contract::removeBankerCall { addr: self.banker };

        EncodedCall {
            to: self.contract,
            value: U256::ZERO,
            data: call.abi_encode().into(),
        }
    }
}
