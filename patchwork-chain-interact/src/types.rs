use alloy::primitives::{Address, Bytes, U256};

/// ABI-encoded contract call, ready to be wrapped into a Safe transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCall {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    Call,
    DelegateCall,
}

impl Operation {
    pub fn as_u8(&self) -> u8 {
        match self {
            Operation::Call => 0,
            Operation::DelegateCall => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SafeSignature {
    pub signer: Address,
    /// 65 bytes, `r || s || v` with `v` in `{27, 28}`.
    pub signature: Bytes,
}

impl SafeSignature {
    pub fn to_hex(&self) -> String {
        patchwork_utils::hex_func::hex_encode_prefixed(&self.signature)
    }
}

pub struct ChainPrivateKey(String);

impl std::ops::Deref for ChainPrivateKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for ChainPrivateKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChainPrivateKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for ChainPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChainPrivateKey(..)")
    }
}
