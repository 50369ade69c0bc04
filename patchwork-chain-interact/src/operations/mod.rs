use alloy::primitives::{Address, U256};

mod banker;
pub use banker::*;
mod fee;
pub use fee::*;
mod withdraw;
pub use withdraw::*;

use crate::errors::EncodeError;
use crate::types::EncodedCall;

/// A governance command as the form layer delivers it: a function name and
/// its arguments as ordered strings. Validated against the contract ABI
/// before anything touches the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSpec {
    pub function: String,
    pub args: Vec<String>,
}

impl CallSpec {
    pub fn new(function: &str, args: Vec<String>) -> Self {
        Self {
            function: function.to_string(),
            args,
        }
    }
}

fn expect_args(spec: &CallSpec, expected: usize) -> Result<(), EncodeError> {
    if spec.args.len() != expected {
        return Err(EncodeError::ArityMismatch {
            expected,
            got: spec.args.len(),
        });
    }
    Ok(())
}

fn u256_arg(spec: &CallSpec, index: usize) -> Result<U256, EncodeError> {
    let value = &spec.args[index];
    patchwork_utils::unit::u256_from_str(value).map_err(|_| EncodeError::TypeMismatch {
        index,
        expected: "uint256",
        value: value.clone(),
    })
}

fn address_arg(spec: &CallSpec, index: usize) -> Result<Address, EncodeError> {
    let value = &spec.args[index];
    patchwork_utils::address::parse_eth_address(value).map_err(|_| EncodeError::TypeMismatch {
        index,
        expected: "address",
        value: value.clone(),
    })
}

/// Encode a command against the protocol contract. Arity and argument
/// types are checked first so a bad form submission fails before any
/// network round trip.
pub fn encode_command(contract: Address, spec: &CallSpec) -> Result<EncodedCall, EncodeError> {
    match spec.function.as_str() {
        "proposeProtocolFeeConfig" => {
            expect_args(spec, 3)?;
            let opt = ProtocolFeeOpt::new(
                contract,
                u256_arg(spec, 0)?,
                u256_arg(spec, 1)?,
                u256_arg(spec, 2)?,
            );
            Ok(opt.build_call())
        }
        "addBanker" => {
            expect_args(spec, 1)?;
            Ok(AddBankerOpt::new(contract, address_arg(spec, 0)?).build_call())
        }
        "removeBanker" => {
            expect_args(spec, 1)?;
            Ok(RemoveBankerOpt::new(contract, address_arg(spec, 0)?).build_call())
        }
        "withdraw" => {
            expect_args(spec, 2)?;
            Ok(WithdrawOpt::new(contract, &spec.args[0], u256_arg(spec, 1)?).build_call())
        }
        other => Err(EncodeError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::contract;
    use alloy::primitives::{address, U256};
    use alloy::sol_types::SolCall;

    fn patchwork() -> Address {
        address!("00000000001616e65bb9fda42dfbb7155406549b")
    }

    #[test]
    fn test_encode_is_deterministic() {
        let spec = CallSpec::new(
            "proposeProtocolFeeConfig",
            vec!["500".into(), "250".into(), "100".into()],
        );

        let a = encode_command(patchwork(), &spec).unwrap();
        let b = encode_command(patchwork(), &spec).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value, U256::ZERO);
        assert_eq!(a.to, patchwork());
    }

    #[test]
    fn test_fee_config_field_order() {
        let spec = CallSpec::new(
            "proposeProtocolFeeConfig",
            vec!["500".into(), "250".into(), "100".into()],
        );
        let call = encode_command(patchwork(), &spec).unwrap();

        let decoded = contract::proposeProtocolFeeConfigCall::abi_decode(&call.data, true).unwrap();
        assert_eq!(decoded.config.mintBp, U256::from(500));
        assert_eq!(decoded.config.patchBp, U256::from(250));
        assert_eq!(decoded.config.assignBp, U256::from(100));

        // static struct encodes inline: selector then one word per field,
        // in declared order
        assert_eq!(call.data.len(), 4 + 3 * 32);
        assert_eq!(U256::from_be_slice(&call.data[4..36]), U256::from(500));
        assert_eq!(U256::from_be_slice(&call.data[36..68]), U256::from(250));
        assert_eq!(U256::from_be_slice(&call.data[68..100]), U256::from(100));
    }

    #[test]
    fn test_arity_mismatch() {
        let spec = CallSpec::new("proposeProtocolFeeConfig", vec!["500".into(), "250".into()]);

        match encode_command(patchwork(), &spec) {
            Err(EncodeError::ArityMismatch { expected, got }) => {
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected arity mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch() {
        let spec = CallSpec::new(
            "proposeProtocolFeeConfig",
            vec!["500".into(), "a lot".into(), "100".into()],
        );

        match encode_command(patchwork(), &spec) {
            Err(EncodeError::TypeMismatch { index, expected, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, "uint256");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }

        let spec = CallSpec::new("addBanker", vec!["not-an-address".into()]);
        assert!(matches!(
            encode_command(patchwork(), &spec),
            Err(EncodeError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let spec = CallSpec::new("mintTokens", vec![]);
        assert!(matches!(
            encode_command(patchwork(), &spec),
            Err(EncodeError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_banker_round_trip() {
        let banker = address!("3EC161C02Cd5a49EE8657947DC99DA58D1259aA1");
        let call = AddBankerOpt::new(patchwork(), banker).build_call();
        let decoded = contract::addBankerCall::abi_decode(&call.data, true).unwrap();
        assert_eq!(decoded.addr, banker);

        let call = RemoveBankerOpt::new(patchwork(), banker).build_call();
        let decoded = contract::removeBankerCall::abi_decode(&call.data, true).unwrap();
        assert_eq!(decoded.addr, banker);
    }

    #[test]
    fn test_withdraw_round_trip() {
        let spec = CallSpec::new("withdraw", vec!["gallery".into(), "1000000".into()]);
        let call = encode_command(patchwork(), &spec).unwrap();

        let decoded = contract::withdrawCall::abi_decode(&call.data, true).unwrap();
        assert_eq!(decoded.scopeName, "gallery");
        assert_eq!(decoded.amount, U256::from(1_000_000u64));
    }
}
