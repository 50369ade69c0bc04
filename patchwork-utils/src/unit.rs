use crate::error::parse;
use crate::error::Error;
use alloy::primitives::U256;
use std::str::FromStr;

/// Accepts both `0x`-prefixed hex words (as returned by `eth_call`) and
/// plain decimal strings.
pub fn u256_from_str(value: &str) -> Result<U256, crate::Error> {
    U256::from_str(value.trim()).map_err(|e| {
        Error::Parse(parse::ParseError::UnitConvertFailed(format!(
            "u256_from_str() value = {},error = {}",
            value, e
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_from_str() {
        assert_eq!(u256_from_str("500").unwrap(), U256::from(500u64));
        assert_eq!(
            u256_from_str("0x0000000000000000000000000000000000000000000000000000000000000005")
                .unwrap(),
            U256::from(5u64)
        );
        assert!(u256_from_str("nope").is_err());
    }
}
