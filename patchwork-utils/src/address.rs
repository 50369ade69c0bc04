use crate::error::parse::ParseError;
use alloy::primitives;
use std::str::FromStr;

pub fn parse_eth_address(address: &str) -> Result<primitives::Address, crate::Error> {
    primitives::Address::from_str(address.trim()).map_err(|e| {
        crate::Error::Parse(ParseError::AddressConvertFailed(format!(
            "to_eth_address err:{}:address = {}",
            e, address
        )))
    })
}

pub fn parse_b256(hash: &str) -> Result<primitives::B256, crate::Error> {
    primitives::B256::from_str(hash.trim()).map_err(|e| {
        crate::Error::Parse(ParseError::HashConvertFailed(format!(
            "to_b256 err:{}:hash = {}",
            e, hash
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eth_address() {
        let addr = parse_eth_address("0x3EC161C02Cd5a49EE8657947DC99DA58D1259aA1").unwrap();
        assert_eq!(
            addr.to_string(),
            "0x3EC161C02Cd5a49EE8657947DC99DA58D1259aA1"
        );

        assert!(parse_eth_address("not an address").is_err());
    }

    #[test]
    fn test_parse_b256() {
        let hash =
            parse_b256("0x069cce46b57b652b1d04ca2d74abe86b605d9d737879b138b631c43e3cb54328");
        assert!(hash.is_ok());
        assert!(parse_b256("0x1234").is_err());
    }
}
