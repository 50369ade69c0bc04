use crate::error::parse::ParseError;

pub fn hex_decode(hex_str: &str) -> Result<Vec<u8>, crate::Error> {
    let input = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    hex::decode(input).map_err(|e| {
        crate::Error::Parse(ParseError::FromHex(format!(
            "hex decode error: {e} value = {hex_str}"
        )))
    })
}

pub fn hex_encode<T: AsRef<[u8]>>(data: T) -> String {
    hex::encode(data)
}

pub fn hex_encode_prefixed<T: AsRef<[u8]>>(data: T) -> String {
    format!("0x{}", hex::encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_decode_strips_prefix() {
        assert_eq!(hex_decode("0x00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(hex_decode("00ff").unwrap(), vec![0x00, 0xff]);
        assert!(hex_decode("0xzz").is_err());
    }

    #[test]
    fn test_hex_encode_prefixed() {
        assert_eq!(hex_encode_prefixed([0xde, 0xad]), "0xdead");
        assert_eq!(hex_encode([0xde, 0xad]), "dead");
    }
}
