use crate::error::sign_err::SignError;
use alloy::primitives::{keccak256, Address};
use libsecp256k1::{Message, PublicKey, RecoveryId, SecretKey, Signature};

fn parse_digest(digest: &[u8]) -> Result<Message, SignError> {
    Message::parse_slice(digest).map_err(|e| SignError::Message(e.to_string()))
}

fn parse_key(private_key: &str) -> Result<SecretKey, SignError> {
    let input = private_key.strip_prefix("0x").unwrap_or(private_key);
    let bytes = hex::decode(input).map_err(|e| SignError::KeyError(e.to_string()))?;
    SecretKey::parse_slice(&bytes).map_err(|e| SignError::KeyError(e.to_string()))
}

fn public_key_to_address(public_key: &PublicKey) -> Address {
    // uncompressed key is 0x04 || x || y; the address is the low 20 bytes
    // of keccak256(x || y)
    let bytes = public_key.serialize();
    let hash = keccak256(&bytes[1..]);
    Address::from_slice(&hash[12..])
}

/// Sign a 32-byte digest, returning `r || s || v` with `v` in `{27, 28}`.
pub fn sign_digest(digest: &[u8], private_key: &str) -> Result<[u8; 65], crate::Error> {
    let message = parse_digest(digest)?;
    let key = parse_key(private_key)?;

    let (signature, recovery_id) = libsecp256k1::sign(&message, &key);

    let mut full_signature = [0u8; 65];
    full_signature[..64].copy_from_slice(&signature.serialize());
    let id: u8 = recovery_id.into();
    full_signature[64] = id + 27;

    Ok(full_signature)
}

/// Recover the signer address from a digest and a 65-byte `r || s || v`
/// signature produced by [`sign_digest`].
pub fn recover_address(digest: &[u8], signature: &[u8]) -> Result<Address, crate::Error> {
    if signature.len() != 65 {
        return Err(SignError::Recovery(format!(
            "expected 65 byte signature, got {}",
            signature.len()
        ))
        .into());
    }
    let v = signature[64]
        .checked_sub(27)
        .ok_or_else(|| SignError::Recovery(format!("invalid v byte {}", signature[64])))?;
    let recovery_id = RecoveryId::parse(v).map_err(|e| SignError::Recovery(e.to_string()))?;

    let message = parse_digest(digest)?;
    let sig = Signature::parse_standard_slice(&signature[..64])
        .map_err(|e| SignError::Recovery(e.to_string()))?;

    let public_key = libsecp256k1::recover(&message, &sig, &recovery_id)
        .map_err(|e| SignError::Recovery(e.to_string()))?;

    Ok(public_key_to_address(&public_key))
}

pub fn address_from_private_key(private_key: &str) -> Result<Address, crate::Error> {
    let key = parse_key(private_key)?;
    let public_key = PublicKey::from_secret_key(&key);
    Ok(public_key_to_address(&public_key))
}
