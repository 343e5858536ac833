//! Cryptographic utilities for API signing

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{CcxtError, CcxtResult};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 서명 생성
pub fn hmac_sha256(secret: &str, message: &str) -> CcxtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        CcxtError::AuthenticationError {
            message: format!("invalid HMAC key: {e}"),
        }
    })?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HMAC-SHA256 서명을 hex 문자열로 반환 (소문자)
pub fn hmac_sha256_hex(secret: &str, message: &str) -> CcxtResult<String> {
    hmac_sha256(secret, message).map(hex::encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_hex() {
        // RFC 4231 test case 2
        let sig = hmac_sha256_hex("Jefe", "what do ya want for nothing?").unwrap();
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_empty_key_is_accepted() {
        assert_eq!(hmac_sha256("", "payload").unwrap().len(), 32);
    }
}
