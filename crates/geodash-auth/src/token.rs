//! Opaque bearer session identifier generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Number of random bytes backing a session identifier.
const TOKEN_BYTES: usize = 32;

/// Generate a new opaque session identifier.
///
/// 256 bits of randomness, base64url-encoded without padding. The
/// identifier carries no claims; it is only meaningful as a lookup key
/// into the stored sessions table.
pub fn generate_token() -> String {
    let bytes = rand::random::<[u8; TOKEN_BYTES]>();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        // 32 bytes -> ceil(32 * 4 / 3) = 43 chars without padding
        assert_eq!(token.len(), 43);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
