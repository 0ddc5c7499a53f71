//! Hash related utils.

use std::io;
use std::io::Read;

use hmac::Hmac;
use hmac::Mac;
use sha2::Digest;
use sha2::Sha256;

use crate::Error;

/// Hex encoded SHA256 hash.
///
/// Use this function instead of `hex::encode(sha256(content))` can reduce
/// extra copy.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// Hex encoded SHA256 hash of a reader, computed incrementally.
///
/// Large payloads don't need to be buffered in memory to be signed: hash
/// them here and hand the result to the signer as a pre-computed hash.
pub fn hex_sha256_read(mut r: impl Read) -> crate::Result<String> {
    let mut h = Sha256::new();
    io::copy(&mut r, &mut h)
        .map_err(|e| Error::payload_unavailable("failed to read payload").with_source(e))?;
    Ok(hex::encode(h.finalize().as_slice()))
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::constants::EMPTY_PAYLOAD_SHA256;

    #[test]
    fn test_hex_sha256_of_empty_input_matches_constant() {
        assert_eq!(hex_sha256(b""), EMPTY_PAYLOAD_SHA256);
    }

    #[test]
    fn test_hex_sha256_matches_published_vector() {
        // Body of the PUT Object example in the SigV4 test suite.
        assert_eq!(
            hex_sha256(b"Welcome to Amazon S3."),
            "44ce7dd67c959e0d3524ffac1771dfbba87d2b6b4b4e99e42034a8b803f8b072"
        );
    }

    #[test]
    fn test_hex_sha256_read_matches_buffered_hash() {
        let content = b"projects/acme/p1/photos/42.jpg".repeat(1024);

        let streamed = hex_sha256_read(Cursor::new(&content)).expect("read must succeed");
        assert_eq!(streamed, hex_sha256(&content));
    }

    #[test]
    fn test_hmac_sha256_digest_is_32_bytes() {
        assert_eq!(hmac_sha256(b"key", b"content").len(), 32);
    }

    #[test]
    fn test_hex_hmac_sha256_matches_known_vector() {
        assert_eq!(
            hex_hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog"),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }
}
