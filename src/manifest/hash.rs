use sha2::{Digest, Sha256};

/// Hashes a document's canonical text into the lowercase hex SHA-256 digest of its UTF-8 bytes.
pub fn sha256_hex(text: &str) -> String {
    hex::encode(<Sha256 as Digest>::digest(text.as_bytes()))
}
