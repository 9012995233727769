//! Block hashing codec
//!
//! Serializes a block's provisional content into bytes and digests them.
//!
//! ## Byte Layout
//!
//! ```text
//! previous_hash ++ decimal(nonce) ++ json({"transactions":[...],"number":N})
//! ```
//!
//! The JSON part is compact `serde_json` output. Transaction fields appear in
//! the order `amount`, `sender`, `recipient`, `transactionId`, which is the
//! declaration order in `shared_types::Transaction`.

use sha2::{Digest, Sha256};
use shared_types::{BlockContent, BlockHash};
use thiserror::Error;

/// Errors produced while encoding block content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Content could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Encode block content as canonical JSON.
pub fn encode_content(content: &BlockContent) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(content).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Serialize `(previous_hash, content, nonce)` into the hashed byte string.
pub fn serialize(
    previous_hash: &str,
    content: &BlockContent,
    nonce: u64,
) -> Result<Vec<u8>, CodecError> {
    let encoded = encode_content(content)?;
    Ok(serialize_encoded(previous_hash, &encoded, nonce))
}

/// Same as [`serialize`] with the content already encoded.
///
/// The miner encodes content once and calls this for every nonce.
pub fn serialize_encoded(previous_hash: &str, encoded_content: &[u8], nonce: u64) -> Vec<u8> {
    let nonce = nonce.to_string();
    let mut bytes = Vec::with_capacity(previous_hash.len() + nonce.len() + encoded_content.len());
    bytes.extend_from_slice(previous_hash.as_bytes());
    bytes.extend_from_slice(nonce.as_bytes());
    bytes.extend_from_slice(encoded_content);
    bytes
}

/// Compute SHA-256 of data, rendered as lowercase hex.
#[inline]
pub fn digest(data: &[u8]) -> BlockHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the block hash for `(previous_hash, content, nonce)`.
pub fn hash_block(
    previous_hash: &str,
    content: &BlockContent,
    nonce: u64,
) -> Result<BlockHash, CodecError> {
    Ok(digest(&serialize(previous_hash, content, nonce)?))
}
