//! Base64 helpers for hash segments
//!
//! Encoded hashes carry their binary segments in standard-alphabet base64
//! with the padding stripped. Decoding accepts either padded or unpadded
//! input, so hashes written by older encoders keep decoding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::shared::error::{HashError, HashResult};

const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as an unpadded base64 segment
pub fn encode(bytes: &[u8]) -> String {
    SEGMENT_ENGINE.encode(bytes)
}

/// Decode a base64 segment, padded or not
pub fn decode(segment: &str) -> HashResult<Vec<u8>> {
    SEGMENT_ENGINE
        .decode(segment)
        .map_err(|e| HashError::invalid_hash_format(format!("invalid base64 segment: {}", e)))
}
