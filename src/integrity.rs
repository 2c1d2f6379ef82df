//! Round-trip verification
//!
//! A byte sequence is pushed through an encode/decode chain and the two ends
//! are compared by digest:
//!
//! ```text
//! bytes → text → bytes → hex|base64 → bytes → text → bytes
//!   │                                                  │
//!   └── digest ────────────── == ──────────── digest ──┘
//! ```
//!
//! A mismatch is an error, never a warning to be ignored.

use crate::codec::{bytes_to_text, decode, encode, text_to_bytes, Format};
use crate::digest::{Digest, DigestAlgorithm};
use crate::error::{BytecastError, Result};
use crate::sample::read_sample;
use serde::Serialize;
use std::path::Path;

/// Outcome of one round-trip
#[derive(Debug, Clone, Serialize)]
pub struct RoundTripReport {
    pub format: Format,
    pub algorithm: DigestAlgorithm,
    pub original_len: usize,
    pub encoded_len: usize,
    pub original_digest: Digest,
    pub recovered_digest: Digest,
}

impl RoundTripReport {
    pub fn matched(&self) -> bool {
        self.original_digest == self.recovered_digest
    }

    /// Turn a digest mismatch into an error
    pub fn ensure_match(&self) -> Result<()> {
        if self.matched() {
            return Ok(());
        }
        tracing::warn!(
            expected = %self.original_digest,
            actual = %self.recovered_digest,
            "round-trip digest mismatch"
        );
        Err(BytecastError::IntegrityMismatch {
            expected: self.original_digest.to_hex(),
            actual: self.recovered_digest.to_hex(),
        })
    }
}

/// Encode `original` with `format`, decode it again and compare digests
pub fn verify_round_trip(
    original: &[u8],
    format: Format,
    algorithm: DigestAlgorithm,
) -> Result<RoundTripReport> {
    let text = bytes_to_text(original);
    let encoded = encode(&text_to_bytes(&text), format);
    let recovered = text_to_bytes(&bytes_to_text(&decode(&encoded, format)?));

    let report = RoundTripReport {
        format,
        algorithm,
        original_len: original.len(),
        encoded_len: encoded.len(),
        original_digest: Digest::compute(original, algorithm),
        recovered_digest: Digest::compute(&recovered, algorithm),
    };
    tracing::debug!(
        %format,
        %algorithm,
        matched = report.matched(),
        digest = %report.original_digest,
        "round-trip verified"
    );
    Ok(report)
}

/// Round-trip the contents of a file
pub fn verify_file(path: &Path, format: Format, algorithm: DigestAlgorithm) -> Result<RoundTripReport> {
    let contents = read_sample(path)?;
    verify_round_trip(contents.as_bytes(), format, algorithm)
}
