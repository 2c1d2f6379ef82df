use super::text::Text;
use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::borrow::Cow;

/// Standard alphabet, canonical padding; non-zero bits in the last symbol are ignored
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Bytes to standard (RFC 4648, padded) base64
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD_LENIENT.encode(bytes)
}

/// Base64 to bytes
/// Embedded CR/LF are skipped. Rejects URL-safe symbols, missing or misplaced
/// padding and trailing garbage.
pub fn base64_to_bytes(b64_str: &str) -> Result<Vec<u8>> {
    let stripped = if b64_str.contains(['\r', '\n']) {
        Cow::Owned(b64_str.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(b64_str)
    };
    let bytes = STANDARD_LENIENT.decode(stripped.as_bytes())?;
    tracing::trace!(chars = b64_str.len(), bytes = bytes.len(), "decoded base64");
    Ok(bytes)
}

pub fn text_to_base64(text: &Text) -> String {
    bytes_to_base64(text.as_bytes())
}

pub fn base64_to_text(b64_str: &str) -> Result<Text> {
    base64_to_bytes(b64_str).map(Text::new)
}
