use super::text::Text;
use crate::error::Result;

/// Bytes to lowercase hex, two characters per byte
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Hex to bytes
/// Odd length or any non-hex character fails; nothing is returned on failure
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str)?;
    tracing::trace!(chars = hex_str.len(), bytes = bytes.len(), "decoded hex");
    Ok(bytes)
}

pub fn text_to_hex(text: &Text) -> String {
    bytes_to_hex(text.as_bytes())
}

pub fn hex_to_text(hex_str: &str) -> Result<Text> {
    hex_to_bytes(hex_str).map(Text::new)
}
