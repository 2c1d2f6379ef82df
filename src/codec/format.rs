use super::base64_string::{base64_to_bytes, bytes_to_base64};
use super::hex_string::{bytes_to_hex, hex_to_bytes};
use crate::error::{BytecastError, Result};
use serde::Serialize;
use std::fmt;

/// String encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Hex,
    Base64,
}

impl std::str::FromStr for Format {
    type Err = BytecastError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            _ => Err(BytecastError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

/// Encode bytes using the specified format
pub fn encode(data: &[u8], format: Format) -> String {
    let encoded = match format {
        Format::Hex => bytes_to_hex(data),
        Format::Base64 => bytes_to_base64(data),
    };
    tracing::debug!(%format, bytes = data.len(), chars = encoded.len(), "encoded");
    encoded
}

/// Decode a string using the specified format
pub fn decode(encoded: &str, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Hex => hex_to_bytes(encoded),
        Format::Base64 => base64_to_bytes(encoded),
    }
}

/// Length of the encoding of `byte_len` input bytes
pub fn encoded_len(byte_len: usize, format: Format) -> usize {
    match format {
        Format::Hex => byte_len * 2,
        Format::Base64 => byte_len.div_ceil(3) * 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("hex".parse::<Format>().unwrap(), Format::Hex);
        assert_eq!("BASE64".parse::<Format>().unwrap(), Format::Base64);
        assert_eq!("b64".parse::<Format>().unwrap(), Format::Base64);
        assert!(matches!(
            "base32".parse::<Format>(),
            Err(BytecastError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for format in [Format::Hex, Format::Base64] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_encode_decode_dispatch() {
        let data = b"Hello, World!";
        assert_eq!(encode(data, Format::Hex), "48656c6c6f2c20576f726c6421");
        assert_eq!(encode(data, Format::Base64), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(decode("SGVsbG8sIFdvcmxkIQ==", Format::Base64).unwrap(), data);
        assert!(decode("SGVsbG8sIFdvcmxkIQ==", Format::Hex).is_err());
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0, Format::Hex), 0);
        assert_eq!(encoded_len(13, Format::Hex), 26);
        assert_eq!(encoded_len(0, Format::Base64), 0);
        assert_eq!(encoded_len(1, Format::Base64), 4);
        assert_eq!(encoded_len(13, Format::Base64), 20);
        assert_eq!(encoded_len(200, Format::Base64), 268);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Format::Base64).unwrap(), "\"base64\"");
    }
}
