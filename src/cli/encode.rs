use crate::codec::{encode, Format};
use crate::error::Result;
use crate::sample::read_sample;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub format: Format,
}

/// Encode raw text or bytes
pub fn encode_input(input: &[u8], options: &EncodeOptions) -> String {
    encode(input, options.format)
}

/// Encode the verbatim contents of a file (any binary content)
pub fn encode_file(path: &Path, options: &EncodeOptions) -> Result<String> {
    let contents = read_sample(path)?;
    Ok(encode_input(contents.as_bytes(), options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_input() {
        let hex = encode_input(b"Hello, World!", &EncodeOptions::default());
        assert_eq!(hex, "48656c6c6f2c20576f726c6421");

        let options = EncodeOptions {
            format: Format::Base64,
        };
        assert_eq!(encode_input(b"Hello, World!", &options), "SGVsbG8sIFdvcmxkIQ==");
    }

    #[test]
    fn test_encode_binary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image.bin");
        std::fs::write(&path, [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();

        let options = EncodeOptions {
            format: Format::Base64,
        };
        assert_eq!(encode_file(&path, &options).unwrap(), "iVBORw0K");
    }
}
