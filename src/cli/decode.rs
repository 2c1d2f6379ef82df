use crate::codec::{decode, Format};
use crate::error::Result;
use crate::sample::{read_sample, write_sample};
use std::path::{Path, PathBuf};

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub format: Format,
    /// Write the decoded bytes here instead of returning them
    pub output: Option<PathBuf>,
}

/// Decode a hex or base64 string
/// Returns the raw decoded bytes, or a confirmation line when writing to a file
pub fn decode_input(encoded: &str, options: &DecodeOptions) -> Result<Vec<u8>> {
    let bytes = decode(encoded, options.format)?;

    match &options.output {
        Some(path) => {
            write_sample(path, &bytes)?;
            Ok(format!("Wrote {} bytes to {}", bytes.len(), path.display()).into_bytes())
        }
        None => Ok(bytes),
    }
}

/// Decode the contents of a file, ignoring surrounding whitespace
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<Vec<u8>> {
    let contents = read_sample(path)?;
    let encoded = contents.to_string();
    decode_input(encoded.trim(), options)
}
