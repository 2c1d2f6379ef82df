use crate::codec::{
    base64_to_bytes, base64_to_text, bytes_to_base64, bytes_to_hex, bytes_to_text, hex_to_bytes,
    hex_to_text, text_to_base64, text_to_bytes, text_to_hex, Format, Text,
};
use crate::digest::{Digest, DigestAlgorithm};
use crate::error::{BytecastError, Result};
use crate::integrity::verify_round_trip;
use crate::random::{generate_random_hex, Charset, TextGenerator};
use crate::sample::{read_sample, write_sample, DEFAULT_SAMPLE_DIR, DEFAULT_SAMPLE_FILE};
use std::path::PathBuf;

/// Options for the demo command
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Directory receiving the sample file
    pub dir: PathBuf,
    /// Text used for the fixed conversions
    pub message: String,
    /// Secure random bytes to round-trip
    pub random_bytes: usize,
    /// Length of the generated sample text
    pub text_length: usize,
    /// Seed for the sample text; time-seeded when absent
    pub seed: Option<u64>,
    pub algorithm: DigestAlgorithm,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_SAMPLE_DIR),
            message: "Hello, World!".into(),
            random_bytes: 200,
            text_length: 200,
            seed: None,
            algorithm: DigestAlgorithm::default(),
        }
    }
}

/// Run every conversion once and check the sample file round-trip
/// Returns the printable transcript; a digest mismatch is an error
pub fn run_demo(options: &DemoOptions) -> Result<String> {
    let mut output = String::new();
    let message = Text::from(options.message.as_str());

    // Text <-> hex
    let hex_string = text_to_hex(&message);
    output.push_str(&format!("Text to Hex: {}\n", hex_string));
    output.push_str(&format!("Hex to Text: {}\n", hex_to_text(&hex_string)?));

    // Text <-> bytes
    let bytes_data = text_to_bytes(&message);
    output.push_str(&format!("Text to Bytes: {}\n", format_bytes(&bytes_data)));
    output.push_str(&format!("Bytes to Text: {}\n", bytes_to_text(&bytes_data)));

    // Secure random bytes <-> hex
    let random_hex = generate_random_hex(options.random_bytes)?;
    output.push_str(&format!("Generated Hex: {}\n", random_hex));
    let bytes_from_hex = hex_to_bytes(&random_hex)?;
    output.push_str(&format!("Hex to Bytes: {}\n", format_bytes(&bytes_from_hex)));
    output.push_str(&format!("Bytes to Hex: {}\n", bytes_to_hex(&bytes_from_hex)));
    for format in [Format::Hex, Format::Base64] {
        verify_round_trip(&bytes_from_hex, format, options.algorithm)?.ensure_match()?;
    }

    // Text <-> base64
    let base64_string = text_to_base64(&message);
    output.push_str(&format!("Text to Base64: {}\n", base64_string));
    output.push_str(&format!("Base64 to Text: {}\n", base64_to_text(&base64_string)?));

    // Bytes <-> base64
    let base64_from_bytes = bytes_to_base64(&bytes_data);
    output.push_str(&format!("Bytes to Base64: {}\n", base64_from_bytes));
    let recovered_bytes = base64_to_bytes(&base64_from_bytes)?;
    output.push_str(&format!("Base64 to Bytes: {}\n", format_bytes(&recovered_bytes)));

    // Sample file: write, read back, hex round-trip, compare digests
    let mut generator = match options.seed {
        Some(seed) => TextGenerator::new(seed),
        None => TextGenerator::from_time(),
    };
    let random_text = generator.generate(options.text_length, &Charset::default());
    let file_path = options.dir.join(DEFAULT_SAMPLE_FILE);
    write_sample(&file_path, random_text.as_bytes())?;

    let file_text = read_sample(&file_path)?;
    let file_bytes = text_to_bytes(&file_text);
    let file_hex = bytes_to_hex(&file_bytes);
    let recovered_text = hex_to_text(&file_hex)?;

    output.push_str(&format!("Original text: {}\n", file_text));
    output.push_str(&format!("Text bytes: {}\n", format_bytes(&file_bytes)));
    output.push_str(&format!("Hexadecimal string: {}\n", file_hex));
    output.push_str(&format!("Converted back to text: {}\n", recovered_text));

    let file_hash = Digest::compute(&file_bytes, options.algorithm);
    let recovered_hash = Digest::compute(recovered_text.as_bytes(), options.algorithm);
    output.push_str(&format!(
        "{} hash of file contents: {}\n",
        options.algorithm, file_hash
    ));
    output.push_str(&format!(
        "{} hash of recovered string: {}\n",
        options.algorithm, recovered_hash
    ));

    if file_hash != recovered_hash || file_bytes != random_text.as_bytes() {
        return Err(BytecastError::IntegrityMismatch {
            expected: file_hash.to_hex(),
            actual: recovered_hash.to_hex(),
        });
    }
    output.push_str("Hashes [match]\n");

    Ok(output)
}

/// `[72 101 108]` style byte listing
fn format_bytes(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(" "))
}
