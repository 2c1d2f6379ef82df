use crate::codec::Format;
use crate::digest::DigestAlgorithm;
use crate::error::Result;
use crate::integrity::{verify_file, RoundTripReport};
use std::path::Path;

/// Options for the verify command
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    pub format: Format,
    pub algorithm: DigestAlgorithm,
    /// Render the report as JSON
    pub json: bool,
}

/// Round-trip a file through `format` and report both digests
/// Fails when the digests differ
pub fn verify_sample(path: &Path, options: &VerifyOptions) -> Result<String> {
    let report = verify_file(path, options.format, options.algorithm)?;
    report.ensure_match()?;

    if options.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }
    Ok(render_report(path, &report))
}

fn render_report(path: &Path, report: &RoundTripReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Format: {}\n", report.format));
    output.push_str(&format!("Size: {} bytes\n", report.original_len));
    output.push_str(&format!("Encoded size: {} chars\n", report.encoded_len));
    output.push_str(&format!(
        "{} hash of file contents: {}\n",
        report.algorithm, report.original_digest
    ));
    output.push_str(&format!(
        "{} hash of recovered bytes: {}\n",
        report.algorithm, report.recovered_digest
    ));
    output.push_str("Hashes [match]\n");
    output
}
