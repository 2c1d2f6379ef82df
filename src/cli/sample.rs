use crate::digest::Digest;
use crate::error::Result;
use crate::random::{Charset, TextGenerator};
use crate::sample::{default_sample_path, write_sample};
use std::path::PathBuf;

/// Options for the sample command
#[derive(Debug, Clone)]
pub struct SampleOptions {
    pub path: PathBuf,
    pub length: usize,
    pub seed: Option<u64>,
    pub charset: Charset,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            path: default_sample_path(),
            length: 200,
            seed: None,
            charset: Charset::default(),
        }
    }
}

/// Write a file of random printable text
pub fn create_sample(options: &SampleOptions) -> Result<String> {
    let mut generator = match options.seed {
        Some(seed) => TextGenerator::new(seed),
        None => TextGenerator::from_time(),
    };
    let text = generator.generate(options.length, &options.charset);
    write_sample(&options.path, text.as_bytes())?;

    let mut output = String::new();
    output.push_str(&format!(
        "Wrote {} bytes to {}\n",
        text.len(),
        options.path.display()
    ));
    output.push_str(&format!("Seed: {}\n", generator.seed()));
    output.push_str(&format!("SHA-256: {}\n", Digest::sha256(text.as_bytes())));
    Ok(output)
}
