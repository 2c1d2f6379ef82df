use crate::codec::{bytes_to_hex, Text};
use crate::error::{BytecastError, Result};
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Symbols of the default sample charset (92 printable ASCII characters)
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_-+=[]{}|;:,.<>?/~` ";

const ALPHANUMERIC_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fill `n` bytes from the operating system CSPRNG
/// Fails instead of falling back to a weaker source
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>> {
    fill_secure(&mut OsRng, n)
}

fn fill_secure<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; n];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| BytecastError::EntropySource(e.to_string()))?;
    tracing::debug!(bytes = n, "generated secure random bytes");
    Ok(bytes)
}

/// `n` secure random bytes, hex encoded (`2 * n` characters)
pub fn generate_random_hex(n: usize) -> Result<String> {
    generate_random_bytes(n).map(|bytes| bytes_to_hex(&bytes))
}

/// Printable ASCII characters eligible for random text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
}

impl Charset {
    /// Build a charset from printable ASCII (space included)
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(BytecastError::InvalidCharset("charset is empty".into()));
        }
        if let Some(c) = symbols.chars().find(|c| !(c.is_ascii_graphic() || *c == ' ')) {
            return Err(BytecastError::InvalidCharset(format!(
                "{:?} is not printable ASCII",
                c
            )));
        }
        Ok(Self {
            symbols: symbols.as_bytes().to_vec(),
        })
    }

    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC_CHARSET.as_bytes().to_vec(),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.symbols.contains(&byte)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_str(&self) -> &str {
        // Only printable ASCII gets in
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.as_bytes().to_vec(),
        }
    }
}

/// Non-cryptographic generator for sample text
///
/// Each instance owns its own seeded state; never use it where the output
/// has to be unpredictable (see [`generate_random_bytes`]).
///
/// Backed by `StdRng`, whose algorithm `rand` may change between releases:
/// a seed reproduces the same text only for the same locked `rand` version.
pub struct TextGenerator {
    rng: StdRng,
    seed: u64,
}

impl TextGenerator {
    /// Generator with an explicit seed, reproducible across runs
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "seeded text generator");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generator seeded from the current time in nanoseconds
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `length` characters, each drawn uniformly from `charset`
    pub fn generate(&mut self, length: usize, charset: &Charset) -> Text {
        let text: Vec<u8> = (0..length)
            .filter_map(|_| charset.symbols.choose(&mut self.rng).copied())
            .collect();
        Text::new(text)
    }

    /// Uniform draw from `range`
    pub fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        let bytes = generate_random_bytes(200).unwrap();
        assert_eq!(bytes.len(), 200);
        assert!(bytes.iter().any(|&b| b != 0));
        assert!(generate_random_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_random_bytes_differ() {
        let a = generate_random_bytes(32).unwrap();
        let b = generate_random_bytes(32).unwrap();
        assert_ne!(a, b);
    }

    struct DrainedSource;

    impl RngCore for DrainedSource {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy source drained")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("entropy source drained")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy source drained")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source drained"))
        }
    }

    impl CryptoRng for DrainedSource {}

    #[test]
    fn test_entropy_failure_is_an_error() {
        let result = fill_secure(&mut DrainedSource, 32);
        match result {
            Err(BytecastError::EntropySource(message)) => {
                assert!(message.contains("drained"));
            }
            other => panic!("expected entropy error, got {:?}", other),
        }
    }

    #[test]
    fn test_next_in_stays_in_range() {
        let mut generator = TextGenerator::new(5);
        for _ in 0..1000 {
            let value = generator.next_in(10..=20);
            assert!((10..=20).contains(&value));
        }
        assert_eq!(generator.next_in(7..=7), 7);
    }

    #[test]
    fn test_random_hex() {
        let hex = generate_random_hex(200).unwrap();
        assert_eq!(hex.len(), 400);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_text_length_and_charset() {
        let charset = Charset::default();
        let mut generator = TextGenerator::new(7);
        let text = generator.generate(200, &charset);
        assert_eq!(text.len(), 200);
        assert!(text.as_bytes().iter().all(|&b| charset.contains(b)));
    }

    #[test]
    fn test_zero_length() {
        let mut generator = TextGenerator::from_time();
        assert!(generator.generate(0, &Charset::default()).is_empty());
    }

    #[test]
    fn test_same_seed_same_text() {
        let charset = Charset::default();
        let a = TextGenerator::new(42).generate(64, &charset);
        let b = TextGenerator::new(42).generate(64, &charset);
        let c = TextGenerator::new(43).generate(64, &charset);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_single_symbol_charset() {
        let charset = Charset::new("x").unwrap();
        let text = TextGenerator::new(1).generate(10, &charset);
        assert_eq!(text, "xxxxxxxxxx");
    }

    #[test]
    fn test_charset_validation() {
        assert!(matches!(
            Charset::new(""),
            Err(BytecastError::InvalidCharset(_))
        ));
        assert!(Charset::new("ab\n").is_err());
        assert!(Charset::new("héllo").is_err());
        assert_eq!(Charset::new("abc ").unwrap().len(), 4);
    }

    #[test]
    fn test_default_charset() {
        let charset = Charset::default();
        assert_eq!(charset.len(), 92);
        assert!(charset.contains(b' '));
        assert!(charset.contains(b'`'));
        assert!(!charset.contains(b'"'));
        assert_eq!(charset.as_str(), DEFAULT_CHARSET);
        assert_eq!(Charset::alphanumeric().len(), 62);
    }
}
