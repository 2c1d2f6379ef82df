use crate::codec::{encode, Format};
use crate::error::Result;
use crate::random::{generate_random_bytes, Charset, TextGenerator};

/// Secure random bytes, rendered in `format`
pub fn random_bytes_output(count: usize, format: Format) -> Result<String> {
    let bytes = generate_random_bytes(count)?;
    Ok(encode(&bytes, format))
}

/// Charset from the command line: explicit symbols, the alphanumeric preset,
/// or the default sample charset
pub fn select_charset(symbols: Option<&str>, alphanumeric: bool) -> Result<Charset> {
    match (symbols, alphanumeric) {
        (Some(symbols), _) => Charset::new(symbols),
        (None, true) => Ok(Charset::alphanumeric()),
        (None, false) => Ok(Charset::default()),
    }
}

/// Printable random text drawn from `charset`
pub fn random_text_output(length: usize, seed: Option<u64>, charset: &Charset) -> Result<String> {
    let mut generator = match seed {
        Some(seed) => TextGenerator::new(seed),
        None => TextGenerator::from_time(),
    };
    Ok(generator.generate(length, charset).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_output() {
        assert_eq!(random_bytes_output(200, Format::Hex).unwrap().len(), 400);
        assert_eq!(random_bytes_output(200, Format::Base64).unwrap().len(), 268);
    }

    #[test]
    fn test_random_text_output() {
        let charset = select_charset(Some("01"), false).unwrap();
        let text = random_text_output(50, Some(3), &charset).unwrap();
        assert_eq!(text.len(), 50);
        assert!(text.chars().all(|c| c == '0' || c == '1'));

        let charset = Charset::default();
        assert_eq!(
            random_text_output(20, Some(3), &charset).unwrap(),
            random_text_output(20, Some(3), &charset).unwrap()
        );
    }

    #[test]
    fn test_alphanumeric_preset() {
        let charset = select_charset(None, true).unwrap();
        assert_eq!(charset.len(), 62);
        let text = random_text_output(300, Some(8), &charset).unwrap();
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));

        assert_eq!(select_charset(None, false).unwrap(), Charset::default());
    }

    #[test]
    fn test_bad_charset_rejected() {
        assert!(select_charset(Some(""), false).is_err());
        assert!(select_charset(Some("tab\t"), true).is_err());
    }
}
