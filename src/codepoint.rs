use crate::error::{BytecastError, Result};
use serde::Serialize;
use std::fmt;

/// Lowest code point a random window may start at
pub const RANDOM_FIRST: u32 = 1;
/// Highest code point a random window may reach
pub const RANDOM_LAST: u32 = 150_000;
/// Code points per random window
pub const DEFAULT_WINDOW: u32 = 5;

/// Encoded forms of a single character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodepointInfo {
    pub ch: char,
    pub utf8: Vec<u8>,
    pub utf16: Vec<u16>,
    pub utf32: u32,
}

impl CodepointInfo {
    pub fn of(ch: char) -> Self {
        let mut utf8 = [0u8; 4];
        let mut utf16 = [0u16; 2];
        Self {
            ch,
            utf8: ch.encode_utf8(&mut utf8).as_bytes().to_vec(),
            utf16: ch.encode_utf16(&mut utf16).to_vec(),
            utf32: ch as u32,
        }
    }

    /// `U+01E7` style label
    pub fn code_point(&self) -> String {
        format!("U+{:04X}", self.utf32)
    }

    /// Decimal numeric character reference, e.g. `&#487;`
    pub fn html_entity(&self) -> String {
        format!("&#{};", self.utf32)
    }
}

impl fmt::Display for CodepointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |parts: Vec<String>| parts.join(" ");
        writeln!(f, "Char       : {:?}", self.ch)?;
        writeln!(f, "Code Point : {}", self.code_point())?;
        writeln!(
            f,
            "UTF-8      : {}",
            join(self.utf8.iter().map(|b| format!("0x{:02X}", b)).collect())
        )?;
        writeln!(
            f,
            "UTF-16     : {}",
            join(self.utf16.iter().map(|u| format!("0x{:04X}", u)).collect())
        )?;
        writeln!(f, "UTF-32     : 0x{:08X}", self.utf32)?;
        writeln!(f, "HTML Entity: {}", self.html_entity())
    }
}

/// Parse a code point written in hex (`01e7`, `U+01E7`, `0x1e7`)
pub fn parse_codepoint(s: &str) -> Result<char> {
    let trimmed = s.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| BytecastError::InvalidCodepoint(s.to_string()))?;
    char::from_u32(value).ok_or_else(|| BytecastError::InvalidCodepoint(s.to_string()))
}

/// Consecutive code points from `start`; surrogates and values past
/// `char::MAX` are skipped, so fewer than `window` entries may come back
pub fn codepoint_window(start: u32, window: u32) -> Vec<CodepointInfo> {
    (start..start.saturating_add(window))
        .filter_map(char::from_u32)
        .map(CodepointInfo::of)
        .collect()
}
