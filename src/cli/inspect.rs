use crate::codepoint::{codepoint_window, parse_codepoint, CodepointInfo, RANDOM_FIRST, RANDOM_LAST};
use crate::error::{BytecastError, Result};
use crate::random::TextGenerator;

fn separator() -> String {
    format!("{}\n", "-".repeat(50))
}

/// Describe every character of `text`
pub fn inspect_text(text: &str) -> String {
    let separator = separator();
    text.chars()
        .map(|ch| format!("{}{}", CodepointInfo::of(ch), separator))
        .collect()
}

/// Describe the character at a hex code point
pub fn inspect_codepoint(codepoint: &str) -> Result<String> {
    let ch = parse_codepoint(codepoint)?;
    Ok(inspect_text(&ch.to_string()))
}

/// Describe `window` consecutive code points from a random start
/// Surrogates in the window are skipped
pub fn inspect_random(window: u32, seed: Option<u64>) -> Result<String> {
    if window == 0 || window > RANDOM_LAST - RANDOM_FIRST {
        return Err(BytecastError::InvalidCodepoint(format!(
            "window of {} code points does not fit {}..={}",
            window, RANDOM_FIRST, RANDOM_LAST
        )));
    }
    let mut generator = match seed {
        Some(seed) => TextGenerator::new(seed),
        None => TextGenerator::from_time(),
    };
    let start = generator.next_in(RANDOM_FIRST..=RANDOM_LAST - window);

    let separator = separator();
    let mut output = format!("Seed: {}\n", generator.seed());
    for info in codepoint_window(start, window) {
        output.push_str(&format!("{}{}", info, separator));
    }
    Ok(output)
}
