//! Bytecast - reversible byte encodings with digest-checked round-trips
//!
//! Bytes are the pivot representation; every other form converts through them:
//!
//! ```text
//! Text ⇄ Bytes ⇄ Hex String
//!          ⇅
//!     Base64 String
//! ```
//!
//! - **Hex**: lowercase, two characters per byte, no prefix or separators
//! - **Base64**: RFC 4648 standard alphabet, `=` padded
//! - **Text**: raw bytes read as characters, never validated
//!
//! Decoding is all-or-nothing: malformed input yields an error and no bytes.
//! Round-trips are checked by comparing SHA-256 digests of both ends.
//!
//! Randomness comes from two deliberately separate sources: the OS CSPRNG for
//! byte material ([`random::generate_random_bytes`]) and a seeded, non-secure
//! [`random::TextGenerator`] for sample text.
//!
//! ## Example
//!
//! ```
//! use bytecast::codec::{hex_to_text, text_to_base64, text_to_hex, Text};
//!
//! let text = Text::from("Hello, World!");
//! assert_eq!(text_to_hex(&text), "48656c6c6f2c20576f726c6421");
//! assert_eq!(text_to_base64(&text), "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(hex_to_text("48656c6c6f2c20576f726c6421").unwrap(), text);
//! assert!(hex_to_text("abc").is_err());
//! ```

pub mod cli;
pub mod codec;
pub mod codepoint;
pub mod digest;
pub mod error;
pub mod integrity;
pub mod random;
pub mod sample;

pub use crate::codec::{Format, Text};
pub use crate::digest::{Digest, DigestAlgorithm};
pub use crate::error::{BytecastError, Result};
pub use crate::integrity::{verify_round_trip, RoundTripReport};
