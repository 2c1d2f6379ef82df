pub mod base64_string;
pub mod format;
pub mod hex_string;
pub mod text;

pub use base64_string::*;
pub use format::*;
pub use hex_string::*;
pub use text::*;
