pub mod decode;
pub mod demo;
pub mod encode;
pub mod inspect;
pub mod random;
pub mod sample;
pub mod verify;

pub use decode::*;
pub use demo::*;
pub use encode::*;
pub use inspect::*;
pub use random::*;
pub use sample::*;
pub use verify::*;
