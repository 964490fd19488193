pub mod rom;

// Re-export commonly used types
pub use rom::{Cartridge, HeaderInfo, ParseError};
