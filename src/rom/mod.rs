// GBA cartridge header: parse, validate, repair
mod cart;
mod header;
mod logo;
mod repair;

pub use cart::Cartridge;
pub use header::{checksum, parse, HeaderInfo, ParseError};
pub use logo::NINTENDO_LOGO;
pub use repair::{repair, repair_in_place};

// Header layout (offsets into the ROM image)
pub const LOGO_START: usize = 0x04;
pub const LOGO_END: usize = 0xA0; // exclusive
pub const TITLE_START: usize = 0xA0;
pub const GAME_CODE_START: usize = 0xAC;
pub const MAKER_CODE_START: usize = 0xB0;
pub const MAKER_CODE_END: usize = 0xB2; // exclusive
pub const CHECKSUM_OFFSET: usize = 0xBD;

/// Smallest image that still holds every field up to the checksum byte.
pub const MIN_IMAGE_LEN: usize = CHECKSUM_OFFSET + 1;
