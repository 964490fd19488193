// cartridge header parsing (0x00..0xBE)
use std::fmt;

use log::trace;

use super::{
    logo::NINTENDO_LOGO, CHECKSUM_OFFSET, GAME_CODE_START, LOGO_END, LOGO_START,
    MAKER_CODE_END, MAKER_CODE_START, MIN_IMAGE_LEN, TITLE_START,
};

const UNKNOWN_TITLE: &str = "Unknown";
const UNKNOWN_GAME_CODE: &str = "????";
const UNKNOWN_MAKER_CODE: &str = "00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The image ends before the checksum byte.
    TooShort { len: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => write!(
                f,
                "ROM is too small: {} bytes, header needs at least {}",
                len, MIN_IMAGE_LEN
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Snapshot of the identifying fields and integrity markers of one image.
///
/// Always recomputed from the bytes; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub game_code: String,
    pub maker_code: String,
    pub logo_valid: bool,
    pub stored_checksum: u8,
    pub expected_checksum: u8,
}

impl HeaderInfo {
    pub fn checksum_valid(&self) -> bool {
        self.stored_checksum == self.expected_checksum
    }

    /// A fix only makes sense when one of the two markers is off.
    pub fn needs_repair(&self) -> bool {
        !self.checksum_valid() || !self.logo_valid
    }
}

impl fmt::Display for HeaderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Title:     {}", self.title.escape_default())?;
        writeln!(f, "Game Code:      {}", self.game_code.escape_default())?;
        writeln!(f, "Maker:          {}", self.maker_code.escape_default())?;
        writeln!(f, "Nintendo Logo:  {}", status(self.logo_valid))?;
        write!(
            f,
            "Checksum:       0x{:02X} {}",
            self.stored_checksum,
            status(self.checksum_valid())
        )?;
        if !self.checksum_valid() {
            write!(f, " (expected 0x{:02X})", self.expected_checksum)?;
        }
        Ok(())
    }
}

fn status(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "BAD"
    }
}

/// Reads the header of `image`. Only the length is checked; malformed text
/// fields fall back to placeholders so the markers can always be inspected.
pub fn parse(image: &[u8]) -> Result<HeaderInfo, ParseError> {
    if image.len() < MIN_IMAGE_LEN {
        return Err(ParseError::TooShort { len: image.len() });
    }

    let title = decode_ascii(&image[TITLE_START..GAME_CODE_START])
        .map(|s| {
            s.trim_matches(|c: char| c.is_control())
                .trim_matches([' ', '\t'])
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let game_code = decode_ascii(&image[GAME_CODE_START..MAKER_CODE_START])
        .unwrap_or_else(|| UNKNOWN_GAME_CODE.to_string());

    let maker_code = decode_ascii(&image[MAKER_CODE_START..MAKER_CODE_END])
        .unwrap_or_else(|| UNKNOWN_MAKER_CODE.to_string());

    let info = HeaderInfo {
        title,
        game_code,
        maker_code,
        logo_valid: image[LOGO_START..LOGO_END] == NINTENDO_LOGO,
        stored_checksum: image[CHECKSUM_OFFSET],
        expected_checksum: checksum(&image[TITLE_START..CHECKSUM_OFFSET]),
    };
    trace!("parsed header: {:?}", info);
    Ok(info)
}

/// Complement check over the 29 bytes at 0xA0..0xBD: `-(sum + 0x19)`,
/// truncated to the low byte. Only the low byte of the sum matters, so it is
/// accumulated modulo 256.
pub fn checksum(window: &[u8]) -> u8 {
    window
        .iter()
        .fold(0u8, |sum, &b| sum.wrapping_add(b))
        .wrapping_add(0x19)
        .wrapping_neg()
}

fn decode_ascii(bytes: &[u8]) -> Option<String> {
    if !bytes.is_ascii() {
        return None;
    }
    std::str::from_utf8(bytes).ok().map(str::to_string)
}
