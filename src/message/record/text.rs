//! Unicode text message (1029).
use crate::{bits::BitCursor, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free form UTF-8 text broadcast by the reference station.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextMessage {
    /// Reference station id
    pub station_id: u16,
    /// Modified Julian day the message refers to
    pub mjd: u16,
    /// UTC seconds of day
    pub utc_sec_of_day: u32,
    /// Number of Unicode characters the text represents. This may be
    /// lower than `utf8.len()` for multi byte sequences, and lower
    /// than the character count of a truncated text.
    pub unicode_chars: u8,
    /// Raw UTF-8 code units, copied verbatim and never validated
    pub utf8: Vec<u8>,
}

impl TextMessage {
    /// Decodes a message 1029 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1029 {
            return Err(Error::MessageTypeMismatch);
        }
        let station_id = cursor.read_u32(12)? as u16;
        let mjd = cursor.read_u32(16)? as u16;
        let utc_sec_of_day = cursor.read_u32(17)?;
        let unicode_chars = cursor.read_u32(7)? as u8;
        let code_units = cursor.read_u32(8)? as usize;
        let utf8 = cursor.read_bytes(code_units)?;
        Ok(Self {
            station_id,
            mjd,
            utc_sec_of_day,
            unicode_chars,
            utf8,
        })
    }
}
