//! Proprietary envelope message (4062).
use crate::{bits::BitCursor, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque vendor payload tunneled through an RTCM stream.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proprietary {
    /// Vendor specific inner message type
    pub msg_type: u16,
    /// Sender id
    pub sender_id: u16,
    /// Inner payload, copied verbatim
    pub data: Vec<u8>,
}

impl Proprietary {
    /// Decodes a message 4062 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 4062 {
            return Err(Error::MessageTypeMismatch);
        }

        // reserved for future format revisions: anything non zero is a
        // layout this decoder does not know
        if cursor.read_u32(4)? != 0 {
            return Err(Error::InvalidMessage);
        }

        let msg_type = cursor.read_u32(16)? as u16;
        let sender_id = cursor.read_u32(16)? as u16;
        let len = cursor.read_u32(8)? as usize;
        let data = cursor.read_bytes(len)?;
        Ok(Self {
            msg_type,
            sender_id,
            data,
        })
    }
}
