//! Antenna and receiver descriptor messages (1007, 1008 and 1033).
use crate::{bits::BitCursor, constants::MAX_STRING_LEN, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counted descriptor string: one 8 bit length, then that many 8 bit
/// characters. A counter above the format capacity rejects the message
/// before anything is copied.
fn decode_string(cursor: &mut BitCursor) -> Result<String, Error> {
    let counter = cursor.read_u32(8)? as usize;
    if counter > MAX_STRING_LEN as usize {
        return Err(Error::InvalidMessage);
    }
    let bytes = cursor.read_bytes(counter)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Antenna descriptor, message 1007.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AntennaDescriptor {
    /// Reference station id
    pub station_id: u16,
    /// IGS style antenna descriptor
    pub descriptor: String,
    /// Antenna setup id, 0 when irrelevant
    pub setup_id: u8,
}

impl AntennaDescriptor {
    /// Decodes a message 1007 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1007 {
            return Err(Error::MessageTypeMismatch);
        }
        Self::decode_body(&mut cursor)
    }

    fn decode_body(cursor: &mut BitCursor) -> Result<Self, Error> {
        let station_id = cursor.read_u32(12)? as u16;
        let descriptor = decode_string(cursor)?;
        let setup_id = cursor.read_u32(8)? as u8;
        Ok(Self {
            station_id,
            descriptor,
            setup_id,
        })
    }
}

/// Antenna descriptor and serial number, message 1008.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AntennaSerial {
    /// Antenna descriptor fields
    pub antenna: AntennaDescriptor,
    /// Antenna serial number
    pub serial: String,
}

impl AntennaSerial {
    /// Decodes a message 1008 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1008 {
            return Err(Error::MessageTypeMismatch);
        }
        let antenna = AntennaDescriptor::decode_body(&mut cursor)?;
        let serial = decode_string(&mut cursor)?;
        Ok(Self { antenna, serial })
    }
}

/// Receiver and antenna descriptors, message 1033.
///
/// Every descriptor the station chose not to fill is carried as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceiverAntennaDescriptor {
    /// Reference station id
    pub station_id: u16,
    /// IGS style antenna descriptor
    pub antenna_descriptor: String,
    /// Antenna setup id, 0 when irrelevant
    pub antenna_setup_id: u8,
    /// Antenna serial number
    pub antenna_serial: String,
    /// Receiver type descriptor
    pub receiver_descriptor: String,
    /// Receiver firmware version
    pub receiver_firmware: String,
    /// Receiver serial number
    pub receiver_serial: String,
}

impl ReceiverAntennaDescriptor {
    /// Decodes a message 1033 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1033 {
            return Err(Error::MessageTypeMismatch);
        }
        let station_id = cursor.read_u32(12)? as u16;
        let antenna_descriptor = decode_string(&mut cursor)?;
        let antenna_setup_id = cursor.read_u32(8)? as u8;
        let antenna_serial = decode_string(&mut cursor)?;
        let receiver_descriptor = decode_string(&mut cursor)?;
        let receiver_firmware = decode_string(&mut cursor)?;
        let receiver_serial = decode_string(&mut cursor)?;
        Ok(Self {
            station_id,
            antenna_descriptor,
            antenna_setup_id,
            antenna_serial,
            receiver_descriptor,
            receiver_firmware,
            receiver_serial,
        })
    }
}

#[cfg(test)]
mod test {
    use super::decode_string;
    use crate::{bits::BitCursor, Error};

    #[test]
    fn counted_strings() {
        let buf = [0x03, b'A', b'D', b'V', 0x00];
        let mut cursor = BitCursor::new(&buf);
        assert_eq!(decode_string(&mut cursor).unwrap(), "ADV");
        // empty string
        assert_eq!(decode_string(&mut cursor).unwrap(), "");
    }

    #[test]
    fn oversized_counter_is_rejected() {
        let buf = [0xFF; 64];
        let mut cursor = BitCursor::new(&buf);
        assert_eq!(decode_string(&mut cursor), Err(Error::InvalidMessage));
    }
}
