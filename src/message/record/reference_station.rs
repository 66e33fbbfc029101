//! Stationary reference station ARP messages (1005 and 1006).
use crate::{bits::BitCursor, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference station antenna reference point, message 1005.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceStation {
    /// Reference station id
    pub station_id: u16,
    /// Realization year of the ITRF the coordinates refer to
    pub itrf_epoch: u8,
    /// Station streams GPS corrections
    pub gps_indicator: bool,
    /// Station streams GLONASS corrections
    pub glonass_indicator: bool,
    /// Station streams Galileo corrections
    pub galileo_indicator: bool,
    /// Virtual reference station indicator
    pub ref_station_indicator: bool,
    /// Antenna reference point, ECEF X (m)
    pub arp_x_m: f64,
    /// Single oscillator indicator
    pub oscillator_indicator: bool,
    /// Antenna reference point, ECEF Y (m)
    pub arp_y_m: f64,
    /// Quarter cycle indicator
    pub quarter_cycle_indicator: u8,
    /// Antenna reference point, ECEF Z (m)
    pub arp_z_m: f64,
}

impl ReferenceStation {
    /// Decodes a message 1005 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1005 {
            return Err(Error::MessageTypeMismatch);
        }
        Self::decode_body(&mut cursor)
    }

    /// Body shared with message 1006. ARP components are emitted at a
    /// 0.1 mm resolution, on 38 bit signed fields.
    fn decode_body(cursor: &mut BitCursor) -> Result<Self, Error> {
        let station_id = cursor.read_u32(12)? as u16;
        let itrf_epoch = cursor.read_u32(6)? as u8;
        let gps_indicator = cursor.read_bool()?;
        let glonass_indicator = cursor.read_bool()?;
        let galileo_indicator = cursor.read_bool()?;
        let ref_station_indicator = cursor.read_bool()?;
        let arp_x_m = cursor.read_i64(38)? as f64 / 10000.0;
        let oscillator_indicator = cursor.read_bool()?;
        cursor.skip(1)?;
        let arp_y_m = cursor.read_i64(38)? as f64 / 10000.0;
        let quarter_cycle_indicator = cursor.read_u32(2)? as u8;
        let arp_z_m = cursor.read_i64(38)? as f64 / 10000.0;
        Ok(Self {
            station_id,
            itrf_epoch,
            gps_indicator,
            glonass_indicator,
            galileo_indicator,
            ref_station_indicator,
            arp_x_m,
            oscillator_indicator,
            arp_y_m,
            quarter_cycle_indicator,
            arp_z_m,
        })
    }
}

/// Reference station ARP with antenna height, message 1006.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceStationHeight {
    /// ARP and station indicators
    pub station: ReferenceStation,
    /// Antenna height above the ARP (m)
    pub antenna_height_m: f64,
}

impl ReferenceStationHeight {
    /// Decodes a message 1006 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1006 {
            return Err(Error::MessageTypeMismatch);
        }
        let station = ReferenceStation::decode_body(&mut cursor)?;
        let antenna_height_m = f64::from(cursor.read_u32(16)?) / 10000.0;
        Ok(Self {
            station,
            antenna_height_m,
        })
    }
}
