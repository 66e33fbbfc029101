//! Message decoding: dispatch from the leading message number to the
//! per type decoders.
mod mid;
mod record;
mod time;

pub use mid::MsmType;
pub use record::{
    lock_time_10bit_ms, lock_time_4bit, lock_time_7bit, AntennaDescriptor, AntennaSerial,
    FrequencyObservation, GloBias, MsmHeader, MsmMessage, MsmSatellite, MsmSignal, ObsFlags,
    ObsHeader, ObsMessage, Proprietary, ReceiverAntennaDescriptor, Record, ReferenceStation,
    ReferenceStationHeight, SatelliteObservation, TextMessage,
};

use log::debug;

use crate::{bits::BitCursor, Error};

use gnss::prelude::Constellation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One decoded RTCM payload: the leading message number and its typed
/// record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Message number, from the leading 12 bits
    pub msg_num: u16,
    /// Decoded content
    pub record: Record,
}

impl Message {
    /// Decoding attempt from one RTCM payload. The caller strips the
    /// framing first: no preamble, no length field, CRC already
    /// verified.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let msg_num = BitCursor::new(buf).read_u32(12)? as u16;
        debug!("rtcm3: decoding msg_num={}", msg_num);

        let record = match msg_num {
            1001 => Record::Observation(ObsMessage::decode_1001(buf)?),
            1002 => Record::Observation(ObsMessage::decode_1002(buf)?),
            1003 => Record::Observation(ObsMessage::decode_1003(buf)?),
            1004 => Record::Observation(ObsMessage::decode_1004(buf)?),
            1005 => Record::ReferenceStation(ReferenceStation::decode(buf)?),
            1006 => Record::ReferenceStationHeight(ReferenceStationHeight::decode(buf)?),
            1007 => Record::AntennaDescriptor(AntennaDescriptor::decode(buf)?),
            1008 => Record::AntennaSerial(AntennaSerial::decode(buf)?),
            1010 => Record::Observation(ObsMessage::decode_1010(buf)?),
            1012 => Record::Observation(ObsMessage::decode_1012(buf)?),
            1029 => Record::Text(TextMessage::decode(buf)?),
            1033 => Record::ReceiverAntennaDescriptor(ReceiverAntennaDescriptor::decode(buf)?),
            1230 => Record::GloBias(GloBias::decode(buf)?),
            4062 => Record::Proprietary(Proprietary::decode(buf)?),
            _ => match MsmType::from_msg_num(msg_num) {
                Some(MsmType::Msm4) => Record::Msm(MsmMessage::decode_msm4(buf)?),
                Some(MsmType::Msm5) => Record::Msm(MsmMessage::decode_msm5(buf)?),
                Some(MsmType::Msm6) => Record::Msm(MsmMessage::decode_msm6(buf)?),
                Some(MsmType::Msm7) => Record::Msm(MsmMessage::decode_msm7(buf)?),
                None => {
                    return Err(Error::MessageTypeMismatch);
                },
            },
        };

        Ok(Self { msg_num, record })
    }

    /// Constellation this message addresses, when one applies.
    pub fn constellation(&self) -> Option<Constellation> {
        mid::constellation(self.msg_num)
    }
}
