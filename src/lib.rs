#![doc(html_logo_url = "https://raw.githubusercontent.com/georust/meta/master/logo/logo.png")]
#![doc = include_str!("../README.md")]

extern crate gnss_rs as gnss;

use thiserror::Error;

pub mod bits;
pub mod constants;

mod message;

pub mod prelude {
    pub use crate::{
        bits::BitCursor,
        message::{
            lock_time_10bit_ms, lock_time_4bit, lock_time_7bit, AntennaDescriptor, AntennaSerial,
            FrequencyObservation, GloBias, Message, MsmHeader, MsmMessage, MsmSatellite,
            MsmSignal, MsmType, ObsFlags, ObsHeader, ObsMessage, Proprietary,
            ReceiverAntennaDescriptor, Record, ReferenceStation, ReferenceStationHeight,
            SatelliteObservation, TextMessage,
        },
        Error,
    };
    // re-export
    pub use gnss::prelude::Constellation;
}

/// Message decoding errors.
///
/// Numeric field invalidity is not an error: the RTCM format explicitly
/// permits per field invalid encodings, which decode to zero with the
/// matching validity flag cleared. Errors are reserved for payloads that
/// cannot be interpreted at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The leading 12 bits do not carry the message number the targeted
    /// decoder expects, or the message number is not supported.
    #[error("message number does not match the targeted decoder")]
    MessageTypeMismatch,
    /// The payload is internally inconsistent: epoch time out of range,
    /// oversized MSM cell mask, string counter exceeding its capacity,
    /// non zero reserved bits, or a field running past the end of the
    /// buffer.
    #[error("malformed message")]
    InvalidMessage,
}
