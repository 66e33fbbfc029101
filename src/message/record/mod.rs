//! Typed message records.
mod antenna;
mod flags;
mod glo_bias;
mod lock;
mod msm;
mod observation;
mod proprietary;
mod reference_station;
mod text;

pub use antenna::{AntennaDescriptor, AntennaSerial, ReceiverAntennaDescriptor};
pub use flags::ObsFlags;
pub use glo_bias::GloBias;
pub use lock::{lock_time_10bit_ms, lock_time_4bit, lock_time_7bit};
pub use msm::{MsmHeader, MsmMessage, MsmSatellite, MsmSignal};
pub use observation::{FrequencyObservation, ObsHeader, ObsMessage, SatelliteObservation};
pub use proprietary::Proprietary;
pub use reference_station::{ReferenceStation, ReferenceStationHeight};
pub use text::TextMessage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message content, tagged by record family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Record {
    /// Legacy RTK observables (1001..1004, 1010 and 1012)
    Observation(ObsMessage),
    /// Multiple Signal Message (MSM4..MSM7)
    Msm(MsmMessage),
    /// Reference station ARP (1005)
    ReferenceStation(ReferenceStation),
    /// Reference station ARP and antenna height (1006)
    ReferenceStationHeight(ReferenceStationHeight),
    /// Antenna descriptor (1007)
    AntennaDescriptor(AntennaDescriptor),
    /// Antenna descriptor and serial number (1008)
    AntennaSerial(AntennaSerial),
    /// Receiver and antenna descriptors (1033)
    ReceiverAntennaDescriptor(ReceiverAntennaDescriptor),
    /// Unicode text message (1029)
    Text(TextMessage),
    /// GLONASS code phase biases (1230)
    GloBias(GloBias),
    /// Proprietary envelope (4062)
    Proprietary(Proprietary),
}
