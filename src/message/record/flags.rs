//! Per field validity flags for decoded observables.
use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Validity of the individual fields of one decoded observable.
    ///
    /// A cleared bit means the field was emitted with its invalid
    /// encoding and decoded to zero; the flags are independent of one
    /// another.
    #[derive(Debug, Copy, Clone)]
    #[derive(PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ObsFlags: u8 {
        /// Pseudorange is usable
        const VALID_PR = 0x01;
        /// Carrier phase is usable
        const VALID_CP = 0x02;
        /// Lock time is usable
        const VALID_LOCK = 0x04;
        /// Carrier to noise ratio is usable
        const VALID_CNR = 0x08;
        /// Range rate is usable
        const VALID_DOPPLER = 0x10;
    }
}

impl Default for ObsFlags {
    fn default() -> Self {
        Self::empty()
    }
}
