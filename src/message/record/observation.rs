//! Legacy RTK observables: messages 1001 through 1004 (GPS) and
//! 1010 / 1012 (GLONASS).
//!
//! The six messages share one body layout, parameterized by the
//! constellation, by the presence of the integer ambiguity / C/N0
//! block ("extended" messages) and by the presence of the L2 block.
use crate::{
    bits::BitCursor,
    constants::{
        CP_INVALID, GLO_L1_DELTA_HZ, GLO_L1_HZ, GLO_L2_DELTA_HZ, GLO_L2_HZ, GPS_C, GPS_L1_HZ,
        GPS_L2_HZ, MT1012_GLO_FCN_OFFSET, MT1012_GLO_MAX_FCN, PRUNIT_GLO, PRUNIT_GPS,
        PR_L1_INVALID, PR_L2_INVALID, RTCM_GLO_MAX_TOW_MS, RTCM_MAX_TOW_MS,
    },
    message::record::{flags::ObsFlags, lock::lock_time_7bit},
    Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common header of the legacy observation messages.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObsHeader {
    /// Message number
    pub msg_num: u16,
    /// Reference station id
    pub station_id: u16,
    /// GPS time of week, or GLONASS time of day, in milliseconds
    pub tow_ms: u32,
    /// Synchronous GNSS flag
    pub sync: bool,
    /// Number of satellite blocks in the body
    pub n_sat: u8,
    /// Divergence free smoothing flag
    pub div_free: bool,
    /// Smoothing interval
    pub smooth: u8,
}

impl ObsHeader {
    fn decode(cursor: &mut BitCursor, glonass: bool) -> Result<Self, Error> {
        let msg_num = cursor.read_u32(12)? as u16;
        let station_id = cursor.read_u32(12)? as u16;
        // GLONASS uses the time of day on 27 bits
        let tow_ms = cursor.read_u32(if glonass { 27 } else { 30 })?;
        let sync = cursor.read_bool()?;
        let n_sat = cursor.read_u32(5)? as u8;
        let div_free = cursor.read_bool()?;
        let smooth = cursor.read_u32(3)? as u8;
        Ok(Self {
            msg_num,
            station_id,
            tow_ms,
            sync,
            n_sat,
            div_free,
            smooth,
        })
    }
}

/// Observables of one frequency of one satellite.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyObservation {
    /// Code indicator
    pub code: u8,
    /// Pseudorange (m)
    pub pseudorange_m: f64,
    /// Carrier phase (cycles)
    pub carrier_phase_cycles: f64,
    /// Lock time (s)
    pub lock_time_s: u32,
    /// Carrier to noise ratio (dB-Hz)
    pub cnr_db_hz: f64,
    /// Field validity
    pub flags: ObsFlags,
}

impl FrequencyObservation {
    /// Optional 8 bit C/N0 block, 0.25 dB-Hz resolution, 0 is invalid.
    fn decode_cnr(&mut self, cursor: &mut BitCursor) -> Result<(), Error> {
        let cnr = cursor.read_u32(8)?;
        if cnr != 0 {
            self.cnr_db_hz = 0.25 * f64::from(cnr);
            self.flags.insert(ObsFlags::VALID_CNR);
        }
        Ok(())
    }
}

/// One satellite block of a legacy observation message.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteObservation {
    /// Satellite id within the constellation
    pub sv_id: u8,
    /// GLONASS frequency channel number field, biased by
    /// [MT1012_GLO_FCN_OFFSET]. Zero on GPS messages.
    pub fcn: u8,
    /// L1 observables
    pub l1: FrequencyObservation,
    /// L2 observables, populated by the dual frequency messages only
    pub l2: FrequencyObservation,
}

/// Decoded legacy observation message.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObsMessage {
    /// Common header
    pub header: ObsHeader,
    /// One entry per satellite block
    pub satellites: Vec<SatelliteObservation>,
}

/// Body layout of one legacy message number.
struct ObsLayout {
    msg_num: u16,
    glonass: bool,
    /// integer ambiguity and C/N0 blocks present
    extended: bool,
    /// L2 block present
    dual_freq: bool,
}

const MSG_1001: ObsLayout = ObsLayout {
    msg_num: 1001,
    glonass: false,
    extended: false,
    dual_freq: false,
};

const MSG_1002: ObsLayout = ObsLayout {
    msg_num: 1002,
    glonass: false,
    extended: true,
    dual_freq: false,
};

const MSG_1003: ObsLayout = ObsLayout {
    msg_num: 1003,
    glonass: false,
    extended: false,
    dual_freq: true,
};

const MSG_1004: ObsLayout = ObsLayout {
    msg_num: 1004,
    glonass: false,
    extended: true,
    dual_freq: true,
};

const MSG_1010: ObsLayout = ObsLayout {
    msg_num: 1010,
    glonass: true,
    extended: true,
    dual_freq: false,
};

const MSG_1012: ObsLayout = ObsLayout {
    msg_num: 1012,
    glonass: true,
    extended: true,
    dual_freq: true,
};

impl ObsMessage {
    /// Decodes message 1001 (L1 only GPS RTK observables).
    pub fn decode_1001(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1001)
    }
    /// Decodes message 1002 (extended L1 only GPS RTK observables).
    pub fn decode_1002(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1002)
    }
    /// Decodes message 1003 (L1/L2 GPS RTK observables).
    pub fn decode_1003(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1003)
    }
    /// Decodes message 1004 (extended L1/L2 GPS RTK observables).
    pub fn decode_1004(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1004)
    }
    /// Decodes message 1010 (extended L1 only GLONASS RTK observables).
    pub fn decode_1010(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1010)
    }
    /// Decodes message 1012 (extended L1/L2 GLONASS RTK observables).
    pub fn decode_1012(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, &MSG_1012)
    }

    fn decode(buf: &[u8], layout: &ObsLayout) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);

        let header = ObsHeader::decode(&mut cursor, layout.glonass)?;
        if header.msg_num != layout.msg_num {
            return Err(Error::MessageTypeMismatch);
        }

        let max_tow_ms = if layout.glonass {
            RTCM_GLO_MAX_TOW_MS
        } else {
            RTCM_MAX_TOW_MS
        };
        if header.tow_ms > max_tow_ms {
            return Err(Error::InvalidMessage);
        }

        let mut satellites = Vec::with_capacity(header.n_sat as usize);

        for _ in 0..header.n_sat {
            let mut sat = SatelliteObservation {
                sv_id: cursor.read_u32(6)? as u8,
                ..Default::default()
            };

            /*
             * L1 block
             */
            sat.l1.code = cursor.read_u32(1)? as u8;
            if layout.glonass {
                sat.fcn = cursor.read_u32(5)? as u8;
            }
            let l1_pr = cursor.read_u32(if layout.glonass { 25 } else { 24 })?;
            let l1_phr_pr_diff = cursor.read_i32(20)?;
            sat.l1.lock_time_s = lock_time_7bit(cursor.read_u32(7)? as u8);

            let amb = if layout.extended {
                // GLONASS carries the ambiguity on 7 bits, GPS on 8
                cursor.read_u32(if layout.glonass { 7 } else { 8 })?
            } else {
                0
            };
            if layout.extended {
                sat.l1.decode_cnr(&mut cursor)?;
            }

            // FCN gate: phase observables of a satellite with an
            // unknown frequency channel cannot be interpreted
            let fcn_known = !layout.glonass || sat.fcn <= MT1012_GLO_MAX_FCN;
            let glo_fcn = i32::from(sat.fcn) - i32::from(MT1012_GLO_FCN_OFFSET);

            let (prunit, l1_freq_hz, l2_freq_hz) = if layout.glonass {
                (
                    PRUNIT_GLO,
                    GLO_L1_HZ + f64::from(glo_fcn) * GLO_L1_DELTA_HZ,
                    GLO_L2_HZ + f64::from(glo_fcn) * GLO_L2_DELTA_HZ,
                )
            } else {
                (PRUNIT_GPS, GPS_L1_HZ, GPS_L2_HZ)
            };

            // the full L1 pseudorange also anchors the L1/L2 phase
            // reconstruction, whatever its own validity
            let l1_pseudorange_m = 0.02 * f64::from(l1_pr) + f64::from(amb) * prunit;

            let valid_pr = l1_pr != PR_L1_INVALID;
            sat.l1.flags.set(ObsFlags::VALID_PR, valid_pr);
            if valid_pr {
                sat.l1.pseudorange_m = l1_pseudorange_m;
            }

            let valid_cp = fcn_known && l1_phr_pr_diff != CP_INVALID;
            sat.l1.flags.set(ObsFlags::VALID_CP, valid_cp);
            sat.l1.flags.set(ObsFlags::VALID_LOCK, valid_cp);
            if valid_cp {
                sat.l1.carrier_phase_cycles = (l1_pseudorange_m
                    + 0.0005 * f64::from(l1_phr_pr_diff))
                    / (GPS_C / l1_freq_hz);
            }

            /*
             * L2 block
             */
            if layout.dual_freq {
                sat.l2.code = cursor.read_u32(2)? as u8;
                let l2_pr_diff = cursor.read_i32(14)?;
                let l2_phr_pr_diff = cursor.read_i32(20)?;
                sat.l2.lock_time_s = lock_time_7bit(cursor.read_u32(7)? as u8);
                if layout.extended {
                    sat.l2.decode_cnr(&mut cursor)?;
                }

                let valid_pr = l2_pr_diff != PR_L2_INVALID;
                sat.l2.flags.set(ObsFlags::VALID_PR, valid_pr);
                if valid_pr {
                    sat.l2.pseudorange_m = 0.02 * f64::from(l2_pr_diff) + l1_pseudorange_m;
                }

                let valid_cp = fcn_known && l2_phr_pr_diff != CP_INVALID;
                sat.l2.flags.set(ObsFlags::VALID_CP, valid_cp);
                sat.l2.flags.set(ObsFlags::VALID_LOCK, valid_cp);
                if valid_cp {
                    sat.l2.carrier_phase_cycles = (l1_pseudorange_m
                        + 0.0005 * f64::from(l2_phr_pr_diff))
                        / (GPS_C / l2_freq_hz);
                }
            }

            satellites.push(sat);
        }

        Ok(Self { header, satellites })
    }
}

#[cfg(test)]
mod test {
    use super::{ObsHeader, ObsMessage};
    use crate::bits::BitCursor;

    #[test]
    fn gps_header() {
        // msg 1001, station 1023, tow 123456 ms, sync, 2 sats
        let buf = [0x3E, 0x93, 0xFF, 0x00, 0x07, 0x89, 0x02, 0x21];
        let mut cursor = BitCursor::new(&buf);
        let header = ObsHeader::decode(&mut cursor, false).unwrap();
        assert_eq!(header.msg_num, 1001);
        assert_eq!(header.station_id, 1023);
        assert_eq!(header.tow_ms, 123_456);
        assert!(header.sync);
        assert_eq!(header.n_sat, 2);
        assert!(!header.div_free);
        assert_eq!(header.smooth, 1);
        assert_eq!(cursor.position(), 64);
    }

    #[test]
    fn truncated_body_is_rejected() {
        // valid header announcing one satellite, but an empty body
        let buf = [0x3E, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10];
        assert!(ObsMessage::decode_1001(&buf).is_err());
    }
}
