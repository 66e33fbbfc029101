//! Multiple Signal Messages (MSM4 through MSM7).
//!
//! MSM bodies are column oriented: every satellite level field is
//! streamed for all satellites before the next field starts, and the
//! same holds for the per cell signal fields. Decoding therefore runs
//! in two passes: the columns are read into scratch arrays sized at
//! the format maxima, then the cells selected by the cell mask are
//! assembled in satellite major order.
use log::error;

use crate::{
    bits::BitCursor,
    constants::{
        C_1_2P10, C_1_2P24, C_1_2P29, C_1_2P31, C_1_2P4, MSM_CP_EXT_INVALID, MSM_CP_INVALID,
        MSM_DOP_INVALID, MSM_GLO_FCN_UNKNOWN, MSM_MAX_CELLS, MSM_PR_EXT_INVALID, MSM_PR_INVALID,
        MSM_ROUGH_RANGE_INVALID, MSM_ROUGH_RATE_INVALID, MSM_SATELLITE_MASK_SIZE,
        MSM_SIGNAL_MASK_SIZE, RTCM_GLO_MAX_TOW_MS, RTCM_MAX_TOW_MS,
    },
    message::{
        mid::{msm_constellation, MsmType},
        record::{
            flags::ObsFlags,
            lock::{lock_time_10bit_ms, lock_time_4bit},
        },
        time::normalize_bds2_tow,
    },
    Error,
};

use gnss::prelude::Constellation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MAX_SATS: usize = MSM_SATELLITE_MASK_SIZE as usize;
const MAX_CELLS: usize = MSM_MAX_CELLS as usize;

/// Header of the Multiple Signal Messages.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsmHeader {
    /// Message number
    pub msg_num: u16,
    /// Reference station id
    pub station_id: u16,
    /// Epoch time in milliseconds: GPS time of week for most systems,
    /// GLONASS time of day, BeiDou epochs normalized into the GPS
    /// time of week
    pub tow_ms: u32,
    /// Multiple message flag: more MSM messages follow for this epoch
    pub multiple: bool,
    /// Issue of data station
    pub iods: u8,
    /// Reserved field
    pub reserved: u8,
    /// Clock steering indicator
    pub clock_steering: u8,
    /// External clock indicator
    pub ext_clock: u8,
    /// Divergence free smoothing flag
    pub div_free: bool,
    /// Smoothing interval
    pub smooth: u8,
    /// Satellite mask; the MSB maps to the first satellite slot
    pub satellite_mask: u64,
    /// Signal mask; the MSB maps to the first signal slot
    pub signal_mask: u32,
    /// Cell mask, `num_satellites() * num_signals()` bits packed from
    /// the MSB in satellite major order
    pub cell_mask: u64,
}

impl MsmHeader {
    /// Number of satellites selected by the satellite mask.
    pub fn num_satellites(&self) -> u8 {
        self.satellite_mask.count_ones() as u8
    }
    /// Number of signals selected by the signal mask.
    pub fn num_signals(&self) -> u8 {
        self.signal_mask.count_ones() as u8
    }
    /// Number of (satellite, signal) cells selected by the cell mask.
    pub fn num_cells(&self) -> u8 {
        self.cell_mask.count_ones() as u8
    }
    /// True when the cell of the given satellite and signal slots
    /// carries data.
    pub fn cell_active(&self, sat: u8, sig: u8) -> bool {
        let num_sats = u16::from(self.num_satellites());
        let num_sigs = u16::from(self.num_signals());
        let size = num_sats * num_sigs;
        if size == 0 || size > u16::from(MSM_MAX_CELLS) {
            return false;
        }
        if u16::from(sat) >= num_sats || u16::from(sig) >= num_sigs {
            return false;
        }
        let index = u16::from(sat) * num_sigs + u16::from(sig);
        self.cell_mask >> (size - 1 - index) & 1 == 1
    }

    fn decode(cursor: &mut BitCursor, constellation: Constellation) -> Result<Self, Error> {
        let msg_num = cursor.read_u32(12)? as u16;
        let station_id = cursor.read_u32(12)? as u16;

        let tow_ms = match constellation {
            Constellation::Glonass => {
                // day of week, left to the epoch conversion layer
                cursor.skip(3)?;
                cursor.read_u32(27)?
            },
            Constellation::BeiDou => normalize_bds2_tow(cursor.read_u32(30)?),
            _ => cursor.read_u32(30)?,
        };

        let multiple = cursor.read_bool()?;
        let iods = cursor.read_u32(3)? as u8;
        let reserved = cursor.read_u32(7)? as u8;
        let clock_steering = cursor.read_u32(2)? as u8;
        let ext_clock = cursor.read_u32(2)? as u8;
        let div_free = cursor.read_bool()?;
        let smooth = cursor.read_u32(3)? as u8;

        let satellite_mask = cursor.read_u64(MSM_SATELLITE_MASK_SIZE as usize)?;
        let signal_mask = cursor.read_u32(MSM_SIGNAL_MASK_SIZE as usize)?;

        let mut header = Self {
            msg_num,
            station_id,
            tow_ms,
            multiple,
            iods,
            reserved,
            clock_steering,
            ext_clock,
            div_free,
            smooth,
            satellite_mask,
            signal_mask,
            cell_mask: 0,
        };

        let cells = u16::from(header.num_satellites()) * u16::from(header.num_signals());
        if cells > u16::from(MSM_MAX_CELLS) {
            // most probably an upstream framing error
            error!("rtcm3: msm cell mask of {} entries", cells);
            return Err(Error::InvalidMessage);
        }
        header.cell_mask = cursor.read_u64(cells as usize)?;

        Ok(header)
    }
}

/// Satellite level data, shared by every cell of that satellite.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsmSatellite {
    /// Rough range in milliseconds: integer part plus 1/1024 fraction
    pub rough_range_ms: f64,
    /// Rough range rate (m/s), MSM5 and MSM7 only
    pub rough_range_rate_m_s: f64,
    /// GLONASS frequency channel number field when delivered,
    /// [MSM_GLO_FCN_UNKNOWN] for GLONASS satellites without one
    pub glo_fcn: u8,
}

/// One decoded (satellite, signal) cell.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsmSignal {
    /// Full pseudorange (ms)
    pub pseudorange_ms: f64,
    /// Full phase range (ms)
    pub carrier_phase_ms: f64,
    /// Lock time (s)
    pub lock_time_s: f64,
    /// Half cycle ambiguity indicator
    pub hca_indicator: bool,
    /// Carrier to noise ratio (dB-Hz)
    pub cnr_db_hz: f64,
    /// Full range rate (m/s), MSM5 and MSM7 only
    pub range_rate_m_s: f64,
    /// Field validity
    pub flags: ObsFlags,
}

/// Decoded Multiple Signal Message.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsmMessage {
    /// MSM header
    pub header: MsmHeader,
    /// One entry per satellite of the satellite mask
    pub satellites: Vec<MsmSatellite>,
    /// One entry per active cell, in satellite major order
    pub signals: Vec<MsmSignal>,
}

impl MsmMessage {
    /// Decodes an MSM4 message of any supported constellation.
    pub fn decode_msm4(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, MsmType::Msm4)
    }
    /// Decodes an MSM5 message of any supported constellation.
    pub fn decode_msm5(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, MsmType::Msm5)
    }
    /// Decodes an MSM6 message of any supported constellation.
    pub fn decode_msm6(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, MsmType::Msm6)
    }
    /// Decodes an MSM7 message of any supported constellation.
    pub fn decode_msm7(buf: &[u8]) -> Result<Self, Error> {
        Self::decode(buf, MsmType::Msm7)
    }

    /// Constellation this message addresses.
    pub fn constellation(&self) -> Option<Constellation> {
        msm_constellation(self.header.msg_num)
    }

    fn decode(buf: &[u8], msm_type: MsmType) -> Result<Self, Error> {
        let msg_num = BitCursor::new(buf).read_u32(12)? as u16;
        if MsmType::from_msg_num(msg_num) != Some(msm_type) {
            return Err(Error::MessageTypeMismatch);
        }
        let constellation = msm_constellation(msg_num).ok_or(Error::MessageTypeMismatch)?;

        let mut cursor = BitCursor::new(buf);
        let header = MsmHeader::decode(&mut cursor, constellation)?;

        let max_tow_ms = if constellation == Constellation::Glonass {
            RTCM_GLO_MAX_TOW_MS
        } else {
            RTCM_MAX_TOW_MS
        };
        if header.tow_ms > max_tow_ms {
            return Err(Error::InvalidMessage);
        }

        let num_sats = header.num_satellites() as usize;
        let num_sigs = header.num_signals();
        let num_cells = header.num_cells() as usize;

        /*
         * satellite columns
         */
        let mut rough_range_ms = [0.0_f64; MAX_SATS];
        let mut rough_range_valid = [false; MAX_SATS];
        let mut sat_info = [0_u8; MAX_SATS];
        let mut rough_rate_m_s = [0.0_f64; MAX_SATS];
        let mut rough_rate_valid = [false; MAX_SATS];

        // integer milliseconds, DF397
        for i in 0..num_sats {
            let range_ms = cursor.read_u32(8)?;
            rough_range_ms[i] = f64::from(range_ms);
            rough_range_valid[i] = range_ms != u32::from(MSM_ROUGH_RANGE_INVALID);
        }

        // satellite info, DF419: carries the GLONASS FCN
        if msm_type.has_satellite_info() {
            for info in sat_info.iter_mut().take(num_sats) {
                *info = cursor.read_u32(4)? as u8;
            }
        }

        // rough range modulo 1 ms, DF398
        for i in 0..num_sats {
            let rough_pr = cursor.read_u32(10)?;
            if rough_range_valid[i] {
                rough_range_ms[i] += f64::from(rough_pr) * C_1_2P10;
            }
        }

        // rough range rate, DF399
        if msm_type.has_doppler() {
            for i in 0..num_sats {
                let rate = cursor.read_i32(14)?;
                rough_rate_m_s[i] = f64::from(rate);
                rough_rate_valid[i] = rate != MSM_ROUGH_RATE_INVALID;
            }
        }

        /*
         * signal columns
         */
        let mut fine_pr_ms = [0.0_f64; MAX_CELLS];
        let mut fine_cp_ms = [0.0_f64; MAX_CELLS];
        let mut lock_time_s = [0.0_f64; MAX_CELLS];
        let mut hca_indicator = [false; MAX_CELLS];
        let mut cnr_db_hz = [0.0_f64; MAX_CELLS];
        let mut fine_rate_m_s = [0.0_f64; MAX_CELLS];
        let mut flags = [ObsFlags::empty(); MAX_CELLS];

        if msm_type.extended_resolution() {
            // DF405, DF406, DF407
            for i in 0..num_cells {
                let fine_pr = cursor.read_i32(20)?;
                flags[i].set(ObsFlags::VALID_PR, fine_pr != MSM_PR_EXT_INVALID);
                fine_pr_ms[i] = f64::from(fine_pr) * C_1_2P29;
            }
            for i in 0..num_cells {
                let fine_cp = cursor.read_i32(24)?;
                flags[i].set(ObsFlags::VALID_CP, fine_cp != MSM_CP_EXT_INVALID);
                fine_cp_ms[i] = f64::from(fine_cp) * C_1_2P31;
            }
            for i in 0..num_cells {
                let lock = cursor.read_u32(10)? as u16;
                lock_time_s[i] = f64::from(lock_time_10bit_ms(lock)) / 1000.0;
                flags[i].insert(ObsFlags::VALID_LOCK);
            }
        } else {
            // DF400, DF401, DF402
            for i in 0..num_cells {
                let fine_pr = cursor.read_i32(15)?;
                flags[i].set(ObsFlags::VALID_PR, fine_pr != MSM_PR_INVALID);
                fine_pr_ms[i] = f64::from(fine_pr) * C_1_2P24;
            }
            for i in 0..num_cells {
                let fine_cp = cursor.read_i32(22)?;
                flags[i].set(ObsFlags::VALID_CP, fine_cp != MSM_CP_INVALID);
                fine_cp_ms[i] = f64::from(fine_cp) * C_1_2P29;
            }
            for i in 0..num_cells {
                let lock = cursor.read_u32(4)? as u8;
                lock_time_s[i] = lock_time_4bit(lock);
                flags[i].insert(ObsFlags::VALID_LOCK);
            }
        }

        // half cycle ambiguity, DF420
        for hca in hca_indicator.iter_mut().take(num_cells) {
            *hca = cursor.read_bool()?;
        }

        // C/N0: DF408 at extended resolution, DF403 otherwise
        if msm_type.extended_resolution() {
            for i in 0..num_cells {
                let cnr = cursor.read_u32(10)?;
                flags[i].set(ObsFlags::VALID_CNR, cnr != 0);
                cnr_db_hz[i] = f64::from(cnr) * C_1_2P4;
            }
        } else {
            for i in 0..num_cells {
                let cnr = cursor.read_u32(6)?;
                flags[i].set(ObsFlags::VALID_CNR, cnr != 0);
                cnr_db_hz[i] = f64::from(cnr);
            }
        }

        // fine range rate, DF404
        if msm_type.has_doppler() {
            for i in 0..num_cells {
                let fine_rate = cursor.read_i32(15)?;
                fine_rate_m_s[i] = f64::from(fine_rate) * 0.0001;
                flags[i].set(ObsFlags::VALID_DOPPLER, fine_rate != MSM_DOP_INVALID);
            }
        }

        /*
         * cell assembly, satellite major
         */
        let mut satellites = Vec::with_capacity(num_sats);
        let mut signals = Vec::with_capacity(num_cells);
        let mut cell = 0_usize;

        for sat in 0..num_sats {
            let glo_fcn = if msm_type.has_satellite_info() {
                sat_info[sat]
            } else if constellation == Constellation::Glonass {
                MSM_GLO_FCN_UNKNOWN
            } else {
                0
            };
            satellites.push(MsmSatellite {
                rough_range_ms: rough_range_ms[sat],
                rough_range_rate_m_s: rough_rate_m_s[sat],
                glo_fcn,
            });

            for sig in 0..num_sigs {
                if !header.cell_active(sat as u8, sig) {
                    continue;
                }

                let mut record = MsmSignal {
                    lock_time_s: lock_time_s[cell],
                    hca_indicator: hca_indicator[cell],
                    ..Default::default()
                };
                let mut cell_flags = flags[cell];

                if rough_range_valid[sat] && cell_flags.contains(ObsFlags::VALID_PR) {
                    record.pseudorange_ms = rough_range_ms[sat] + fine_pr_ms[cell];
                } else {
                    cell_flags.remove(ObsFlags::VALID_PR);
                }
                if rough_range_valid[sat] && cell_flags.contains(ObsFlags::VALID_CP) {
                    record.carrier_phase_ms = rough_range_ms[sat] + fine_cp_ms[cell];
                } else {
                    cell_flags.remove(ObsFlags::VALID_CP);
                }
                if cell_flags.contains(ObsFlags::VALID_CNR) {
                    record.cnr_db_hz = cnr_db_hz[cell];
                }
                if rough_rate_valid[sat] && cell_flags.contains(ObsFlags::VALID_DOPPLER) {
                    record.range_rate_m_s = rough_rate_m_s[sat] + fine_rate_m_s[cell];
                } else {
                    cell_flags.remove(ObsFlags::VALID_DOPPLER);
                }

                record.flags = cell_flags;
                signals.push(record);
                cell += 1;
            }
        }

        Ok(Self {
            header,
            satellites,
            signals,
        })
    }
}

#[cfg(test)]
mod test {
    use super::MsmHeader;

    #[test]
    fn cell_mask_queries() {
        let header = MsmHeader {
            // 2 satellites, 2 signals
            satellite_mask: 1 << 63 | 1 << 58,
            signal_mask: 1 << 31 | 1 << 29,
            // 4 cells: 1011
            cell_mask: 0b1011,
            ..Default::default()
        };
        assert_eq!(header.num_satellites(), 2);
        assert_eq!(header.num_signals(), 2);
        assert_eq!(header.num_cells(), 3);
        assert!(header.cell_active(0, 0));
        assert!(!header.cell_active(0, 1));
        assert!(header.cell_active(1, 0));
        assert!(header.cell_active(1, 1));
        // out of range slots never carry data
        assert!(!header.cell_active(2, 0));
        assert!(!header.cell_active(0, 2));
    }

    #[test]
    fn empty_masks() {
        let header = MsmHeader::default();
        assert_eq!(header.num_satellites(), 0);
        assert_eq!(header.num_cells(), 0);
        assert!(!header.cell_active(0, 0));
    }
}
