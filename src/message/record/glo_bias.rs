//! GLONASS code phase bias message (1230).
use crate::{bits::BitCursor, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GLONASS L1/L2 code phase biases. Each bias is present on the wire
/// only when its FDMA signal mask bit is set; absent biases decode to
/// exactly 0.0.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GloBias {
    /// Reference station id
    pub station_id: u16,
    /// True when the biases are aligned
    pub bias_indicator: bool,
    /// FDMA signal mask: L1 C/A, L1 P, L2 C/A, L2 P from the MSB
    pub fdma_signal_mask: u8,
    /// L1 C/A code phase bias (m)
    pub l1_ca_bias_m: f64,
    /// L1 P code phase bias (m)
    pub l1_p_bias_m: f64,
    /// L2 C/A code phase bias (m)
    pub l2_ca_bias_m: f64,
    /// L2 P code phase bias (m)
    pub l2_p_bias_m: f64,
}

impl GloBias {
    /// Decodes a message 1230 payload.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut cursor = BitCursor::new(buf);
        if cursor.read_u32(12)? != 1230 {
            return Err(Error::MessageTypeMismatch);
        }
        let station_id = cursor.read_u32(12)? as u16;
        let bias_indicator = cursor.read_bool()?;
        // 3 reserved bits
        cursor.skip(3)?;
        let fdma_signal_mask = cursor.read_u32(4)? as u8;

        let mut bias = Self {
            station_id,
            bias_indicator,
            fdma_signal_mask,
            ..Default::default()
        };
        // biases are emitted at a 0.02 m resolution
        if fdma_signal_mask & 0x08 != 0 {
            bias.l1_ca_bias_m = f64::from(cursor.read_i32(16)?) * 0.02;
        }
        if fdma_signal_mask & 0x04 != 0 {
            bias.l1_p_bias_m = f64::from(cursor.read_i32(16)?) * 0.02;
        }
        if fdma_signal_mask & 0x02 != 0 {
            bias.l2_ca_bias_m = f64::from(cursor.read_i32(16)?) * 0.02;
        }
        if fdma_signal_mask & 0x01 != 0 {
            bias.l2_p_bias_m = f64::from(cursor.read_i32(16)?) * 0.02;
        }
        Ok(bias)
    }
}
