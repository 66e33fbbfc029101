//! Physical and protocol constants shared with downstream consumers.

/// Speed of light (m/s)
pub const GPS_C: f64 = 299_792_458.0;

/// GPS L1 carrier frequency (Hz)
pub const GPS_L1_HZ: f64 = 1.57542E9;

/// GPS L2 carrier frequency (Hz)
pub const GPS_L2_HZ: f64 = 1.2276E9;

/// GLONASS L1 base carrier frequency (Hz)
pub const GLO_L1_HZ: f64 = 1.602E9;

/// GLONASS L2 base carrier frequency (Hz)
pub const GLO_L2_HZ: f64 = 1.246E9;

/// GLONASS L1 FDMA channel spacing (Hz)
pub const GLO_L1_DELTA_HZ: f64 = 0.5625E6;

/// GLONASS L2 FDMA channel spacing (Hz)
pub const GLO_L2_DELTA_HZ: f64 = 0.4375E6;

/// RTCM v3 unit of GPS pseudorange: one light millisecond (m)
pub const PRUNIT_GPS: f64 = 299_792.458;

/// RTCM v3 unit of GLONASS pseudorange: two light milliseconds (m)
pub const PRUNIT_GLO: f64 = 599_584.916;

/// Offset of the 5 bit FCN field carried by messages 1010 and 1012
pub const MT1012_GLO_FCN_OFFSET: u8 = 7;

/// Largest FCN field value messages 1010 and 1012 may carry for a
/// satellite with a known frequency channel
pub const MT1012_GLO_MAX_FCN: u8 = 13;

/// FCN value reported for GLONASS MSM satellites whose frequency
/// channel was not delivered
pub const MSM_GLO_FCN_UNKNOWN: u8 = 255;

/// Upper bound of the GPS time of week (ms)
pub const RTCM_MAX_TOW_MS: u32 = 604_799_999;

/// Upper bound of the GLONASS time of day (ms)
pub const RTCM_GLO_MAX_TOW_MS: u32 = 86_400_999;

/// Satellite mask length in the MSM header (bits)
pub const MSM_SATELLITE_MASK_SIZE: u8 = 64;

/// Signal mask length in the MSM header (bits)
pub const MSM_SIGNAL_MASK_SIZE: u8 = 32;

/// Largest tolerated MSM cell mask (satellites x signals)
pub const MSM_MAX_CELLS: u8 = 64;

/// Longest string the antenna and receiver descriptor messages may
/// carry (characters)
pub const MAX_STRING_LEN: u8 = 31;

/*
 * Invalid field encodings. Each sentinel clears the matching validity
 * flag and decodes the field to zero, it is never a decoding error.
 */

/// DF011 L1 pseudorange invalid encoding
pub const PR_L1_INVALID: u32 = 0x80000;

/// DF017 L2 pseudorange difference invalid encoding (14 bit signed minimum)
pub const PR_L2_INVALID: i32 = -8192;

/// DF012/DF018 carrier minus code residual invalid encoding
/// (20 bit signed minimum)
pub const CP_INVALID: i32 = -524_288;

/// DF397 rough range invalid encoding
pub const MSM_ROUGH_RANGE_INVALID: u8 = 0xFF;

/// DF399 rough range rate invalid encoding (14 bit signed minimum)
pub const MSM_ROUGH_RATE_INVALID: i32 = -8192;

/// DF400 fine pseudorange invalid encoding (15 bit signed minimum)
pub const MSM_PR_INVALID: i32 = -16_384;

/// DF405 extended fine pseudorange invalid encoding (20 bit signed minimum)
pub const MSM_PR_EXT_INVALID: i32 = -524_288;

/// DF401 fine phase range invalid encoding (22 bit signed minimum)
pub const MSM_CP_INVALID: i32 = -2_097_152;

/// DF406 extended fine phase range invalid encoding (24 bit signed minimum)
pub const MSM_CP_EXT_INVALID: i32 = -8_388_608;

/// DF404 fine phase range rate invalid encoding (15 bit signed minimum)
pub const MSM_DOP_INVALID: i32 = -16_384;

/*
 * Field scale factors
 */

/// DF398 rough range fraction LSB (1/1024 ms)
pub(crate) const C_1_2P10: f64 = 1.0 / 1024.0;

/// DF408 C/N0 LSB (2^-4 dB-Hz)
pub(crate) const C_1_2P4: f64 = 1.0 / 16.0;

/// DF400 fine pseudorange LSB (2^-24 ms)
pub(crate) const C_1_2P24: f64 = 1.0 / 16_777_216.0;

/// DF401/DF405 LSB (2^-29 ms)
pub(crate) const C_1_2P29: f64 = 1.0 / 536_870_912.0;

/// DF406 fine phase range LSB (2^-31 ms)
pub(crate) const C_1_2P31: f64 = 1.0 / 2_147_483_648.0;

pub(crate) const C_2P30: u32 = 1 << 30;

/// Constant offset between BeiDou and GPS time (s)
pub(crate) const BDS_SECOND_TO_GPS_SECOND: u32 = 14;
