//! Message number classification.
use gnss::prelude::Constellation;

/// MSM family within a constellation decade. Families 1 through 3
/// (compact pseudorange / phase only messages) are not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MsmType {
    /// Full pseudorange, phase range, lock time and C/N0
    Msm4,
    /// MSM4 plus Doppler
    Msm5,
    /// MSM4 at extended resolution
    Msm6,
    /// MSM5 at extended resolution
    Msm7,
}

impl MsmType {
    /// Family carried by an MSM message number, when supported.
    pub(crate) fn from_msg_num(msg_num: u16) -> Option<Self> {
        if !(1070..=1139).contains(&msg_num) {
            return None;
        }
        match msg_num % 10 {
            4 => Some(Self::Msm4),
            5 => Some(Self::Msm5),
            6 => Some(Self::Msm6),
            7 => Some(Self::Msm7),
            _ => None,
        }
    }
    /// True when the fine fields use the extended (MSM6/7) resolution.
    pub(crate) fn extended_resolution(&self) -> bool {
        matches!(self, Self::Msm6 | Self::Msm7)
    }
    /// True when the satellite info column (DF419) is present.
    pub(crate) fn has_satellite_info(&self) -> bool {
        matches!(self, Self::Msm5 | Self::Msm7)
    }
    /// True when the rough and fine range rate columns are present.
    pub(crate) fn has_doppler(&self) -> bool {
        matches!(self, Self::Msm5 | Self::Msm7)
    }
}

/// Constellation addressed by an MSM message number.
pub(crate) fn msm_constellation(msg_num: u16) -> Option<Constellation> {
    match msg_num / 10 {
        107 => Some(Constellation::GPS),
        108 => Some(Constellation::Glonass),
        109 => Some(Constellation::Galileo),
        110 => Some(Constellation::SBAS),
        111 => Some(Constellation::QZSS),
        112 => Some(Constellation::BeiDou),
        113 => Some(Constellation::IRNSS),
        _ => None,
    }
}

/// Constellation addressed by any supported message number.
pub(crate) fn constellation(msg_num: u16) -> Option<Constellation> {
    match msg_num {
        1001..=1004 => Some(Constellation::GPS),
        1010 | 1012 | 1230 => Some(Constellation::Glonass),
        _ => msm_constellation(msg_num),
    }
}

#[cfg(test)]
mod test {
    use super::{msm_constellation, MsmType};
    use gnss::prelude::Constellation;

    #[test]
    fn msm_families() {
        assert_eq!(MsmType::from_msg_num(1074), Some(MsmType::Msm4));
        assert_eq!(MsmType::from_msg_num(1085), Some(MsmType::Msm5));
        assert_eq!(MsmType::from_msg_num(1096), Some(MsmType::Msm6));
        assert_eq!(MsmType::from_msg_num(1137), Some(MsmType::Msm7));
        // families 1..3 are not supported
        assert_eq!(MsmType::from_msg_num(1071), None);
        assert_eq!(MsmType::from_msg_num(1072), None);
        assert_eq!(MsmType::from_msg_num(1073), None);
        // outside the MSM decades
        assert_eq!(MsmType::from_msg_num(1004), None);
        assert_eq!(MsmType::from_msg_num(1144), None);
        assert_eq!(MsmType::from_msg_num(1069), None);
    }

    #[test]
    fn msm_decades() {
        assert_eq!(msm_constellation(1074), Some(Constellation::GPS));
        assert_eq!(msm_constellation(1087), Some(Constellation::Glonass));
        assert_eq!(msm_constellation(1097), Some(Constellation::Galileo));
        assert_eq!(msm_constellation(1104), Some(Constellation::SBAS));
        assert_eq!(msm_constellation(1117), Some(Constellation::QZSS));
        assert_eq!(msm_constellation(1124), Some(Constellation::BeiDou));
        assert_eq!(msm_constellation(1134), Some(Constellation::IRNSS));
        assert_eq!(msm_constellation(1044), None);
    }
}
