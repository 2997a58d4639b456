//! Direction of a single-pool swap.

use core::fmt;

/// Which reserve a single-pool swap draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Common asset in, paired asset out.
    CommonToPaired,
    /// Paired asset in, common asset out.
    PairedToCommon,
}

impl SwapDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::CommonToPaired => Self::PairedToCommon,
            Self::PairedToCommon => Self::CommonToPaired,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommonToPaired => write!(f, "common->paired"),
            Self::PairedToCommon => write!(f, "paired->common"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_round_trip() {
        let d = SwapDirection::CommonToPaired;
        assert_eq!(d.reversed(), SwapDirection::PairedToCommon);
        assert_eq!(d.reversed().reversed(), d);
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::PairedToCommon.to_string(), "paired->common");
    }
}
