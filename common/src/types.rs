//! Common Types for 5G NR
//!
//! Defines fundamental radio types shared by the SSB tooling

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;

/// Absolute Radio Frequency Channel Number (NR-ARFCN)
///
/// Signed and unchecked; any integer the caller supplies is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Arfcn(pub i64);

impl Arfcn {
    /// Signed channel distance `self - other`, widened so it cannot overflow
    pub fn delta(&self, other: Arfcn) -> i128 {
        i128::from(self.0) - i128::from(other.0)
    }
}

impl fmt::Display for Arfcn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NR operating band (e.g. n78 is `NrBand(78)`)
///
/// Any integer is representable; whether a band is known is decided by the
/// step table, not by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NrBand(pub i64);

impl NrBand {
    /// Get the band number
    pub fn number(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NrBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subcarrier spacing values in kHz
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum SubcarrierSpacing {
    /// 15 kHz
    Scs15 = 15,
    /// 30 kHz
    #[default]
    Scs30 = 30,
    /// 60 kHz
    Scs60 = 60,
    /// 120 kHz
    Scs120 = 120,
}

impl SubcarrierSpacing {
    /// All supported spacings, ascending
    pub const ALL: [SubcarrierSpacing; 4] = [
        SubcarrierSpacing::Scs15,
        SubcarrierSpacing::Scs30,
        SubcarrierSpacing::Scs60,
        SubcarrierSpacing::Scs120,
    ];

    /// Look up a spacing from its value in kHz
    pub fn from_khz(khz: u32) -> Option<Self> {
        Self::from_u32(khz)
    }

    /// Get spacing in kHz
    pub fn as_khz(&self) -> u32 {
        // Discriminants are the kHz values
        *self as u32
    }
}

impl fmt::Display for SubcarrierSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.as_khz())
    }
}
