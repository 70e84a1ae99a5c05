//! NR-ARFCN Step Size Table
//!
//! Channel raster granularity per operating band, from 3GPP TS 38.104

use crate::SsbError;
use common::types::NrBand;
use tracing::{debug, trace};

/// Frequency range an operating band belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyRange {
    /// FR1 (410 MHz - 7.125 GHz)
    Fr1,
    /// FR2 (24.25 GHz - 52.6 GHz)
    Fr2,
}

/// One row of the step table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandStep {
    /// Operating band
    pub band: NrBand,
    /// Frequency covered by one ARFCN step, in kHz
    pub step_khz: u32,
}

impl BandStep {
    const fn new(band: i64, step_khz: u32) -> Self {
        Self {
            band: NrBand(band),
            step_khz,
        }
    }

    /// Frequency range of this band
    pub fn frequency_range(&self) -> FrequencyRange {
        if self.step_khz >= 60 {
            FrequencyRange::Fr2
        } else {
            FrequencyRange::Fr1
        }
    }
}

/// ARFCN step sizes for the supported bands
pub const ARFCN_STEP_KHZ: &[BandStep] = &[
    // FR1 bands (15 kHz steps)
    BandStep::new(1, 15),
    BandStep::new(3, 15),
    BandStep::new(7, 15),
    BandStep::new(20, 15),
    BandStep::new(28, 15),
    BandStep::new(77, 15),
    BandStep::new(78, 15),
    BandStep::new(79, 15),
    // FR2 bands (60 kHz steps)
    BandStep::new(257, 60),
    BandStep::new(258, 60),
    BandStep::new(260, 60),
    BandStep::new(261, 60),
];

/// Get the ARFCN step in kHz for a band
///
/// There is no fallback for bands missing from the table.
pub fn arfcn_step_khz(band: NrBand) -> Result<u32, SsbError> {
    match ARFCN_STEP_KHZ.iter().find(|entry| entry.band == band) {
        Some(entry) => {
            trace!(
                "Band n{} ({:?}) uses {} kHz ARFCN steps",
                band,
                entry.frequency_range(),
                entry.step_khz
            );
            Ok(entry.step_khz)
        }
        None => {
            debug!(
                "Band n{} not in step table (supported: {:?})",
                band,
                supported_bands().map(|b| b.0).collect::<Vec<_>>()
            );
            Err(SsbError::UnsupportedBand(band))
        }
    }
}

/// Bands present in the step table, in table order
pub fn supported_bands() -> impl Iterator<Item = NrBand> {
    ARFCN_STEP_KHZ.iter().map(|entry| entry.band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fr1_steps() {
        for band in [1, 3, 7, 20, 28, 77, 78, 79] {
            assert_eq!(arfcn_step_khz(NrBand(band)), Ok(15), "band n{}", band);
        }
    }

    #[test]
    fn test_fr2_steps() {
        for band in [257, 258, 260, 261] {
            assert_eq!(arfcn_step_khz(NrBand(band)), Ok(60), "band n{}", band);
        }
    }

    #[test]
    fn test_unsupported_band() {
        let err = arfcn_step_khz(NrBand(999)).unwrap_err();
        assert_eq!(err, SsbError::UnsupportedBand(NrBand(999)));
        assert_eq!(err.to_string(), "Unsupported band 999. Please add it to the lookup table.");

        // Neighbours of supported bands are not inferred
        assert!(arfcn_step_khz(NrBand(2)).is_err());
        assert!(arfcn_step_khz(NrBand(259)).is_err());
        assert!(arfcn_step_khz(NrBand(0)).is_err());

        // Negative and out-of-range numbers take the same path
        assert_eq!(arfcn_step_khz(NrBand(-1)), Err(SsbError::UnsupportedBand(NrBand(-1))));
        assert_eq!(
            arfcn_step_khz(NrBand(100000)).unwrap_err().to_string(),
            "Unsupported band 100000. Please add it to the lookup table."
        );
    }

    #[test]
    fn test_supported_bands() {
        let bands: Vec<i64> = supported_bands().map(|b| b.number()).collect();
        assert_eq!(bands, vec![1, 3, 7, 20, 28, 77, 78, 79, 257, 258, 260, 261]);

        // No band appears twice
        let mut dedup = bands.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), bands.len());
    }

    #[test]
    fn test_frequency_range() {
        for entry in ARFCN_STEP_KHZ {
            let expected = if entry.band.0 >= 257 {
                FrequencyRange::Fr2
            } else {
                FrequencyRange::Fr1
            };
            assert_eq!(entry.frequency_range(), expected);
        }
    }
}
