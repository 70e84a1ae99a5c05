//! SSB Placement Library
//!
//! Derives the SSB subcarrier offset used to configure a UE from the
//! SSB/Point A ARFCNs, according to the NR channel raster of 3GPP TS 38.104.

pub mod band_table;
pub mod offset;

pub use band_table::{arfcn_step_khz, supported_bands, BandStep, FrequencyRange, ARFCN_STEP_KHZ};
pub use offset::{calculate_ssb_offset, OffsetRequest, SSB_HALF_WIDTH_SUBCARRIERS};

use common::types::NrBand;
use thiserror::Error;

/// Errors raised while deriving SSB placement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SsbError {
    #[error("Unsupported band {0}. Please add it to the lookup table.")]
    UnsupportedBand(NrBand),
}
