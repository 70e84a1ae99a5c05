//! SSB Subcarrier Offset Calculation
//!
//! Computes the `--ssb` offset a UE needs to locate the SS/PBCH block
//! relative to Point A.

use crate::band_table::arfcn_step_khz;
use crate::SsbError;
use common::types::{Arfcn, NrBand, SubcarrierSpacing};
use common::utils::{arfcn_delta_to_khz, khz_to_subcarriers, round_half_even};
use tracing::debug;

/// Half of the 240-subcarrier SSB width
pub const SSB_HALF_WIDTH_SUBCARRIERS: f64 = 120.0;

/// Inputs for one offset calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRequest {
    /// absoluteFrequencySSB
    pub arfcn_ssb: Arfcn,
    /// absoluteFrequencyPointA
    pub arfcn_pointa: Arfcn,
    /// Subcarrier spacing
    pub scs: SubcarrierSpacing,
    /// Operating band
    pub band: NrBand,
}

impl OffsetRequest {
    /// Calculate the SSB offset for this request
    pub fn calculate(&self) -> Result<i128, SsbError> {
        calculate_ssb_offset(self.arfcn_ssb, self.arfcn_pointa, self.scs, self.band)
    }
}

/// Calculate the SSB start offset in subcarriers
///
/// The SSB center sits `(arfcn_ssb - arfcn_pointa) * step / scs` subcarriers
/// above Point A; the start is half an SSB (120 subcarriers) below that.
/// Ties are rounded to even. Only the band is validated.
///
/// The result is `i128`: ARFCNs far apart at the ends of the `i64` range
/// give offsets past `i64::MAX`.
pub fn calculate_ssb_offset(
    arfcn_ssb: Arfcn,
    arfcn_pointa: Arfcn,
    scs: SubcarrierSpacing,
    band: NrBand,
) -> Result<i128, SsbError> {
    let step_khz = arfcn_step_khz(band)?;

    let delta_arfcn = arfcn_ssb.delta(arfcn_pointa);
    let delta_freq_khz = arfcn_delta_to_khz(delta_arfcn, step_khz);
    let center_subcarrier_offset = khz_to_subcarriers(delta_freq_khz, scs.as_khz());
    let ssb_start_offset = round_half_even(center_subcarrier_offset - SSB_HALF_WIDTH_SUBCARRIERS);

    debug!(
        "n{}: delta {} ARFCN x {} kHz = {} kHz, center {} subcarriers @ {}, offset {}",
        band,
        delta_arfcn,
        step_khz,
        delta_freq_khz,
        center_subcarrier_offset,
        scs,
        ssb_start_offset
    );

    Ok(ssb_start_offset)
}
