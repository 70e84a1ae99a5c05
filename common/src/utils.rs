//! Common Utilities
//!
//! Numeric helpers used by the NR offset calculations

use tracing::trace;

/// Round to the nearest integer, ties to even
///
/// Returned as `i128` so offsets derived from any pair of `i64` ARFCNs are
/// exact. Only values beyond the `i128` range saturate; NaN maps to 0.
pub fn round_half_even(value: f64) -> i128 {
    let rounded = value.round_ties_even();

    trace!("Rounded {} to {}", value, rounded);

    rounded as i128
}

/// Frequency distance in kHz covered by `delta` channel steps
pub fn arfcn_delta_to_khz(delta: i128, step_khz: u32) -> i128 {
    delta * i128::from(step_khz)
}

/// Number of subcarriers (possibly fractional) spanned by `freq_khz`
pub fn khz_to_subcarriers(freq_khz: i128, scs_khz: u32) -> f64 {
    freq_khz as f64 / f64::from(scs_khz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(130.0), 130);
        assert_eq!(round_half_even(0.4), 0);
        assert_eq!(round_half_even(0.6), 1);

        // Ties go to the even neighbour
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(-119.5), -120);
        assert_eq!(round_half_even(-118.5), -118);
    }

    #[test]
    fn test_round_saturates() {
        assert_eq!(round_half_even(f64::INFINITY), i128::MAX);
        assert_eq!(round_half_even(f64::NEG_INFINITY), i128::MIN);
        assert_eq!(round_half_even(f64::NAN), 0);
    }

    #[test]
    fn test_round_beyond_i64() {
        // 2^66 is exact in f64 and must not clamp to i64::MAX
        let value = 73_786_976_294_838_206_464.0_f64;
        assert_eq!(round_half_even(value), 73_786_976_294_838_206_464_i128);
        assert_eq!(round_half_even(-value), -73_786_976_294_838_206_464_i128);
    }

    #[test]
    fn test_frequency_helpers() {
        // 500 channels at 15 kHz raster = 7.5 MHz
        assert_eq!(arfcn_delta_to_khz(500, 15), 7500);
        assert_eq!(arfcn_delta_to_khz(-2, 60), -120);

        assert_eq!(khz_to_subcarriers(7500, 30), 250.0);
        assert_eq!(khz_to_subcarriers(45, 30), 1.5);
    }
}
