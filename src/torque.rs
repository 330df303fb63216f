/// Torque from a calibrated force reading and the bench lever arm.
pub fn torque_nm(units: f32, arm_length_mm: f32) -> f32 {
    units * arm_length_mm / 1000.0
}

/// Encode a torque in hundredths for the wire: round half away from zero,
/// then truncate to 16 bits two's-complement. Magnitudes past 327.67 wrap
/// rather than saturate; the receiving side expects exactly this.
pub fn encode_centi(torque: f32) -> i16 {
    round_half_away_from_zero(torque * 100.0) as i16
}

// C-style cast rounding: add or subtract a half, truncate toward zero.
fn round_half_away_from_zero(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(encode_centi(21.0856), 2109);
        assert_eq!(encode_centi(-3.728), -373);
        assert_eq!(encode_centi(0.0), 0);
    }

    #[test]
    fn full_scale_fits_in_sixteen_bits() {
        assert_eq!(encode_centi(320.0), 32000);
        assert_eq!(encode_centi(-320.0), -32000);
    }

    #[test]
    fn past_full_scale_wraps_twos_complement() {
        assert_eq!(encode_centi(328.0), -32736);
        assert_eq!(encode_centi(-328.0), 32736);
    }

    #[test]
    fn torque_scales_with_arm_length() {
        assert_relative_eq!(torque_nm(10.0, 730.425), 7.30425, epsilon = 1e-4);
        assert_relative_eq!(torque_nm(-5.0, 1000.0), -5.0, epsilon = 1e-4);
        assert_relative_eq!(torque_nm(0.0, 730.425), 0.0);
    }
}
