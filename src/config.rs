use embassy_time::Duration;

/// HX711 wiring, carried as plain pin numbers for the board support layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub dout: u8,
    pub clock: u8,
}

/// Fixed build-time parameters of one test bench.
///
/// The calibration factor is obtained with the interactive calibration
/// runner and a set of reference weights, see the bench documentation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    /// Raw converter counts per force unit.
    pub calibration_factor: f32,
    /// Lever arm between load cell and axle, millimeters.
    pub torque_arm_length_mm: f32,
    pub sample_period: Duration,
    pub pins: PinAssignment,
    /// Clamp negative torque to zero before encoding.
    pub positive_only: bool,
}

/// 10 kg element, TSDZ2 bench (730.425 mm arm).
pub const TSDZ2_BENCH: Profile = Profile {
    calibration_factor: 245.94,
    torque_arm_length_mm: 730.425,
    sample_period: Duration::from_millis(95),
    pins: PinAssignment { dout: 3, clock: 2 },
    positive_only: false,
};

/// 10 kg element, Hongrunda bench (1 m arm, rear traction motor).
pub const HR_BENCH: Profile = Profile {
    calibration_factor: 241.74,
    torque_arm_length_mm: 1000.0,
    sample_period: Duration::from_millis(95),
    pins: PinAssignment { dout: 3, clock: 2 },
    positive_only: false,
};
