//! Unit conversion utilities.
//!
//! The presentation model measures lengths in screen pixels (96 per inch) and
//! angles in degrees. PresentationML stores lengths in EMUs (English Metric
//! Units, 914400 per inch) and angles in 60000ths of a degree.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const PIXELS_PER_INCH: f64 = 96.0;
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// Convert a pixel length to EMUs, rounding to the nearest unit.
///
/// Negative lengths pass through unchanged in sign; flipped connectors rely on it.
///
/// # Examples
///
/// ```
/// use slidewright::common::unit::px_to_emu;
/// assert_eq!(px_to_emu(1.0), 9525);
/// assert_eq!(px_to_emu(-50.0), -476_250);
/// ```
#[inline]
pub fn px_to_emu(px: f64) -> i64 {
    (px * EMUS_PER_INCH as f64 / PIXELS_PER_INCH).round() as i64
}

/// Convert EMUs back to pixels, rounding to the nearest pixel.
#[inline]
pub fn emu_to_px(emu: i64) -> f64 {
    (emu as f64 * PIXELS_PER_INCH / EMUS_PER_INCH as f64).round()
}

/// Convert a point size to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Convert degrees to the 60000ths-of-a-degree angle unit.
///
/// # Examples
///
/// ```
/// use slidewright::common::unit::degrees_to_angle;
/// assert_eq!(degrees_to_angle(45.0), 2_700_000);
/// ```
#[inline]
pub fn degrees_to_angle(degrees: f64) -> i64 {
    (degrees * ANGLE_UNITS_PER_DEGREE).round() as i64
}

/// Convert an angle in 60000ths of a degree back to degrees.
#[inline]
pub fn angle_to_degrees(angle: i64) -> f64 {
    angle as f64 / ANGLE_UNITS_PER_DEGREE
}

/// Angle attribute value for a rotation, or `None` when it is the implicit zero.
///
/// Zero is the schema default and is never written out.
#[inline]
pub fn nonzero_angle(degrees: f64) -> Option<i64> {
    match degrees_to_angle(degrees) {
        0 => None,
        angle => Some(angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_px_to_emu() {
        assert_eq!(px_to_emu(0.0), 0);
        assert_eq!(px_to_emu(10.0), 95_250);
        assert_eq!(px_to_emu(96.0), EMUS_PER_INCH);
        assert_eq!(px_to_emu(-20.0), -190_500);
    }

    #[test]
    fn test_px_to_emu_rounds() {
        // 0.5px = 4762.5 EMU
        assert_eq!(px_to_emu(0.5), 4_763);
        assert_eq!(px_to_emu(1.0 / 3.0), 3_175);
    }

    #[test]
    fn test_degrees_to_angle() {
        assert_eq!(degrees_to_angle(0.0), 0);
        assert_eq!(degrees_to_angle(90.0), 5_400_000);
        assert_eq!(degrees_to_angle(-30.5), -1_830_000);
        assert_eq!(angle_to_degrees(5_400_000), 90.0);
    }

    #[test]
    fn test_nonzero_angle() {
        assert_eq!(nonzero_angle(0.0), None);
        assert_eq!(nonzero_angle(-0.0), None);
        assert_eq!(nonzero_angle(0.000_001), None);
        assert_eq!(nonzero_angle(15.0), Some(900_000));
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_emu(2.5), 31_750);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_pixel_round_trip(px in -100_000i64..100_000i64) {
            let px = px as f64;
            let back = emu_to_px(px_to_emu(px));
            prop_assert!((back - px).abs() <= 1.0, "{} -> {}", px, back);
        }

        #[test]
        fn prop_fractional_pixel_round_trip(px in -10_000.0f64..10_000.0f64) {
            let back = emu_to_px(px_to_emu(px));
            prop_assert!((back - px).abs() <= 1.0, "{} -> {}", px, back);
        }
    }
}
