//! Colour calibration for bonus values.

use crate::matrix::HeatmapMatrix;

const LOW: [u8; 3] = [0xff, 0xff, 0xff];
const HIGH: [u8; 3] = [0x07, 0x4b, 0x70];
const EXPONENT: f64 = 0.4;

/// Power scale from `[0, max_bonus]` onto a white → dark blue ramp.
///
/// Handed to renderers explicitly, one per view. With `max_bonus == 0`
/// every value maps to the low end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusScale {
    max_bonus: f64,
    exponent: f64,
}

impl BonusScale {
    pub fn new(max_bonus: f64) -> Self {
        Self {
            max_bonus,
            exponent: EXPONENT,
        }
    }

    pub fn for_matrix(matrix: &HeatmapMatrix) -> Self {
        Self::new(matrix.max_bonus)
    }

    pub fn max_bonus(&self) -> f64 {
        self.max_bonus
    }

    /// Position of `value` along the ramp, clamped to `[0, 1]`.
    pub fn intensity(&self, value: f64) -> f64 {
        if self.max_bonus <= 0.0 || value <= 0.0 {
            return 0.0;
        }
        let t = value.min(self.max_bonus).powf(self.exponent) / self.max_bonus.powf(self.exponent);
        t.clamp(0.0, 1.0)
    }

    pub fn rgb(&self, value: f64) -> [u8; 3] {
        let t = self.intensity(value);
        let mut out = [0u8; 3];
        for (i, channel) in out.iter_mut().enumerate() {
            let low = f64::from(LOW[i]);
            let high = f64::from(HIGH[i]);
            *channel = (low + (high - low) * t).round() as u8;
        }
        out
    }

    pub fn hex(&self, value: f64) -> String {
        let [r, g, b] = self.rgb(value);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let scale = BonusScale::new(20.0);
        assert_eq!(scale.hex(0.0), "#ffffff");
        assert_eq!(scale.hex(20.0), "#074b70");
        assert_eq!(scale.intensity(40.0), 1.0);
    }

    #[test]
    fn test_power_curve_lifts_small_values() {
        let scale = BonusScale::new(100.0);
        // 10^0.4 / 100^0.4 = 10^-0.4
        assert!((scale.intensity(10.0) - 0.398_107).abs() < 1e-5);
        assert!(scale.intensity(10.0) > 0.1);
    }

    #[test]
    fn test_flat_when_no_bonus() {
        let scale = BonusScale::new(0.0);
        assert_eq!(scale.intensity(0.0), 0.0);
        assert_eq!(scale.intensity(5.0), 0.0);
        assert_eq!(scale.hex(5.0), "#ffffff");
    }

    #[test]
    fn test_negative_values_clamp_low() {
        let scale = BonusScale::new(10.0);
        assert_eq!(scale.intensity(-3.0), 0.0);
    }
}
