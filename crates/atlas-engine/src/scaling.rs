//! Level → intensity curves.

use atlas_core::constants::{METRIC_SCALING, ORGAN_BENEFICIAL_SCALING, ORGAN_HARMFUL_SCALING};
use atlas_core::Level;

/// The named scaling curves. Each subsystem uses its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingCurve {
    /// Effect model application: `[0, 0.30, 0.65, 1.00]`.
    Metric,
    /// Harmful organ contributions: `[0, 0.30, 0.60, 1.00]`.
    OrganHarmful,
    /// Beneficial organ contributions: `[0, 0.40, 0.70, 0.90]`.
    OrganBeneficial,
}

impl ScalingCurve {
    pub fn factors(self) -> &'static [f64; 4] {
        match self {
            Self::Metric => &METRIC_SCALING,
            Self::OrganHarmful => &ORGAN_HARMFUL_SCALING,
            Self::OrganBeneficial => &ORGAN_BENEFICIAL_SCALING,
        }
    }

    /// Intensity for a validated level. Never clamps: `Level` is already
    /// guaranteed to be in range.
    pub fn intensity(self, level: Level) -> f64 {
        self.factors()[level.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_start_at_zero_and_increase() {
        for curve in [
            ScalingCurve::Metric,
            ScalingCurve::OrganHarmful,
            ScalingCurve::OrganBeneficial,
        ] {
            assert_eq!(curve.intensity(Level::ZERO), 0.0);
            let f = curve.factors();
            assert!(f.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn named_values() {
        assert_eq!(ScalingCurve::Metric.intensity(Level::TWO), 0.65);
        assert_eq!(ScalingCurve::OrganHarmful.intensity(Level::TWO), 0.60);
        assert_eq!(ScalingCurve::OrganBeneficial.intensity(Level::THREE), 0.90);
    }
}
