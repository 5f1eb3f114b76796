//! Easing functions for camera animation.
//!
//! Waypoint transitions use an ease-in-out curve so the camera accelerates
//! away from the source and settles gently at the destination.

/// Easing curve variants for tween interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic ease-in (slow start, fast end)
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end)
    QuadraticOut,
    /// Quadratic ease-in-out: slow at both ends, the walkthrough default
    #[default]
    QuadraticInOut,
}

impl EasingFunction {
    /// Evaluates the curve at time `t`.
    ///
    /// Input is clamped to [0, 1]; output is also in [0, 1] with
    /// f(0) = 0 and f(1) = 1 for every variant.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_for_all_variants() {
        let variants = [
            EasingFunction::Linear,
            EasingFunction::QuadraticIn,
            EasingFunction::QuadraticOut,
            EasingFunction::QuadraticInOut,
        ];
        for easing in variants {
            assert_eq!(easing.evaluate(0.0), 0.0);
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_in_out_midpoint_and_symmetry() {
        let easing = EasingFunction::QuadraticInOut;
        assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-6);
        // Symmetric about the midpoint
        assert!((easing.evaluate(0.25) + easing.evaluate(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_in_out_slow_at_ends() {
        let easing = EasingFunction::QuadraticInOut;
        // Early progress lags linear
        assert!(easing.evaluate(0.1) < 0.1);
        // Late progress leads linear
        assert!(easing.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_input_clamping() {
        let easing = EasingFunction::QuadraticInOut;
        assert_eq!(easing.evaluate(-1.0), 0.0);
        assert!((easing.evaluate(2.0) - 1.0).abs() < 1e-6);
    }
}
