//! Easing curves for timeline interpolation and the snap animation.

/// Easing function applied to a normalized progress value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Overshooting ease-out, used for badge/square pop-ins.
    BackOut,
}

/// Overshoot amount for [`Ease::BackOut`].
const BACK_OVERSHOOT: f64 = 1.7;

impl Ease {
    /// Apply the curve to `t`. Input is clamped to `[0, 1]`; `BackOut` may
    /// return values above 1 mid-curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut => {
                let s = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}
