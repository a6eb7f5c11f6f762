//! Declarative tween timelines sampled by progress.
//!
//! A [`ScrollTimeline`] is a list of [`Tween`]s, each interpolating one
//! target element between two [`Pose`]s over a sub-span of the timeline.
//! The same structure drives both playback modes: scrubbed timelines are
//! sampled directly from scroll progress, reveal timelines from elapsed
//! time. Sampling is a pure function of progress, so reversing scroll
//! direction replays the same poses backwards for free.

use crate::core::easing::Ease;

/// CSS length unit for translation offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Unit {
    #[default]
    Px,
    Vw,
    Vh,
}

impl Unit {
    fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        }
    }
}

/// A length with its unit, kept symbolic so viewport-relative offsets
/// survive resizes without recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Len {
    pub value: f64,
    pub unit: Unit,
}

impl Len {
    pub fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub fn vw(value: f64) -> Self {
        Self { value, unit: Unit::Vw }
    }

    pub fn vh(value: f64) -> Self {
        Self { value, unit: Unit::Vh }
    }

    /// Interpolate between two lengths. Mixed units interpolate the raw
    /// values and keep whichever endpoint's unit is attached to a nonzero
    /// value; a zero endpoint adopts the other side's unit.
    fn lerp(a: Len, b: Len, t: f64) -> Len {
        let unit = if a.unit == b.unit {
            a.unit
        } else if a.value == 0.0 {
            b.unit
        } else {
            a.unit
        };
        Len {
            value: a.value + (b.value - a.value) * t,
            unit,
        }
    }

    fn css(&self) -> String {
        format!("{}{}", self.value, self.unit.suffix())
    }
}

/// The visual state a tween drives: translation, scale, rotation, opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: Len,
    pub y: Len,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: Len::px(0.0),
            y: Len::px(0.0),
            scale: 1.0,
            rotate: 0.0,
            opacity: 1.0,
        }
    }
}

impl Pose {
    /// The resting pose: untransformed, fully opaque.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, len: Len) -> Self {
        self.x = len;
        self
    }

    pub fn y(mut self, len: Len) -> Self {
        self.y = len;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        Pose {
            x: Len::lerp(self.x, to.x, t),
            y: Len::lerp(self.y, to.y, t),
            scale: self.scale + (to.scale - self.scale) * t,
            rotate: self.rotate + (to.rotate - self.rotate) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    /// CSS `transform` value for this pose.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}, {}) rotate({}deg) scale({})",
            self.x.css(),
            self.y.css(),
            self.rotate,
            self.scale
        )
    }
}

/// One interpolation: `target` moves from `from` to `to` across
/// `[at, at + span]` on the timeline's position axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub at: f64,
    pub span: f64,
    pub from: Pose,
    pub to: Pose,
    pub ease: Ease,
    /// Whether the `from` pose renders before the tween starts. Deferred
    /// tweens stay silent while the timeline rests at position 0, so a
    /// late exit tween does not clobber another effect animating the same
    /// element.
    pub immediate: bool,
}

impl Tween {
    /// Start a tween for `target`; position 0, unit span, resting
    /// endpoints, linear ease until overridden.
    pub fn of(target: usize) -> Self {
        Self {
            target,
            at: 0.0,
            span: 1.0,
            from: Pose::default(),
            to: Pose::default(),
            ease: Ease::Linear,
            immediate: true,
        }
    }

    pub fn at(mut self, at: f64) -> Self {
        self.at = at;
        self
    }

    pub fn span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    pub fn from(mut self, pose: Pose) -> Self {
        self.from = pose;
        self
    }

    pub fn to(mut self, pose: Pose) -> Self {
        self.to = pose;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Hold the `from` pose back until the timeline has moved off its
    /// start.
    pub fn deferred(mut self) -> Self {
        self.immediate = false;
        self
    }

    fn sample(&self, pos: f64) -> Pose {
        let local = if self.span > 0.0 {
            ((pos - self.at) / self.span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.from.lerp(&self.to, self.ease.apply(local))
    }
}

/// How a registration's timeline is driven.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    /// Play forward once when the trigger activates, reverse when it
    /// deactivates. Positions on the timeline are seconds.
    Reveal,
    /// Progress keyed to scroll position within the trigger's span, with an
    /// optional smoothing lag in seconds. Positions are span fractions.
    Scrub { lag: f64 },
}

/// An ordered set of tweens over a shared position axis.
#[derive(Clone, Debug, Default)]
pub struct ScrollTimeline {
    tweens: Vec<Tween>,
}

impl ScrollTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Clone `tween` across `targets`, offsetting each copy's start by
    /// `step` — the staggered-cards pattern.
    pub fn stagger<I>(mut self, targets: I, step: f64, tween: Tween) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        for (i, target) in targets.into_iter().enumerate() {
            let mut t = tween;
            t.target = target;
            t.at = tween.at + step * i as f64;
            self.tweens.push(t);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Timeline extent on the position axis.
    pub fn duration(&self) -> f64 {
        self.tweens
            .iter()
            .map(|t| t.at + t.span)
            .fold(0.0, f64::max)
    }

    /// Sample every target's pose at `progress` in `[0, 1]`.
    ///
    /// Per target, the tween in effect is the last-declared one that has
    /// started (`at <= pos`), clamped to its end once passed — so chained
    /// entrance/exit tweens on one element hand over cleanly. Before any
    /// tween starts, the target sits at its first tween's `from` pose,
    /// except for deferred tweens while the timeline rests at 0.
    pub fn sample_into(&self, progress: f64, out: &mut Vec<(usize, Pose)>) {
        out.clear();
        let pos = progress.clamp(0.0, 1.0) * self.duration();
        for tween in &self.tweens {
            let pose = if tween.at <= pos {
                Some(tween.sample(pos))
            } else if (tween.immediate || pos > 0.0)
                && !out.iter().any(|(target, _)| *target == tween.target)
            {
                Some(tween.from)
            } else {
                None
            };
            if let Some(pose) = pose {
                match out.iter_mut().find(|(target, _)| *target == tween.target) {
                    Some(slot) => slot.1 = pose,
                    None => out.push((tween.target, pose)),
                }
            }
        }
    }

    pub fn sample(&self, progress: f64) -> Vec<(usize, Pose)> {
        let mut out = Vec::new();
        self.sample_into(progress, &mut out);
        out
    }
}
