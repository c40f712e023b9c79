//! Progress-driven animation math
//!
//! A single progress scalar drives both the scale and the opacity of the
//! popover. Curves are pure functions so the same numbers can feed any
//! rendering target.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Easing curves used by popover transitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Identity
    Linear,
    /// Ease-out of a back curve; overshoots past 1 before settling
    OutBack(f32),
    /// Symmetric quadratic ease-in-out
    InOutQuad,
}

impl Easing {
    /// Curve used when opening
    pub fn open() -> Self {
        Easing::OutBack(1.0)
    }

    /// Curve used when closing
    pub fn close() -> Self {
        Easing::InOutQuad
    }

    /// Map linear time `t` in [0, 1] through the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::OutBack(s) => {
                let back = |t: f32| t * t * ((s + 1.0) * t - s);
                1.0 - back(1.0 - t)
            }
            Easing::InOutQuad => {
                if t < 0.5 {
                    (t * 2.0).powi(2) / 2.0
                } else {
                    1.0 - ((1.0 - t) * 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Linear interpolation of `value` from an input range onto an output range
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    output.0 + (value - input.0) / span * (output.1 - output.0)
}

/// A running tween of the progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Start a transition
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Advance the clock, saturating at the duration
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Fraction of the duration consumed
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.fraction())
    }

    /// Whether the transition reached its target
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Target value
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Time left until completion
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}

/// Progress scalar shared by the scale and opacity interpolations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedValue {
    value: f32,
}

impl AnimatedValue {
    /// Create a value
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Current raw progress, used as the scale factor
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Set the raw progress
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Opacity derived from progress over [0, 1]
    pub fn opacity(&self) -> f32 {
        interpolate(self.value, (0.0, 1.0), (0.0, 1.0)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::open(), Easing::close()] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
        }
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::open().apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_in_out_quad_is_symmetric() {
        assert!(approx(Easing::InOutQuad.apply(0.5), 0.5));
        assert!(approx(Easing::InOutQuad.apply(0.25), 0.125));
        assert!(approx(Easing::InOutQuad.apply(0.75), 0.875));
    }

    #[test]
    fn test_transition_runs_to_target() {
        let mut t = Transition::new(0.0, 1.0, Duration::from_millis(300), Easing::Linear);
        t.advance(Duration::from_millis(150));
        assert!(approx(t.value(), 0.5));
        assert!(!t.is_finished());
        assert_eq!(t.remaining(), Duration::from_millis(150));

        t.advance(Duration::from_millis(500));
        assert!(t.is_finished());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let t = Transition::new(1.0, 0.0, Duration::ZERO, Easing::close());
        assert!(t.is_finished());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_interpolate_degenerate_range() {
        assert_eq!(interpolate(0.3, (1.0, 1.0), (0.0, 1.0)), 0.0);
        assert!(approx(AnimatedValue::new(0.4).opacity(), 0.4));
    }
}
