//! Easing functions for tweens
//!
//! The classic Penner catalogue in its four-argument form: each curve maps
//! `(elapsed, start, change, duration)` to an interpolated value.

use std::f64::consts::{FRAC_PI_2, PI};

/// Easing function type
///
/// Variants are plain values, so two tweens configured with the same curve
/// compare equal and a curve can be matched on directly.
///
/// Contract, for every variant: `apply(0, b, c, d) == b`,
/// `apply(d, b, c, d) == b + c`, monotonic in between. A zero duration is
/// not guarded; callers own that edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircIn,
    CircOut,
    CircInOut,
}

impl Easing {
    /// The full catalogue, for table-driven tests and curve pickers.
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
    ];

    /// Interpolate: `t` is the elapsed time, `b` the start value, `c` the
    /// total change, `d` the duration. Time and value units are the
    /// caller's, as long as `t` and `d` agree.
    pub fn apply(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            Easing::Linear => c * t / d + b,
            Easing::QuadIn => {
                let t = t / d;
                c * t * t + b
            }
            Easing::QuadOut => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            Easing::QuadInOut => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t * t + b
                } else {
                    let t = t - 1.0;
                    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
                }
            }
            Easing::CubicIn => {
                let t = t / d;
                c * t * t * t + b
            }
            Easing::CubicOut => {
                let t = t / d - 1.0;
                c * (t * t * t + 1.0) + b
            }
            Easing::CubicInOut => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t * t * t + b
                } else {
                    let t = t - 2.0;
                    c / 2.0 * (t * t * t + 2.0) + b
                }
            }
            Easing::SineIn => -c * (t / d * FRAC_PI_2).cos() + c + b,
            Easing::SineOut => c * (t / d * FRAC_PI_2).sin() + b,
            Easing::SineInOut => -c / 2.0 * ((PI * t / d).cos() - 1.0) + b,
            Easing::CircIn => {
                let t = t / d;
                -c * ((1.0 - t * t).sqrt() - 1.0) + b
            }
            Easing::CircOut => {
                let t = t / d - 1.0;
                c * (1.0 - t * t).sqrt() + b
            }
            Easing::CircInOut => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
                } else {
                    let t = t - 2.0;
                    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
                }
            }
        }
    }
}
