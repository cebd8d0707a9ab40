// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where `c` goes over the course of an animation.

use num::Complex;
use std::f64::consts::PI;

/// A route for the Julia constant, parameterised by frame number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CPath {
    /// Round a circle centred on the origin, `step` radians per frame,
    /// starting on the positive real axis.
    Circle {
        /// Distance from the origin.
        radius: f64,
        /// Angle advanced per frame.
        step: f64,
    },
    /// Rightwards along the real axis from -0.8 while wobbling through
    /// the imaginary axis, one fiftieth of a unit of time per frame.
    Line,
}

impl CPath {
    /// A circle that comes back to its start after exactly `frames`
    /// frames.
    pub fn closed_circle(radius: f64, frames: usize) -> Self {
        CPath::Circle {
            radius,
            step: 2.0 * PI / (frames.max(1) as f64),
        }
    }

    /// The value of `c` on frame `frame`.
    pub fn at(&self, frame: usize) -> Complex<f64> {
        match *self {
            CPath::Circle { radius, step } => Complex::from_polar(radius, frame as f64 * step),
            CPath::Line => {
                let t = frame as f64 / 50.0;
                Complex::new(-0.8 + 0.6 * t, 0.6 * (t * 3.0).sin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FRAME_STEP, LIVE_STEP, SWEEP_RADIUS};

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn circle_starts_on_the_real_axis() {
        let path = CPath::Circle {
            radius: SWEEP_RADIUS,
            step: FRAME_STEP,
        };
        assert!(close(path.at(0), Complex::new(SWEEP_RADIUS, 0.0)));
    }

    #[test]
    fn circle_stays_on_its_radius() {
        let path = CPath::Circle {
            radius: SWEEP_RADIUS,
            step: LIVE_STEP,
        };
        for frame in 0..500 {
            assert!((path.at(frame).norm() - SWEEP_RADIUS).abs() < 1e-12);
        }
    }

    #[test]
    fn closed_sweep_returns_to_its_start() {
        for frames in &[1, 8, 32, 63] {
            let path = CPath::closed_circle(SWEEP_RADIUS, *frames);
            assert!(close(path.at(0), path.at(*frames)), "frames = {}", frames);
        }
    }

    #[test]
    fn quarter_turn_is_purely_imaginary() {
        let path = CPath::closed_circle(1.0, 4);
        assert!(close(path.at(1), Complex::new(0.0, 1.0)));
        assert!(close(path.at(2), Complex::new(-1.0, 0.0)));
    }

    #[test]
    fn line_starts_at_minus_point_eight() {
        assert!(close(CPath::Line.at(0), Complex::new(-0.8, 0.0)));
        let c = CPath::Line.at(50);
        assert!(close(c, Complex::new(-0.2, 0.6 * 3.0f64.sin())));
    }
}
