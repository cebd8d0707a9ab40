// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fixed parameters for every driver.  Running any driver with its
//! preset untouched reproduces the stock renders.

use num::Complex;

/// An orbit that leaves the disc of this radius is guaranteed to
/// diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Radius of the circle that animated `c` travels around.  Values near
/// 0.7885 keep `c` close to the boundary of the Mandelbrot set, where
/// the Julia sets are the most interesting.
pub const SWEEP_RADIUS: f64 = 0.7885;

/// Angle advanced per frame when writing a PNG frame sequence.
pub const FRAME_STEP: f64 = 0.1;

/// Angle advanced per refresh in the live window.  Deliberately
/// slower than `FRAME_STEP`.
pub const LIVE_STEP: f64 = 0.05;

/// Delay between GIF frames, in hundredths of a second.
pub const GIF_DELAY: u16 = 10;

/// File name prefix for everything written to disk.
pub const DEFAULT_PREFIX: &str = "julia";

/// Title of the live window.
pub const LIVE_TITLE: &str = "Real-time Julia Set Animation";

/// A handful of well-known Julia sets, in the order they are rendered.
pub const FAMOUS: [(&str, Complex<f64>); 4] = [
    ("dragon", Complex { re: -0.7269, im: 0.1889 }),
    ("rabbit", Complex { re: -0.8, im: 0.156 }),
    ("cauliflower", Complex { re: 0.285, im: 0.01 }),
    ("lightning", Complex { re: -0.4, im: 0.6 }),
];

/// Resolution, iteration cap and frame count for one driver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Iteration cap.
    pub limit: usize,
    /// Number of frames, for the animated drivers.
    pub frames: usize,
}

impl RenderConfig {
    /// The famous-sets batch: large stills.
    pub fn famous() -> Self {
        RenderConfig {
            width: 800,
            height: 800,
            limit: 100,
            frames: FAMOUS.len(),
        }
    }

    /// The PNG frame sequence.  63 frames at `FRAME_STEP` is a hair
    /// over one full turn.
    pub fn frames() -> Self {
        RenderConfig {
            width: 400,
            height: 400,
            limit: 50,
            frames: 63,
        }
    }

    /// The animated GIF: small, shallow, and exactly one turn.
    pub fn gif() -> Self {
        RenderConfig {
            width: 200,
            height: 200,
            limit: 30,
            frames: 32,
        }
    }

    /// The live window.  It never stops, so it has no frame count.
    pub fn live() -> Self {
        RenderConfig {
            width: 400,
            height: 400,
            limit: 50,
            frames: 0,
        }
    }

    /// Replace the resolution.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replace the iteration cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the frame count.
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }
}
