// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning escape counts into colours.
//!
//! Every driver uses the same warm ramp: black for points that escape
//! immediately, through red and orange, to white for points that never
//! escape.  Each channel is the normalised count raised to a fixed
//! power, red linearly, green squared, blue cubed.

use image::{Rgb, RgbImage};

use crate::julia::IterationGrid;

/// A ramp from black to white where each channel follows `255·tⁿ` for
/// its own exponent `n`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HotRamp {
    /// Exponents for red, green and blue.
    pub exponents: [u32; 3],
}

impl Default for HotRamp {
    fn default() -> Self {
        HotRamp {
            exponents: [1, 2, 3],
        }
    }
}

impl HotRamp {
    // 255·t·t·…, multiplied left to right so the cubic ramp truncates
    // to exactly the same bytes as the stock renders.
    fn channel(t: f64, exponent: u32) -> u8 {
        let mut v = 255.0;
        for _ in 0..exponent {
            v *= t;
        }
        v as u8
    }

    fn ramp(&self, t: f64) -> [u8; 3] {
        [
            Self::channel(t, self.exponents[0]),
            Self::channel(t, self.exponents[1]),
            Self::channel(t, self.exponents[2]),
        ]
    }

    /// The colour of a pixel that took `count` of at most `limit`
    /// iterations to escape.  Points that never escaped are white.
    pub fn colour(&self, count: usize, limit: usize) -> Rgb<u8> {
        if count >= limit {
            return Rgb([255, 255, 255]);
        }
        Rgb(self.ramp(count as f64 / limit as f64))
    }

    /// The same ramp sampled at 256 evenly spaced points, for formats
    /// that need an indexed palette.
    pub fn palette(&self) -> Vec<[u8; 3]> {
        (0..256u32).map(|i| self.ramp(f64::from(i) / 255.0)).collect()
    }

    /// Colour a whole grid.
    pub fn colourize(&self, grid: &IterationGrid) -> RgbImage {
        let limit = grid.limit();
        RgbImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
            self.colour(grid.get(x as usize, y as usize), limit)
        })
    }
}

/// Position of `count` in the 256-entry palette.
pub fn palette_index(count: usize, limit: usize) -> u8 {
    if limit == 0 || count >= limit {
        return 255;
    }
    (count * 255 / limit) as u8
}

/// Palette indices for a whole grid, row-major.
pub fn index(grid: &IterationGrid) -> Vec<u8> {
    let limit = grid.limit();
    grid.counts()
        .iter()
        .map(|&count| palette_index(count, limit))
        .collect()
}
