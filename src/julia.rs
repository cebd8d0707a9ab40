// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.
//!
//! A Julia set is drawn by taking every pixel of the image, mapping
//! it to a starting point `z` on the complex plane, and repeatedly
//! replacing `z` with `z² + c` for some fixed `c`.  Points whose orbit
//! runs off past the escape radius are outside the set; the number of
//! steps it took them to get there is what gets coloured.  Points that
//! are still inside after `limit` steps are presumed to be in the
//! filled Julia set.

use itertools::iproduct;
use log::debug;
use num::Complex;

use crate::config::ESCAPE_RADIUS;
use crate::error::{JuliaError, Result};
use crate::planes::{Pixel, PlaneMapper};

/// The escape counts for every pixel of one frame, in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    limit: usize,
    counts: Vec<usize>,
}

impl IterationGrid {
    /// Width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The iteration cap the grid was computed with.  A count equal to
    /// the limit means the point never escaped.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The escape count at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> usize {
        self.counts[y * self.width + x]
    }

    /// All the counts, row after row.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The counts one row at a time, top row (lowest imaginary part)
    /// first.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // chunks() panics on a zero chunk size.
        self.counts.chunks(self.width.max(1))
    }
}

/// A Julia set for one value of `c`, bound to a pixel plane and an
/// iteration cap.  Once built it is immutable; every call to
/// `iterations` recomputes the whole frame.
#[derive(Clone, Debug)]
pub struct Julia {
    c: Complex<f64>,
    plane: PlaneMapper,
    limit: usize,
    radius: f64,
}

impl Julia {
    /// Requires the constant `c`, the plane to draw on, and the number
    /// of iterations after which a point is presumed bounded.
    pub fn new(c: Complex<f64>, plane: PlaneMapper, limit: usize) -> Self {
        Julia {
            c,
            plane,
            limit,
            radius: ESCAPE_RADIUS,
        }
    }

    /// Replace the escape radius.  Anything under 2 cuts orbits off
    /// before they are known to diverge.
    pub fn with_escape_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// The constant this set is drawn for.
    pub fn c(&self) -> Complex<f64> {
        self.c
    }

    /// The plane this set is drawn on.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration cap.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Count how many times `z ← z² + c` can be applied to `start`
    /// while `|z|` stays within the escape radius, up to the limit.
    /// The modulus is checked before each step, so a starting point
    /// already outside the radius scores 0.
    #[inline]
    pub fn escape_time(&self, start: Complex<f64>) -> usize {
        let mut z = start;
        let mut count = 0;
        while count < self.limit && z.norm() <= self.radius {
            z = z * z + self.c;
            count += 1;
        }
        count
    }

    fn escape_time_at(&self, column: usize, row: usize) -> usize {
        self.escape_time(self.plane.pixel_to_point(&Pixel(column, row)))
    }

    fn grid(&self, counts: Vec<usize>) -> IterationGrid {
        IterationGrid {
            width: self.plane.width(),
            height: self.plane.height(),
            limit: self.limit,
            counts,
        }
    }

    /// The main function for single-threaded evaluation.
    pub fn iterations(&self) -> IterationGrid {
        let counts = iproduct!(0..self.plane.height(), 0..self.plane.width())
            .map(|(row, column)| self.escape_time_at(column, row))
            .collect();
        self.grid(counts)
    }

    /// A multi-threaded version of `iterations`.  The frame is cut into
    /// horizontal bands of whole rows, one scoped thread per band, each
    /// writing straight into its own slice of the result.  Every pixel
    /// is computed exactly as the single-threaded version computes it,
    /// so the two grids are identical.
    pub fn iterations_threaded(&self, threads: usize) -> Result<IterationGrid> {
        let width = self.plane.width();
        let height = self.plane.height();
        let mut counts = vec![0 as usize; self.plane.len()];
        if self.plane.is_empty() {
            return Ok(self.grid(counts));
        }

        let threads = threads.max(1).min(height);
        let band_rows = (height + threads - 1) / threads;
        debug!(
            "evaluating {}x{} in {} bands of {} rows",
            width, height, threads, band_rows
        );

        crossbeam::scope(|spawner| {
            for (band, region) in counts.chunks_mut(band_rows * width).enumerate() {
                spawner.spawn(move |_| {
                    let first_row = band * band_rows;
                    for (offset, count) in region.iter_mut().enumerate() {
                        *count = self.escape_time_at(offset % width, first_row + offset / width);
                    }
                });
            }
        })
        .map_err(|_| JuliaError::Worker)?;

        Ok(self.grid(counts))
    }
}
