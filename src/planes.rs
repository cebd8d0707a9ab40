// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! viewport.
use num::Complex;

use crate::error::{JuliaError, Result};

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl ComplexPlane {
    /// The square `[-2,2] × [-2,2]`, which contains every Julia set of
    /// the quadratic family.
    pub fn square() -> Self {
        ComplexPlane(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0))
    }
}

/// Describes the x, y of a pixel in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps points from one to the other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Width and height of the complex plane.  Kept as spans rather than
    // per-pixel steps so that pixel_to_point multiplies before it
    // divides.
    spans: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if rightupper.re < leftlower.re {
            return Err(JuliaError::Viewport(
                "the left lower corner is not to the left of the right upper corner".to_string(),
            ));
        }

        if rightupper.im < leftlower.im {
            return Err(JuliaError::Viewport(
                "the left lower corner is not lower than the right upper corner".to_string(),
            ));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            spans: (rightupper.re - leftlower.re, rightupper.im - leftlower.im),
        })
    }

    /// A mapper over the default `[-2,2]²` viewport.  That viewport is
    /// well formed, so unlike `new` this cannot fail.
    pub fn square(width: usize, height: usize) -> PlaneMapper {
        let ComplexPlane(leftlower, rightupper) = ComplexPlane::square();
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            spans: (rightupper.re - leftlower.re, rightupper.im - leftlower.im),
        }
    }

    /// Width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the same relative position on the complex
    /// plane.  The left and lower edges are sampled; the right and
    /// upper edges are not.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let ComplexPlane(origin, _) = self.complex_plane;
        Complex::new(
            origin.re + (pixel.0 as f64) * self.spans.0 / (self.integral_plane.0 as f64),
            origin.im + (pixel.1 as f64) * self.spans.1 / (self.integral_plane.1 as f64),
        )
    }
}
