// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type shared by the evaluator, the sinks and the
//! drivers.

use failure::Fail;
use std::io;

/// Everything that can go wrong while rendering a Julia set.  The
/// computation itself cannot fail; only the planes it runs on, the
/// workers that run it, and the places its output goes can.
#[derive(Debug, Fail)]
pub enum JuliaError {
    /// Creating or writing an output file failed.
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),

    /// The PNG encoder rejected the image.
    #[fail(display = "{}", _0)]
    Image(#[cause] image::ImageError),

    /// The GIF encoder rejected the animation.
    #[fail(display = "{}", _0)]
    Gif(#[cause] gif::EncodingError),

    /// The complex plane's corners are the wrong way around.
    #[fail(display = "invalid viewport: {}", _0)]
    Viewport(String),

    /// The pixel grid cannot be represented by the output format.
    #[fail(display = "invalid dimensions: {}", _0)]
    Dimensions(String),

    /// A render thread panicked before finishing its band.
    #[fail(display = "render worker failed")]
    Worker,

    /// The live window or its drawing surface could not be created
    /// or presented.
    #[fail(display = "display error: {}", _0)]
    Display(String),
}

impl From<io::Error> for JuliaError {
    fn from(err: io::Error) -> Self {
        JuliaError::Io(err)
    }
}

impl From<image::ImageError> for JuliaError {
    fn from(err: image::ImageError) -> Self {
        JuliaError::Image(err)
    }
}

impl From<gif::EncodingError> for JuliaError {
    fn from(err: gif::EncodingError) -> Self {
        JuliaError::Gif(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, JuliaError>;
