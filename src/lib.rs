#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set belongs to a single complex constant `c`.  Take any
//! point `z` on the complex plane and keep replacing it with `z² + c`:
//! either the orbit stays close to the origin forever, or it runs off
//! to infinity, and once it is more than 2 from the origin it never
//! comes back.  The points that stay form the filled Julia set.  The
//! number of steps the other points take to get past 2 is their
//! "escape time", and colouring every pixel by its escape time gives
//! the familiar pictures.
//!
//! Everything here is built around one evaluator (`julia::Julia`) and
//! one colour ramp (`colour::HotRamp`).  The drivers in `render` feed
//! them values of `c`, either a fixed list of well known sets or a
//! path that `c` follows over time, and hand the results to a
//! `sink::FrameSink`: a directory of PNGs, an animated GIF, or (with
//! the `live` feature) a window.

pub mod colour;
pub mod config;
pub mod error;
pub mod julia;
#[cfg(feature = "live")]
pub mod live;
pub mod path;
pub mod planes;
pub mod render;
pub mod sink;

pub use colour::HotRamp;
pub use error::{JuliaError, Result};
pub use julia::{IterationGrid, Julia};
pub use path::CPath;
pub use planes::PlaneMapper;
pub use sink::{FrameSink, GifAnimation, PngFiles};
