// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Destinations for rendered frames.
//!
//! The drivers never touch an encoder directly.  They evaluate a
//! frame and hand the grid of escape counts to a `FrameSink`, which
//! colours it however its format needs (full RGB for PNG, palette
//! indices for GIF, RGBA for the live window) and puts it somewhere.

use log::info;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::colour::{index, HotRamp};
use crate::error::{JuliaError, Result};
use crate::julia::IterationGrid;

/// Something that consumes rendered frames.
pub trait FrameSink {
    /// Take one frame.  `name` identifies the frame (for file based
    /// sinks it is the file stem).  A failure affects this frame only;
    /// the sink stays usable.
    fn accept(&mut self, name: &str, grid: &IterationGrid) -> Result<()>;

    /// How the frame called `name` is shown to the user once accepted.
    fn target(&self, name: &str) -> String {
        name.to_string()
    }

    /// Flush whatever the sink has been holding on to.
    fn finish(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Writes every frame to its own PNG file inside a directory.
pub struct PngFiles {
    dir: PathBuf,
    ramp: HotRamp,
}

impl PngFiles {
    /// Frames will be written as `<dir>/<name>.png`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        PngFiles {
            dir: dir.as_ref().to_path_buf(),
            ramp: HotRamp::default(),
        }
    }

    /// The full path the frame called `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }
}

impl FrameSink for PngFiles {
    fn accept(&mut self, name: &str, grid: &IterationGrid) -> Result<()> {
        self.ramp.colourize(grid).save(self.path_for(name))?;
        Ok(())
    }

    fn target(&self, name: &str) -> String {
        format!("{}.png", name)
    }
}

/// Collects frames as palette indices and writes them out as a single
/// looping GIF when finished.
pub struct GifAnimation {
    path: PathBuf,
    delay: u16,
    palette: Vec<u8>,
    size: Option<(u16, u16)>,
    frames: Vec<Vec<u8>>,
}

impl GifAnimation {
    /// `delay` is the time each frame is shown, in hundredths of a
    /// second.
    pub fn new<P: AsRef<Path>>(path: P, delay: u16) -> Self {
        let palette = HotRamp::default()
            .palette()
            .iter()
            .flat_map(|rgb| rgb.iter().cloned())
            .collect();
        GifAnimation {
            path: path.as_ref().to_path_buf(),
            delay,
            palette,
            size: None,
            frames: vec![],
        }
    }

    /// Where the animation will be written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The number of frames accepted so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True until the first frame is accepted.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn gif_side(side: usize) -> Result<u16> {
    match u16::try_from(side) {
        Ok(0) => Err(JuliaError::Dimensions("a GIF frame cannot be empty".to_string())),
        Ok(side) => Ok(side),
        Err(_) => Err(JuliaError::Dimensions(format!(
            "{} pixels is too large for a GIF",
            side
        ))),
    }
}

impl FrameSink for GifAnimation {
    fn accept(&mut self, _name: &str, grid: &IterationGrid) -> Result<()> {
        let size = (gif_side(grid.width())?, gif_side(grid.height())?);
        match self.size {
            None => self.size = Some(size),
            Some(expected) if expected != size => {
                return Err(JuliaError::Dimensions(format!(
                    "frame is {}x{} but the animation is {}x{}",
                    size.0, size.1, expected.0, expected.1
                )))
            }
            Some(_) => {}
        }
        self.frames.push(index(grid));
        Ok(())
    }

    fn target(&self, _name: &str) -> String {
        self.path.display().to_string()
    }

    fn finish(self) -> Result<()> {
        let (width, height) = self.size.ok_or_else(|| {
            JuliaError::Dimensions("an animation needs at least one frame".to_string())
        })?;

        let output = File::create(&self.path)?;
        info!(
            "encoding {} frames of {}x{} to {}",
            self.frames.len(),
            width,
            height,
            self.path.display()
        );
        let mut encoder = gif::Encoder::new(BufWriter::new(output), width, height, &self.palette)?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        for indices in &self.frames {
            let mut frame = gif::Frame::default();
            frame.width = width;
            frame.height = height;
            frame.delay = self.delay;
            frame.buffer = Cow::Borrowed(&indices[..]);
            encoder.write_frame(&frame)?;
        }
        let mut writer = encoder.into_inner()?;
        writer.flush()?;
        Ok(())
    }
}
