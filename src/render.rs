// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The batch drivers.  Each one picks values of `c`, evaluates a frame
//! for every value, and passes the frames to a sink, reporting
//! progress as it goes.  A frame that cannot be written is reported
//! and skipped; the rest of the run carries on.

use log::{debug, warn};
use num::Complex;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::config::{RenderConfig, FAMOUS};
use crate::error::{JuliaError, Result};
use crate::julia::{IterationGrid, Julia};
use crate::path::CPath;
use crate::planes::PlaneMapper;
use crate::sink::{FrameSink, GifAnimation};

/// How a driver run went.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Frames the sink accepted.
    pub written: usize,
    /// Frames the sink refused.
    pub failed: usize,
}

/// Evaluate one frame for `c` over the square viewport.
pub fn evaluate(c: Complex<f64>, cfg: &RenderConfig, threads: usize) -> Result<IterationGrid> {
    let started = Instant::now();
    let plane = PlaneMapper::square(cfg.width, cfg.height);
    let grid = Julia::new(c, plane, cfg.limit).iterations_threaded(threads)?;
    debug!("c = {} evaluated in {:?}", c, started.elapsed());
    Ok(grid)
}

fn deliver<W: Write, S: FrameSink>(
    out: &mut W,
    sink: &mut S,
    name: &str,
    grid: &IterationGrid,
    summary: &mut Summary,
) -> Result<bool> {
    match sink.accept(name, grid) {
        Ok(()) => {
            summary.written += 1;
            Ok(true)
        }
        Err(err) => {
            warn!("skipping {}: {}", name, err);
            summary.failed += 1;
            writeln!(out, "Error saving {}: {}", sink.target(name), err)?;
            Ok(false)
        }
    }
}

/// Render every set in `FAMOUS`, naming each frame `<prefix>_<name>`.
pub fn famous<W: Write, S: FrameSink>(
    out: &mut W,
    sink: &mut S,
    cfg: &RenderConfig,
    threads: usize,
    prefix: &str,
) -> Result<Summary> {
    let mut summary = Summary::default();
    writeln!(out, "Generating famous Julia sets...")?;
    for (name, c) in FAMOUS.iter() {
        writeln!(
            out,
            "Generating {} Julia set: c = {:.4}{:+.4}i",
            name, c.re, c.im
        )?;
        let grid = evaluate(*c, cfg, threads)?;
        let frame = format!("{}_{}", prefix, name);
        if deliver(out, sink, &frame, &grid, &mut summary)? {
            writeln!(out, "Saved {}", sink.target(&frame))?;
        }
    }
    Ok(summary)
}

/// Render `cfg.frames` frames with `c` following `path`, naming each
/// frame `<prefix>_frame_<NNN>`.  Works with any sink; `frames` and
/// `animation` are this plus their own banners.
pub fn sweep<W: Write, S: FrameSink>(
    out: &mut W,
    sink: &mut S,
    cfg: &RenderConfig,
    path: CPath,
    threads: usize,
    prefix: &str,
) -> Result<Summary> {
    let mut summary = Summary::default();
    for frame in 0..cfg.frames {
        let c = path.at(frame);
        writeln!(
            out,
            "Frame {}/{}: c = {:.3}{:+.3}i",
            frame + 1,
            cfg.frames,
            c.re,
            c.im
        )?;
        let grid = evaluate(c, cfg, threads)?;
        deliver(
            out,
            sink,
            &format!("{}_frame_{:03}", prefix, frame),
            &grid,
            &mut summary,
        )?;
    }
    Ok(summary)
}

/// Write a numbered frame sequence.
pub fn frames<W: Write, S: FrameSink>(
    out: &mut W,
    sink: &mut S,
    cfg: &RenderConfig,
    path: CPath,
    threads: usize,
    prefix: &str,
) -> Result<Summary> {
    writeln!(out, "Generating Julia set animation frames...")?;
    let summary = sweep(out, sink, cfg, path, threads, prefix)?;
    writeln!(out, "Animation frames saved!")?;
    writeln!(
        out,
        "To create GIF: convert {}_frame_*.png {}_animation.gif",
        prefix, prefix
    )?;
    Ok(summary)
}

/// Write a single looping GIF to `gif_path`.  If the file cannot be
/// created or encoded the failure is reported and every frame is
/// counted as failed.
pub fn animation<W: Write>(
    out: &mut W,
    cfg: &RenderConfig,
    path: CPath,
    threads: usize,
    gif_path: &Path,
    delay: u16,
) -> Result<Summary> {
    writeln!(out, "Creating animated Julia set GIF...")?;
    let mut sink = GifAnimation::new(gif_path, delay);
    let mut summary = sweep(out, &mut sink, cfg, path, threads, "")?;
    let target = sink.path().to_path_buf();
    debug!("{} frames collected for {}", sink.len(), target.display());
    match sink.finish() {
        Ok(()) => writeln!(out, "Animated GIF saved as {}!", target.display())?,
        Err(err) => {
            warn!("animation not written: {}", err);
            summary.failed += summary.written;
            summary.written = 0;
            match err {
                JuliaError::Io(_) => writeln!(out, "Error creating GIF file: {}", err)?,
                _ => writeln!(out, "Error encoding GIF: {}", err)?,
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SWEEP_RADIUS;
    use crate::sink::PngFiles;
    use tempfile::tempdir;

    /// Keeps what it is given in memory, and refuses every
    /// `refuse`-th frame.
    #[derive(Default)]
    struct Memory {
        names: Vec<String>,
        grids: Vec<IterationGrid>,
        refuse: usize,
    }

    impl FrameSink for Memory {
        fn accept(&mut self, name: &str, grid: &IterationGrid) -> Result<()> {
            if self.refuse > 0 && (self.names.len() + 1) % self.refuse == 0 {
                self.names.push(name.to_string());
                return Err(JuliaError::Dimensions("refused".to_string()));
            }
            self.names.push(name.to_string());
            self.grids.push(grid.clone());
            Ok(())
        }
    }

    fn tiny() -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 16,
            limit: 20,
            frames: 4,
        }
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn famous_renders_each_set_in_order() {
        let mut out = vec![];
        let mut sink = Memory::default();
        let summary = famous(&mut out, &mut sink, &tiny(), 2, "julia").unwrap();
        assert_eq!(summary, Summary { written: 4, failed: 0 });
        assert_eq!(
            sink.names,
            vec!["julia_dragon", "julia_rabbit", "julia_cauliflower", "julia_lightning"]
        );
        let out = text(out);
        assert!(out.contains("Generating dragon Julia set: c = -0.7269+0.1889i"));
        assert!(out.contains("Generating lightning Julia set: c = -0.4000+0.6000i"));
        assert!(out.contains("Saved julia_rabbit"));
    }

    #[test]
    fn sweep_names_frames_with_three_digits() {
        let mut out = vec![];
        let mut sink = Memory::default();
        let path = CPath::closed_circle(SWEEP_RADIUS, 4);
        sweep(&mut out, &mut sink, &tiny(), path, 1, "spin").unwrap();
        assert_eq!(
            sink.names,
            vec!["spin_frame_000", "spin_frame_001", "spin_frame_002", "spin_frame_003"]
        );
        let out = text(out);
        assert!(out.contains("Frame 1/4: c = 0.788+0.000i"));
        assert!(out.contains("Frame 2/4: c = 0.000+0.788i"));
    }

    #[test]
    fn refused_frames_are_reported_and_skipped() {
        let mut out = vec![];
        let mut sink = Memory {
            refuse: 2,
            ..Memory::default()
        };
        let path = CPath::closed_circle(SWEEP_RADIUS, 4);
        let summary = frames(&mut out, &mut sink, &tiny(), path, 1, "julia").unwrap();
        assert_eq!(summary, Summary { written: 2, failed: 2 });
        assert_eq!(sink.grids.len(), 2);
        let out = text(out);
        assert!(out.contains("Error saving julia_frame_001: invalid dimensions: refused"));
        assert!(out.contains("Frame 4/4"));
        assert!(out.ends_with("julia_animation.gif\n"));
    }

    #[test]
    fn frames_match_direct_evaluation() {
        let mut out = vec![];
        let mut sink = Memory::default();
        let path = CPath::Line;
        sweep(&mut out, &mut sink, &tiny(), path, 3, "line").unwrap();
        let direct = Julia::new(path.at(2), PlaneMapper::square(16, 16), 20).iterations();
        assert_eq!(sink.grids[2], direct);
    }

    #[test]
    fn frames_go_to_png_files() {
        let dir = tempdir().unwrap();
        let mut out = vec![];
        let mut sink = PngFiles::new(dir.path());
        let path = CPath::closed_circle(SWEEP_RADIUS, 4);
        let summary = frames(&mut out, &mut sink, &tiny(), path, 2, "julia").unwrap();
        assert_eq!(summary.written, 4);
        for frame in 0..4 {
            assert!(dir.path().join(format!("julia_frame_{:03}.png", frame)).exists());
        }
    }

    #[test]
    fn animation_writes_one_gif() {
        let dir = tempdir().unwrap();
        let gif_path = dir.path().join("julia_animation.gif");
        let mut out = vec![];
        let path = CPath::closed_circle(SWEEP_RADIUS, 4);
        let summary = animation(&mut out, &tiny(), path, 2, &gif_path, 10).unwrap();
        assert_eq!(summary, Summary { written: 4, failed: 0 });
        assert!(gif_path.exists());
        assert!(text(out).contains("Animated GIF saved as"));
    }

    #[test]
    fn animation_reports_an_uncreatable_file() {
        let dir = tempdir().unwrap();
        let gif_path = dir.path().join("missing").join("julia_animation.gif");
        let mut out = vec![];
        let path = CPath::closed_circle(SWEEP_RADIUS, 4);
        let summary = animation(&mut out, &tiny(), path, 1, &gif_path, 10).unwrap();
        assert_eq!(summary, Summary { written: 0, failed: 4 });
        assert!(text(out).contains("Error creating GIF file:"));
    }

    #[test]
    fn empty_animations_are_never_reported_as_saved() {
        let dir = tempdir().unwrap();
        let gif_path = dir.path().join("julia_animation.gif");
        let mut out = vec![];
        let path = CPath::closed_circle(SWEEP_RADIUS, 2);
        let cfg = tiny().with_size(0, 0).with_frames(2);
        let summary = animation(&mut out, &cfg, path, 1, &gif_path, 10).unwrap();
        assert_eq!(summary, Summary { written: 0, failed: 2 });
        assert!(!gif_path.exists());
        let out = text(out);
        assert!(out.contains("Error encoding GIF:"));
        assert!(!out.contains("Animated GIF saved as"));
    }
}
