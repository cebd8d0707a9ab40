// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A window that redraws the Julia set on every refresh, walking `c`
//! slowly round the sweep circle.  The pixel buffer is a fixed size;
//! resizing the window only scales it.

use image::Rgb;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use std::convert::TryFrom;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::colour::HotRamp;
use crate::config::{RenderConfig, LIVE_TITLE, SWEEP_RADIUS};
use crate::error::{JuliaError, Result};
use crate::julia::IterationGrid;
use crate::path::CPath;
use crate::render::evaluate;
use crate::sink::FrameSink;

/// Copy a grid into an RGBA byte buffer of the same dimensions.
pub fn fill_rgba(frame: &mut [u8], grid: &IterationGrid, ramp: &HotRamp) -> Result<()> {
    if frame.len() != grid.counts().len() * 4 {
        return Err(JuliaError::Dimensions(format!(
            "a {}x{} grid does not fit a {} byte frame",
            grid.width(),
            grid.height(),
            frame.len()
        )));
    }
    let limit = grid.limit();
    for (pixel, &count) in frame.chunks_exact_mut(4).zip(grid.counts()) {
        let Rgb([r, g, b]) = ramp.colour(count, limit);
        pixel.copy_from_slice(&[r, g, b, 0xff]);
    }
    Ok(())
}

/// The pixel buffer dimensions for `cfg`.  The buffer needs at least
/// one pixel on each side.
pub fn buffer_size(cfg: &RenderConfig) -> Result<(u32, u32)> {
    match (u32::try_from(cfg.width), u32::try_from(cfg.height)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(JuliaError::Display(format!(
            "cannot open a {}x{} window",
            cfg.width, cfg.height
        ))),
    }
}

/// Presents each accepted frame on a window surface.
pub struct WindowSink {
    pixels: Pixels,
    ramp: HotRamp,
}

impl WindowSink {
    /// Wrap a pixel buffer that is already bound to a window.
    pub fn new(pixels: Pixels) -> Self {
        WindowSink {
            pixels,
            ramp: HotRamp::default(),
        }
    }

    /// Follow the window to a new size.  The buffer keeps its own.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.pixels
            .resize_surface(width.max(1), height.max(1))
            .map_err(|e| JuliaError::Display(e.to_string()))
    }
}

impl FrameSink for WindowSink {
    fn accept(&mut self, _name: &str, grid: &IterationGrid) -> Result<()> {
        fill_rgba(self.pixels.frame_mut(), grid, &self.ramp)?;
        self.pixels
            .render()
            .map_err(|e| JuliaError::Display(e.to_string()))
    }

    fn target(&self, _name: &str) -> String {
        "window".to_string()
    }
}

/// Open the window and animate until it is closed.  Failing to create
/// the window or its surface is returned as an error; failing to draw
/// once running ends the process with status 1.
pub fn run(cfg: RenderConfig, step: f64, threads: usize) -> Result<()> {
    let (width, height) = buffer_size(&cfg)?;
    let event_loop = EventLoop::new();
    let size = LogicalSize::new(cfg.width as f64, cfg.height as f64);
    let window = WindowBuilder::new()
        .with_title(LIVE_TITLE)
        .with_inner_size(size)
        .build(&event_loop)
        .map_err(|e| JuliaError::Display(e.to_string()))?;

    let surface_size = window.inner_size();
    let surface = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
    let pixels = Pixels::new(width, height, surface)
        .map_err(|e| JuliaError::Display(e.to_string()))?;
    let mut sink = WindowSink::new(pixels);
    info!(
        "live view {}x{}, {} iterations, {} rad/frame",
        cfg.width, cfg.height, cfg.limit, step
    );

    let path = CPath::Circle {
        radius: SWEEP_RADIUS,
        step,
    };
    let mut frame = 0usize;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                if let Err(e) = sink.resize(size.width, size.height) {
                    error!("{}", e);
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                let drawn = evaluate(path.at(frame), &cfg, threads)
                    .and_then(|grid| sink.accept("live", &grid));
                match drawn {
                    Ok(()) => frame = frame.wrapping_add(1),
                    Err(e) => {
                        error!("{}", e);
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
            }
            _ => {}
        }
    })
}
