// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The renderer proper: sweep the plane row by row, measure the
//! escape velocity under each pixel, and let the gradient turn that
//! velocity into a color.  Rows are independent, so the same routine
//! that fills the whole buffer also fills a band of it, and the
//! threaded variant is nothing more than handing disjoint bands to a
//! scoped thread each.

extern crate crossbeam;

use failure::Error;
use num::Complex;
use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use config::RenderConfig;
use escape::escape_time;
use gradient::Gradient;
use planes::{PlaneError, PlaneMapper};
use ppm::write_ppm;

/// A plane to sweep, a palette to shade with, and an iteration cap.
/// Everything here is immutable once built, which is what lets the
/// banded render share one `Renderer` across threads.
#[derive(Clone, Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    gradient: Gradient,
    limit: usize,
}

impl Renderer {
    /// Build a renderer for the given configuration.  This is where a
    /// nonsensical region gets caught; the iteration cap and palette
    /// are taken as given.
    pub fn new(config: &RenderConfig) -> Result<Renderer, PlaneError> {
        let plane = PlaneMapper::new(
            config.width,
            config.height,
            Complex {
                re: config.x_min,
                im: config.y_min,
            },
            Complex {
                re: config.x_max,
                im: config.y_max,
            },
        )?;
        Ok(Renderer {
            plane,
            gradient: config.gradient,
            limit: config.max_iterations,
        })
    }

    /// Fill `band` with shaded pixels, starting at image row `top`.
    /// The band length must be a whole number of rows.
    fn render_rows(&self, top: usize, band: &mut [u8]) {
        let row_bytes = self.plane.width() * 3;
        for (offset, row) in band.chunks_mut(row_bytes).enumerate() {
            let y = top + offset;
            debug!("row {}", y);
            for (x, pixel) in row.chunks_mut(3).enumerate() {
                let point = self.plane.pixel_to_point(x, y);
                let count = escape_time(point, self.limit);
                pixel.copy_from_slice(&self.gradient.shade(count, self.limit));
            }
        }
    }

    /// Render the whole image into a fresh buffer, one row at a time,
    /// top row first.
    pub fn render(&self) -> Vec<u8> {
        let mut pixels = vec![0u8; self.plane.len() * 3];
        self.render_rows(0, &mut pixels);
        pixels
    }

    /// Render the image across `threads` scoped threads.  The buffer
    /// is split into bands of whole rows, one band per thread, so the
    /// result is byte for byte the same as `render` no matter how
    /// many threads are asked for.  Zero is treated as one.
    pub fn render_threaded(&self, threads: usize) -> Vec<u8> {
        let threads = threads.max(1);
        let mut pixels = vec![0u8; self.plane.len() * 3];
        let rows_per_band = self.plane.height() / threads + 1;
        let band_bytes = rows_per_band * self.plane.width() * 3;
        {
            let bands: Vec<&mut [u8]> = pixels.chunks_mut(band_bytes).collect();
            crossbeam::scope(|spawner| {
                for (index, band) in bands.into_iter().enumerate() {
                    let top = rows_per_band * index;
                    spawner.spawn(move |_| {
                        self.render_rows(top, band);
                    });
                }
            })
            .unwrap();
        }
        pixels
    }
}

/// Render the configured image and write it to the configured path as
/// binary PPM, returning how long the render and write took.  The
/// output file is created before any pixel is computed, so a bad path
/// is reported immediately rather than after a long render.
pub fn render_to_file(config: &RenderConfig, threads: usize) -> Result<Duration, Error> {
    let renderer = Renderer::new(config)?;
    let path = config.output_path();
    let mut output = BufWriter::new(File::create(&path)?);
    info!(
        "rendering {}x{} at {} iterations to {}",
        config.width,
        config.height,
        config.max_iterations,
        path.display()
    );
    let start = Instant::now();
    let pixels = if threads > 1 {
        renderer.render_threaded(threads)
    } else {
        renderer.render()
    };
    write_ppm(&mut output, config.width, config.height, &pixels)?;
    Ok(start.elapsed())
}
