// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything a single render needs, gathered into one value: image
//! dimensions, the viewed region, the iteration cap, the palette, and
//! the output name.  The presets are known-good regions to start from
//! rather than the only regions the renderer accepts.

use gradient::Gradient;
use std::path::PathBuf;

/// The fixed inputs of one render.  Construction performs no
/// validation; a nonsensical region is reported when the renderer is
/// built from the config, and a tiny iteration cap merely degrades
/// the gradient rather than failing.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub width: usize,
    /// Output image height in pixels.
    pub height: usize,
    /// Low bound of the viewed region along the real axis.
    pub x_min: f64,
    /// High bound of the viewed region along the real axis.
    pub x_max: f64,
    /// Low bound of the viewed region along the imaginary axis.
    pub y_min: f64,
    /// High bound of the viewed region along the imaginary axis.
    pub y_max: f64,
    /// Iteration cap for the escape-time measurement.
    pub max_iterations: usize,
    /// The four-block palette applied to escape counts.
    pub gradient: Gradient,
    /// Base name of the output file, without extension.
    pub image_name: String,
}

impl RenderConfig {
    /// The stock render: a 10000x10000 close-up of a spiral-laden
    /// patch just off seahorse valley, 500 iterations deep.
    pub fn classic() -> RenderConfig {
        RenderConfig {
            width: 10_000,
            height: 10_000,
            x_min: -0.749,
            x_max: -0.745,
            y_min: 0.105,
            y_max: 0.109,
            max_iterations: 500,
            gradient: Gradient::classic(),
            image_name: "mandelbrot".to_string(),
        }
    }

    /// The whole set in frame.
    pub fn full_set() -> RenderConfig {
        RenderConfig {
            x_min: -1.5,
            x_max: 0.5,
            y_min: -1.0,
            y_max: 1.0,
            ..RenderConfig::classic()
        }
    }

    /// The valley between the head and body, full of seahorses.
    pub fn seahorse_valley() -> RenderConfig {
        RenderConfig {
            x_min: -0.75,
            x_max: -0.74,
            y_min: 0.1,
            y_max: 0.11,
            ..RenderConfig::classic()
        }
    }

    /// A spiral just off the valley, framed a little wider.
    pub fn spiral() -> RenderConfig {
        RenderConfig {
            x_min: -0.748,
            x_max: -0.746,
            y_min: 0.105,
            y_max: 0.11,
            ..RenderConfig::classic()
        }
    }

    /// Where the image will be written: the base name with `.ppm`
    /// appended.  The suffix is always added, so a base name that
    /// already ends in `.ppm` gets a second one.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.ppm", self.image_name))
    }
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig::classic()
    }
}
