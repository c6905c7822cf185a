#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set lives on the complex plane: take a point `c`,
//! start with `z = 0`, and repeatedly apply `z ← z² + c`.  For some
//! points `z` shoots off to infinity; for the points of the set itself
//! it never does.  The number of applications it takes `|z|` to leave
//! the circle of radius 2 is a measure of how fast the point diverges,
//! and that "velocity" is the only number this crate ever computes.
//!
//! Everything else is presentation.  Each pixel of the output image is
//! mapped to a point of the viewed region, its velocity is measured,
//! and the velocity picks a color: the iteration range is cut into
//! four blocks, each of which fades linearly between two fixed colors.
//! The pixels leave the renderer as raw bytes in a PPM P6 stream,
//! which is about the simplest image format that other software still
//! agrees to open.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate num;

pub mod color;
pub mod config;
pub mod escape;
pub mod gradient;
pub mod planes;
pub mod ppm;
pub mod renderer;
pub mod timing;

pub use color::{Channel, Color};
pub use config::RenderConfig;
pub use escape::escape_time;
pub use gradient::{Gradient, Segment};
pub use planes::{PlaneError, PlaneMapper};
pub use renderer::{render_to_file, Renderer};
