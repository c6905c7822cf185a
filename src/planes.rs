// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners.  Pixel row 0 maps to the low edge of the imaginary range,
//! so the picture is not flipped into mathematical orientation.

use num::Complex;

/// The ways a viewing region can fail to describe a renderable image.
#[derive(Debug, Fail)]
pub enum PlaneError {
    /// Width or height is zero; there are no pixels to map.
    #[fail(
        display = "the image is {}x{} pixels; there is nothing to render",
        width, height
    )]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// The real bounds are reversed.
    #[fail(
        display = "the left edge {} of the region is not left of the right edge {}",
        left, right
    )]
    ReversedReal {
        /// Requested low real bound.
        left: f64,
        /// Requested high real bound.
        right: f64,
    },
    /// The imaginary bounds are reversed.
    #[fail(
        display = "the lower edge {} of the region is not below the upper edge {}",
        lower, upper
    )]
    ReversedImaginary {
        /// Requested low imaginary bound.
        lower: f64,
        /// Requested high imaginary bound.
        upper: f64,
    },
}

/// Maps pixels of a width-by-height image onto points of a viewed
/// rectangle of the complex plane.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    // The leftlower corner of the viewed rectangle; pixel (0, 0).
    origin: Complex<f64>,
    // Per-pixel stride along each axis.
    step: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the pixel dimensions of the image and two
    /// points describing the viewed rectangle of the complex plane.
    /// Degenerate dimensions and reversed corners are rejected; a
    /// zero-area rectangle with corners in order is allowed and maps
    /// every pixel to the same point.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, PlaneError> {
        if width == 0 || height == 0 {
            return Err(PlaneError::EmptyImage { width, height });
        }
        if rightupper.re < leftlower.re {
            return Err(PlaneError::ReversedReal {
                left: leftlower.re,
                right: rightupper.re,
            });
        }
        if rightupper.im < leftlower.im {
            return Err(PlaneError::ReversedImaginary {
                lower: leftlower.im,
                upper: rightupper.im,
            });
        }

        // Both strides divide by the image width.  Vertically that
        // stretches or squashes any non-square image; square pixels
        // happen only when width == height.
        let step = Complex {
            re: (rightupper.re - leftlower.re) / (width as f64),
            im: (rightupper.im - leftlower.im) / (width as f64),
        };

        Ok(PlaneMapper {
            width,
            height,
            origin: leftlower,
            step,
        })
    }

    /// The image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels in the image.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the image holds no pixels at all.  `new` refuses to
    /// build such a mapper, so this is always false on a live one.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given the column and row of a pixel, return the point of the
    /// complex plane that the pixel samples.
    pub fn pixel_to_point(&self, column: usize, row: usize) -> Complex<f64> {
        Complex {
            re: self.origin.re + (column as f64) * self.step.re,
            im: self.origin.im + (row as f64) * self.step.im,
        }
    }
}
