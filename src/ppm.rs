// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Binary PPM output.  The P6 flavor is about the simplest image
//! container there is: a short ASCII header, then three bytes per
//! pixel, row by row from the top of the image.  Every field in the
//! header is separated by a single space, including a space between
//! the maximum channel value and the first pixel byte.

use std::io::{self, Write};

/// Write `pixels` to `output` as a P6 PPM of the given dimensions.
/// The buffer must hold exactly `width * height` RGB triples in
/// row-major order.  The writer is flushed before returning.
pub fn write_ppm<W: Write>(
    output: &mut W,
    width: usize,
    height: usize,
    pixels: &[u8],
) -> io::Result<()> {
    assert_eq!(pixels.len(), width * height * 3);
    write!(output, "P6 {} {} 255 ", width, height)?;
    output.write_all(pixels)?;
    output.flush()
}
