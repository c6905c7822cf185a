// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time measurement at the heart of the renderer.

use num::Complex;

/// Counts how many applications of `z ← z² + c` it takes for `z` to
/// leave the circle of radius 2 around the origin, starting from
/// `z = 0` with `c = point`.
///
/// The escape test looks at the current `z` before each application,
/// so a point already outside the circle reports 1, not 0: the first
/// test always sees `z = 0`.  A point that is still inside once the
/// count passes `limit` reports `limit + 1` — the loop runs one
/// application beyond the cap before the cap check can stop it, and
/// the gradient mapper downstream counts on receiving exactly that
/// value for members of the set.  The result is therefore always in
/// `1..=limit + 1`.
pub fn escape_time(point: Complex<f64>, limit: usize) -> usize {
    let mut z = Complex { re: 0.0, im: 0.0 };
    let mut count = 0;
    while z.norm_sqr() < 4.0 && count <= limit {
        z = z * z + point;
        count += 1;
    }
    count
}
