// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps escape counts to colors.
//!
//! The iteration range `[0, limit]` is cut into four equal blocks, and
//! each block fades linearly between its own pair of colors.  Equal
//! blocks mean the palette is spent wherever the counts happen to
//! cluster; a histogram pass would spread it more evenly, and this
//! renderer deliberately doesn't have one.

use color::{Channel, Color};
use color::{BLACK, BLUE, GREEN, ORANGE, PURPLE, WHITE, YELLOW};

/// One quarter of the iteration range: a fade from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Color at the low-count edge of the block.
    pub start: Color,
    /// Color at the high-count edge of the block.
    pub end: Color,
}

impl Segment {
    /// A fade from `start` to `end`.
    pub fn new(start: Color, end: Color) -> Segment {
        Segment { start, end }
    }
}

/// The four fades covering the iteration range in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    /// Counts below a quarter of the limit.
    pub a: Segment,
    /// Counts from a quarter up to half.
    pub b: Segment,
    /// Counts from half up to three quarters.
    pub c: Segment,
    /// Everything above three quarters, members of the set included.
    pub d: Segment,
}

/// Linear fade between two channel endpoints, truncated toward zero.
/// The rate is computed first, exactly as `(end - start) / span`, and
/// `span` is trusted as given: block selection hands in counts that
/// can run past `span` (see `Gradient::channel`), and a `span` of
/// zero resolves through the saturating cast instead of panicking.
fn blend(start: u8, end: u8, local: usize, span: usize) -> i32 {
    let start = f64::from(start);
    let rate = (f64::from(end) - start) / (span as f64);
    (rate * (local as f64) + start) as i32
}

impl Gradient {
    /// Assembles a gradient from its four segments.
    pub fn new(a: Segment, b: Segment, c: Segment, d: Segment) -> Gradient {
        Gradient { a, b, c, d }
    }

    /// The stock palette: yellow to orange, blue to green, white to
    /// purple, and black to white for the quarter that holds the set
    /// itself.
    pub fn classic() -> Gradient {
        Gradient {
            a: Segment::new(YELLOW, ORANGE),
            b: Segment::new(BLUE, GREEN),
            c: Segment::new(WHITE, PURPLE),
            d: Segment::new(BLACK, WHITE),
        }
    }

    /// The block covering `count`, and the count at which it begins.
    /// Thresholds are the quarter points of `limit` computed in
    /// floating point, so selection depends only on the count and is
    /// the same for all three channels of a pixel.
    fn locate(&self, count: usize, limit: usize) -> (&Segment, usize) {
        let count = count as f64;
        let limit = limit as f64;
        if count < limit * 0.25 {
            (&self.a, 0)
        } else if count < limit * 0.5 {
            (&self.b, (limit * 0.25) as usize)
        } else if count < limit * 0.75 {
            (&self.c, (limit * 0.5) as usize)
        } else {
            (&self.d, (limit * 0.75) as usize)
        }
    }

    /// One channel of the color for an escape count.
    ///
    /// The interpolation span is `limit / 4` in integer division for
    /// every block.  When `limit` isn't a multiple of four the last
    /// block is effectively longer than that span, and member counts
    /// of `limit + 1` overrun it as well, so the fade can overshoot
    /// its end color; the value is returned un-clamped either way.
    /// `Gradient::shade` keeps the low byte, which is what lands in
    /// the output stream.
    pub fn channel(&self, channel: Channel, count: usize, limit: usize) -> i32 {
        let (segment, first) = self.locate(count, limit);
        blend(
            segment.start.channel(channel),
            segment.end.channel(channel),
            count - first,
            limit / 4,
        )
    }

    /// The red, green, and blue bytes for an escape count, in stream
    /// order.  Each channel value is reduced to its low byte.
    pub fn shade(&self, count: usize, limit: usize) -> [u8; 3] {
        [
            self.channel(Channel::Red, count, limit) as u8,
            self.channel(Channel::Green, count, limit) as u8,
            self.channel(Channel::Blue, count, limit) as u8,
        ]
    }
}

impl Default for Gradient {
    fn default() -> Gradient {
        Gradient::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: i32) -> Segment {
        Segment::new(Color::new(v, v, v), Color::new(v, v, v))
    }

    /// Four flat grays make the selected block readable off any
    /// channel value.
    fn stepped() -> Gradient {
        Gradient::new(gray(10), gray(20), gray(30), gray(40))
    }

    #[test]
    fn count_zero_is_exactly_the_first_start_color() {
        let g = Gradient::classic();
        assert_eq!(g.channel(Channel::Red, 0, 500), 255);
        assert_eq!(g.channel(Channel::Green, 0, 500), 201);
        assert_eq!(g.channel(Channel::Blue, 0, 500), 32);
    }

    #[test]
    fn a_count_just_under_the_cap_lands_near_the_final_end_color() {
        // Block d runs from 375; 499 sits at 124/125 of the fade from
        // black to white: 255/125 * 124 truncates to 252.
        let g = Gradient::classic();
        assert_eq!(g.channel(Channel::Green, 499, 500), 252);
    }

    #[test]
    fn a_count_at_the_cap_hits_the_final_end_color() {
        let g = Gradient::classic();
        assert_eq!(g.shade(500, 500), [255, 255, 255]);
    }

    #[test]
    fn member_counts_overshoot_the_final_block_and_keep_the_low_byte() {
        // Members report 501 for a cap of 500: 126/125 of the fade,
        // 255/125 * 126 = 257.04, truncated to 257, low byte 1.  Deep
        // in-set pixels come out near-black, not white.
        let g = Gradient::classic();
        assert_eq!(g.channel(Channel::Green, 501, 500), 257);
        assert_eq!(g.shade(501, 500), [1, 1, 1]);
    }

    #[test]
    fn block_boundaries_sit_at_the_float_quarter_points() {
        // A cap of 10 puts the thresholds at 2.5, 5.0, and 7.5.
        let g = stepped();
        for (count, value) in &[
            (0, 10),
            (2, 10),
            (3, 20),
            (4, 20),
            (5, 30),
            (7, 30),
            (8, 40),
            (10, 40),
            (11, 40),
        ] {
            assert_eq!(
                g.channel(Channel::Red, *count, 10),
                *value,
                "count {}",
                count
            );
        }
    }

    #[test]
    fn blends_truncate_toward_zero() {
        let g = Gradient::new(
            Segment::new(BLACK, Color::new(9, 9, 9)),
            gray(0),
            gray(0),
            gray(0),
        );
        // 9/10 of the way through count 3 of span 10 is 2.7.
        assert_eq!(g.channel(Channel::Red, 3, 40), 2);
    }

    #[test]
    fn a_cap_below_four_degrades_without_panicking() {
        // Span is 0: a rising fade saturates, a flat one goes NaN and
        // resolves to 0.  Either way, no panic and a byte comes out.
        let g = Gradient::classic();
        assert_eq!(g.channel(Channel::Red, 1, 0), i32::max_value());
        assert_eq!(g.shade(1, 0), [255, 255, 255]);

        let flat = Gradient::new(gray(0), gray(0), gray(0), gray(0));
        assert_eq!(flat.channel(Channel::Red, 1, 0), 0);
    }

    #[test]
    fn selection_only_depends_on_the_count() {
        let g = Gradient::classic();
        for count in &[0, 124, 125, 250, 374, 375, 499, 500, 501] {
            let bytes = g.shade(*count, 500);
            assert_eq!(bytes[0], g.channel(Channel::Red, *count, 500) as u8);
            assert_eq!(bytes[1], g.channel(Channel::Green, *count, 500) as u8);
            assert_eq!(bytes[2], g.channel(Channel::Blue, *count, 500) as u8);
        }
    }
}
