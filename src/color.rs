// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A three-channel RGB color with saturating channel assignment, and
//! the small palette of named colors the default gradient draws from.

use num::clamp;

/// One byte per channel.  A `Color` can only ever hold legal channel
/// values; anything out of range is saturated on the way in, so there
/// is no error case to report.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Selects one of the three channels of a `Color`.  The gradient
/// mapper works a channel at a time, and the choice has to be spelled
/// out rather than implied by which accessor got called.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

fn saturate(value: i32) -> u8 {
    clamp(value, 0, 255) as u8
}

impl Color {
    /// Builds a color from three integer channel values.  Values below
    /// 0 become 0 and values above 255 become 255; everything else is
    /// stored as given.  `Color::default()` is black.
    pub fn new(red: i32, green: i32, blue: i32) -> Color {
        Color {
            red: saturate(red),
            green: saturate(green),
            blue: saturate(blue),
        }
    }

    /// The stored red value.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The stored green value.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The stored blue value.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The stored value of whichever channel `channel` names.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Replaces the red value, saturating as in `Color::new`.
    pub fn set_red(&mut self, red: i32) {
        self.red = saturate(red);
    }

    /// Replaces the green value, saturating as in `Color::new`.
    pub fn set_green(&mut self, green: i32) {
        self.green = saturate(green);
    }

    /// Replaces the blue value, saturating as in `Color::new`.
    pub fn set_blue(&mut self, blue: i32) {
        self.blue = saturate(blue);
    }
}

/// White.
pub const WHITE: Color = Color {
    red: 255,
    green: 255,
    blue: 255,
};
/// Pink.
pub const PINK: Color = Color {
    red: 238,
    green: 73,
    blue: 232,
};
/// Red.
pub const RED: Color = Color {
    red: 255,
    green: 0,
    blue: 0,
};
/// Maroon.
pub const MAROON: Color = Color {
    red: 87,
    green: 12,
    blue: 33,
};
/// Orange, leaning red.
pub const ORANGE: Color = Color {
    red: 255,
    green: 69,
    blue: 3,
};
/// Yellow.
pub const YELLOW: Color = Color {
    red: 255,
    green: 201,
    blue: 32,
};
/// Green.
pub const GREEN: Color = Color {
    red: 0,
    green: 255,
    blue: 100,
};
/// Blue.
pub const BLUE: Color = Color {
    red: 6,
    green: 41,
    blue: 160,
};
/// A darker blue.
pub const DARK_BLUE: Color = Color {
    red: 9,
    green: 4,
    blue: 71,
};
/// Purple.
pub const PURPLE: Color = Color {
    red: 60,
    green: 2,
    blue: 73,
};
/// Black.
pub const BLACK: Color = Color {
    red: 0,
    green: 0,
    blue: 0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_black() {
        assert_eq!(Color::default(), BLACK);
    }

    #[test]
    fn in_range_channels_are_stored_untouched() {
        let c = Color::new(87, 12, 33);
        assert_eq!(c.red(), 87);
        assert_eq!(c.green(), 12);
        assert_eq!(c.blue(), 33);
    }

    #[test]
    fn out_of_range_channels_saturate() {
        let c = Color::new(-10, 300, 128);
        assert_eq!(c.red(), 0);
        assert_eq!(c.green(), 255);
        assert_eq!(c.blue(), 128);

        let extremes = Color::new(i32::min_value(), i32::max_value(), 0);
        assert_eq!(extremes.red(), 0);
        assert_eq!(extremes.green(), 255);
    }

    #[test]
    fn setters_saturate_like_the_constructor() {
        let mut c = Color::default();
        c.set_red(-1);
        c.set_green(999);
        c.set_blue(64);
        assert_eq!((c.red(), c.green(), c.blue()), (0, 255, 64));
    }

    #[test]
    fn saturation_is_idempotent() {
        for value in &[-300, -1, 0, 1, 127, 254, 255, 256, 9000] {
            let mut c = Color::new(*value, *value, *value);
            let first = c.red();
            c.set_red(i32::from(first));
            assert_eq!(c.red(), first);
        }
    }

    #[test]
    fn channel_selector_matches_the_accessors() {
        let c = Color::new(1, 2, 3);
        assert_eq!(c.channel(Channel::Red), c.red());
        assert_eq!(c.channel(Channel::Green), c.green());
        assert_eq!(c.channel(Channel::Blue), c.blue());
    }
}
