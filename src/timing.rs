// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reporting how long a render took, in the three units anyone ever
//! wants: raw milliseconds, whole seconds, and minutes with the
//! leftover seconds.  Each coarser unit is derived from the one
//! before it by integer division, so the fractions simply drop away.

use std::time::Duration;

/// Format an elapsed time as a three-line report.  Only "minute"
/// bends to grammar; a lone leftover second is still reported as
/// "1 seconds".
pub fn summary(elapsed: Duration) -> String {
    let milliseconds = elapsed.as_millis();
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let leftover = seconds % 60;
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!(
        "Time in milliseconds: {} milliseconds\n\
         Time in seconds: {} seconds\n\
         Time in minutes: {} {} and {} seconds",
        milliseconds, seconds, minutes, unit, leftover
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fast_render_is_all_zeroes() {
        assert_eq!(
            summary(Duration::from_millis(0)),
            "Time in milliseconds: 0 milliseconds\n\
             Time in seconds: 0 seconds\n\
             Time in minutes: 0 minutes and 0 seconds"
        );
    }

    #[test]
    fn fractions_of_a_second_survive_only_in_the_first_line() {
        assert_eq!(
            summary(Duration::from_millis(73_120)),
            "Time in milliseconds: 73120 milliseconds\n\
             Time in seconds: 73 seconds\n\
             Time in minutes: 1 minute and 13 seconds"
        );
    }

    #[test]
    fn exactly_one_minute_is_singular() {
        assert_eq!(
            summary(Duration::from_secs(60)),
            "Time in milliseconds: 60000 milliseconds\n\
             Time in seconds: 60 seconds\n\
             Time in minutes: 1 minute and 0 seconds"
        );
    }

    #[test]
    fn two_minutes_are_plural_again() {
        assert_eq!(
            summary(Duration::from_secs(120)),
            "Time in milliseconds: 120000 milliseconds\n\
             Time in seconds: 120 seconds\n\
             Time in minutes: 2 minutes and 0 seconds"
        );
    }
}
