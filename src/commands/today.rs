//! Show today's puzzle identity

use crate::daily::DayKey;
use crate::output::print_today;

/// Print the day key, puzzle number and next-puzzle date
pub fn run_today(day: DayKey) {
    print_today(day);
}
