//! Schedule enumeration.
//!
//! Finds every maximal set of courses that can be taken together: no two
//! lectures share a slot, and each course with tutorials gets one tutorial
//! slot that collides with nothing else in the set.
//!
//! # Operations
//!
//! - [`lectures_conflict`]: lecture clash test for a course set
//! - [`tutorial_combinations`]: all valid tutorial selections for a set
//! - [`find_all_valid_schedules`]: exhaustive search plus maximality filter
//!
//! The search is exhaustive and exponential in the number of courses. It is
//! meant for hand-entered course lists; callers bound the input size
//! (see [`crate::config::PlannerConfig::max_courses`]).

mod conflict;
mod enumerate;
mod tutorials;

pub use conflict::lectures_conflict;
pub use enumerate::{find_all_valid_schedules, PlanOutcome, ScheduleEnumerator, SearchStats};
pub use tutorials::tutorial_combinations;
