//! Course planning domain models.
//!
//! Provides the weekly slot grid, course offerings, and enumerated
//! schedules.
//!
//! # Domain Mappings
//!
//! | course-planner | Meaning |
//! |----------------|---------|
//! | TimeSlot | (day, period) cell of the weekly grid |
//! | Period | Named row of the fixed period table |
//! | Course | Offering with mandatory lectures and alternative tutorials |
//! | CourseSchedule | Conflict-free course subset with tutorial choices |

mod course;
mod schedule;
mod slot;

pub use course::{Course, SlotKind};
pub use schedule::{CourseSchedule, TutorialSelection};
pub(crate) use schedule::is_strict_code_subset;
pub use slot::{Day, Period, TimeSlot, DAYS_PER_WEEK, PERIODS_PER_DAY};
