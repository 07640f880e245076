//! Course-schedule conflict finder.
//!
//! Given courses with mandatory lecture slots and alternative tutorial
//! slots on a fixed 5-day × 7-period week, finds every maximal set of
//! courses that can be taken together, with one non-clashing tutorial per
//! course, and prints each as a weekly calendar.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Period`, `Day`, `Course`,
//!   `CourseSchedule`
//! - **`planner`**: Schedule enumeration (lecture conflicts, tutorial
//!   selection, maximality filter)
//! - **`validation`**: Input integrity checks (duplicate codes, slot ranges)
//! - **`calendar`**: Fixed-width calendar and report rendering
//! - **`input`**: Interactive line-based course entry
//! - **`generator`**: Seeded random course catalogues
//! - **`config`**, **`error`**: Limits, defaults, and error types for the
//!   layers around the planner
//!
//! # Example
//!
//! ```
//! use course_planner::models::Course;
//! use course_planner::planner::find_all_valid_schedules;
//!
//! let math = Course::new("MAT1001")
//!     .with_lecture(0, 0)
//!     .with_tutorial(1, 1)
//!     .with_tutorial(2, 1);
//! let physics = Course::new("PHY1001")
//!     .with_lecture(0, 2)
//!     .with_tutorial(1, 1)
//!     .with_tutorial(3, 2);
//!
//! let schedules = find_all_valid_schedules(&[math, physics]);
//! assert_eq!(schedules.len(), 3);
//! assert!(schedules.iter().all(|s| s.course_count() == 2));
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod models;
pub mod planner;
pub mod validation;

pub use error::{PlannerError, Result};
