//! Weekly time-slot model.
//!
//! The week is a fixed grid of five teaching days by seven named periods.
//! The period table is a single process-wide constant shared by the planner
//! (conflict checks) and the calendar renderer (row order and labels).
//!
//! # Indexing
//! Days and periods are 0-based internally: day 0 is `DAY 1`, period 0 is
//! `Morning 1`. Users type 1-based day numbers; the input layer converts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching days per week.
pub const DAYS_PER_WEEK: usize = 5;

/// Number of periods per teaching day.
pub const PERIODS_PER_DAY: usize = 7;

/// A named teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u8);

impl Day {
    /// All days in display order.
    pub const ALL: [Day; DAYS_PER_WEEK] = [Day(0), Day(1), Day(2), Day(3), Day(4)];

    /// Day at a 0-based index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        ((index as usize) < DAYS_PER_WEEK).then_some(Day(index))
    }

    /// 0-based index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Display label, e.g. `DAY 1`.
    pub fn label(self) -> String {
        format!("DAY {}", self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DAY {}", self.0 + 1)
    }
}

/// One row of the period table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// 0-based position in the day.
    pub index: u8,
    /// Period name, e.g. `Morning 1`.
    pub name: &'static str,
    /// Clock range, e.g. `8:30-10:20`.
    pub time: &'static str,
}

impl Period {
    /// The period table, in display order.
    pub const ALL: [Period; PERIODS_PER_DAY] = [
        Period {
            index: 0,
            name: "Morning 1",
            time: "8:30-10:20",
        },
        Period {
            index: 1,
            name: "Morning 2",
            time: "10:30-11:50",
        },
        Period {
            index: 2,
            name: "Afternoon 1",
            time: "13:30-15:20",
        },
        Period {
            index: 3,
            name: "Afternoon 2",
            time: "15:30-16:50",
        },
        Period {
            index: 4,
            name: "Evening 1",
            time: "18:00-18:50",
        },
        Period {
            index: 5,
            name: "Evening 2",
            time: "19:00-19:50",
        },
        Period {
            index: 6,
            name: "Evening 3",
            time: "20:00-20:50",
        },
    ];

    /// Period at a 0-based index, if in range.
    pub fn from_index(index: u8) -> Option<&'static Period> {
        static TABLE: [Period; PERIODS_PER_DAY] = Period::ALL;
        TABLE.get(index as usize)
    }

    /// Row label used by the calendar, e.g. `Morning 1 8:30-10:20`.
    pub fn row_label(&self) -> String {
        format!("{} {}", self.name, self.time)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.time)
    }
}

/// A weekly time slot: (day index, period index).
///
/// Equality of both components is the only conflict criterion; there is no
/// notion of partial overlap. Ordering is day-major.
///
/// Construction does not range-check, so the planner stays total over any
/// input. Use [`TimeSlot::checked`] or [`crate::validation`] to reject
/// out-of-range slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day index (0..5).
    pub day: u8,
    /// Period index (0..7).
    pub period: u8,
}

impl TimeSlot {
    /// Creates a time slot without range checks.
    pub const fn new(day: u8, period: u8) -> Self {
        Self { day, period }
    }

    /// Creates a time slot only if both indices are within the week grid.
    pub fn checked(day: u8, period: u8) -> Option<Self> {
        let slot = Self::new(day, period);
        slot.is_in_range().then_some(slot)
    }

    /// Whether both indices fall within the week grid.
    #[inline]
    pub fn is_in_range(&self) -> bool {
        (self.day as usize) < DAYS_PER_WEEK && (self.period as usize) < PERIODS_PER_DAY
    }

    /// The day, if in range.
    pub fn day(&self) -> Option<Day> {
        Day::from_index(self.day)
    }

    /// The period table entry, if in range.
    pub fn period(&self) -> Option<&'static Period> {
        Period::from_index(self.period)
    }

    /// Every in-range slot of the week, day-major.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..DAYS_PER_WEEK as u8)
            .flat_map(|d| (0..PERIODS_PER_DAY as u8).map(move |p| TimeSlot::new(d, p)))
    }
}

impl From<(u8, u8)> for TimeSlot {
    fn from((day, period): (u8, u8)) -> Self {
        Self::new(day, period)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.day(), self.period()) {
            (Some(day), Some(period)) => write!(f, "{day} {period}"),
            _ => write!(f, "({}, {})", self.day, self.period),
        }
    }
}
