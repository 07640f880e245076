//! Text calendar rendering.
//!
//! Turns schedules into a weekly grid (periods as rows, days as columns)
//! and formats it as a fixed-width table. Row and column order come from
//! the shared period table, so the calendar always matches the slots the
//! planner checked.
//!
//! A cell holding several courses joins their codes with `" / "`.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Course, CourseSchedule, Day, Period, TimeSlot};

/// Width of the `=` and `-` rule lines.
pub const RULE_WIDTH: usize = 100;
/// Width of the period label column.
pub const LABEL_WIDTH: usize = 24;
/// Minimum width of each day column; a wider label widens its column.
pub const CELL_WIDTH: usize = 15;

/// Separator between course codes sharing a cell.
pub const CELL_SEPARATOR: &str = " / ";

/// Course codes placed on the weekly grid.
///
/// Slots outside the week are ignored when placing codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotGrid {
    cells: BTreeMap<TimeSlot, Vec<String>>,
}

impl SlotGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid of one schedule: every lecture plus the chosen tutorial of each
    /// course, in course order.
    pub fn from_schedule(schedule: &CourseSchedule) -> Self {
        let mut grid = Self::new();
        for course in &schedule.courses {
            for &slot in &course.lectures {
                grid.place(slot, &course.code);
            }
            if let Some(slot) = schedule.tutorial_for(&course.code) {
                grid.place(slot, &course.code);
            }
        }
        grid
    }

    /// Grid of raw courses: every lecture and every tutorial option.
    pub fn from_courses(courses: &[Course]) -> Self {
        let mut grid = Self::new();
        for course in courses {
            for (slot, _) in course.all_time_slots() {
                grid.place(slot, &course.code);
            }
        }
        grid
    }

    /// Appends a label to a slot.
    pub fn place(&mut self, slot: TimeSlot, label: &str) {
        if slot.is_in_range() {
            self.cells.entry(slot).or_default().push(label.to_string());
        }
    }

    /// Cell text for a slot (empty when free).
    pub fn label(&self, slot: TimeSlot) -> String {
        self.cells
            .get(&slot)
            .map(|labels| labels.join(CELL_SEPARATOR))
            .unwrap_or_default()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Width of a day column: `CELL_WIDTH`, or the day's widest label plus
    /// one space when that is wider.
    pub fn column_width(&self, day: Day) -> usize {
        let widest = Period::ALL
            .iter()
            .map(|p| self.label(TimeSlot::new(day.index(), p.index)).chars().count())
            .max()
            .unwrap_or(0);
        CELL_WIDTH.max(widest + 1)
    }
}

impl fmt::Display for SlotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let widths: Vec<usize> = Day::ALL.iter().map(|&d| self.column_width(d)).collect();

        writeln!(f, "{heavy}")?;
        let mut header = format!("{:<LABEL_WIDTH$}", "Time Slot");
        for (day, &width) in Day::ALL.iter().zip(&widths) {
            header.push_str(&format!("{:<width$}", day.label()));
        }
        writeln!(f, "{}", header.trim_end())?;
        writeln!(f, "{heavy}")?;

        for period in &Period::ALL {
            let mut row = format!("{:<LABEL_WIDTH$}", period.row_label());
            for (day, &width) in Day::ALL.iter().zip(&widths) {
                let cell = self.label(TimeSlot::new(day.index(), period.index));
                row.push_str(&format!("{cell:<width$}"));
            }
            writeln!(f, "{}", row.trim_end())?;
            writeln!(f, "{light}")?;
        }
        Ok(())
    }
}

/// Numbered listing of enumerated schedules with a calendar for each.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a> {
    schedules: &'a [CourseSchedule],
}

impl<'a> ScheduleReport<'a> {
    /// Wraps a schedule list for display.
    pub fn new(schedules: &'a [CourseSchedule]) -> Self {
        Self { schedules }
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schedules.is_empty() {
            return writeln!(f, "No valid schedules found! All courses have conflicts.");
        }

        writeln!(f, "Found {} valid schedule(s):", self.schedules.len())?;
        let heavy = "=".repeat(RULE_WIDTH);

        for (idx, schedule) in self.schedules.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{heavy}")?;
            writeln!(
                f,
                "SCHEDULE #{} - {} course(s): [{}]",
                idx + 1,
                schedule.course_count(),
                schedule.codes().join(", ")
            )?;
            writeln!(f, "{heavy}")?;

            writeln!(f)?;
            writeln!(f, "Courses in this schedule:")?;
            for course in &schedule.courses {
                writeln!(f, "  • {course}")?;
                if let Some(slot) = schedule.tutorial_for(&course.code) {
                    writeln!(
                        f,
                        "    Tutorial: {slot} (from {} option(s))",
                        course.tutorials.len()
                    )?;
                }
            }

            writeln!(f)?;
            writeln!(f, "Calendar View:")?;
            write!(f, "{}", SlotGrid::from_schedule(schedule))?;
        }
        Ok(())
    }
}

/// The weekly calendar of one schedule.
pub fn render_calendar(schedule: &CourseSchedule) -> String {
    SlotGrid::from_schedule(schedule).to_string()
}

/// Full report of an enumeration result.
pub fn render_report(schedules: &[CourseSchedule]) -> String {
    ScheduleReport::new(schedules).to_string()
}

/// Numbering reference shown before slot entry.
pub fn render_slot_reference() -> String {
    let light = "-".repeat(60);
    let mut out = String::new();
    out.push_str("Time Slot Reference:\n");
    out.push_str(&format!("{light}\n"));
    out.push_str("Day numbers: 1-5 (DAY 1 = Monday, DAY 5 = Friday)\n");
    out.push_str("\nTime slot numbers:\n");
    for period in &Period::ALL {
        out.push_str(&format!("  {}: {period}\n", period.index));
    }
    out.push_str(&format!("{light}\n"));
    out
}
