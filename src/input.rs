//! Interactive, line-based course entry.
//!
//! Prompts for each course's code, name, lecture slots and tutorial slots,
//! re-prompting on invalid answers. Generic over its streams so it can be
//! driven from a terminal or from in-memory buffers.
//!
//! End of input at any prompt ends collection: a half-entered course is
//! dropped and the completed ones are returned.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::calendar::render_slot_reference;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{Course, SlotKind, TimeSlot, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// Answer that ends a slot list or the course list.
const FINISH: &str = "e";

/// Reads courses from `input`, writing prompts and messages to `output`.
pub struct CourseReader<R, W> {
    input: R,
    output: W,
    config: PlannerConfig,
}

impl<R: BufRead, W: Write> CourseReader<R, W> {
    /// Creates a reader.
    pub fn new(input: R, output: W, config: PlannerConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Collects courses until the user finishes, input ends, or the course
    /// limit is reached.
    pub fn read_courses(&mut self) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = Vec::new();

        loop {
            if courses.len() >= self.config.max_courses {
                writeln!(
                    self.output,
                    "\nCourse limit ({}) reached.",
                    self.config.max_courses
                )?;
                break;
            }

            let rule = "=".repeat(60);
            writeln!(self.output, "\n{rule}")?;
            writeln!(self.output, "Please add course #{}.", courses.len() + 1)?;
            writeln!(self.output, "{rule}")?;

            let Some(course) = self.read_course(&courses)? else {
                break;
            };
            debug!(
                code = %course.code,
                lectures = course.lectures.len(),
                tutorials = course.tutorials.len(),
                "course added"
            );
            courses.push(course);

            let Some(answer) =
                self.prompt("\nPress ENTER to add another course; press 'e' to finish: ")?
            else {
                break;
            };
            if answer.eq_ignore_ascii_case(FINISH) {
                break;
            }
        }

        Ok(courses)
    }

    /// Reads one course; `None` if input ended first.
    fn read_course(&mut self, existing: &[Course]) -> Result<Option<Course>> {
        let code = loop {
            let Some(code) = self.prompt("Please input the course code: ")? else {
                return Ok(None);
            };
            if code.is_empty() {
                writeln!(self.output, "[ERROR] Course code cannot be empty.")?;
            } else if existing.iter().any(|c| c.code == code) {
                writeln!(
                    self.output,
                    "[ERROR] Duplicated course code. Please enter a different code."
                )?;
            } else {
                break code;
            }
        };

        let question = format!(
            "Please input the course name ({} by default): ",
            self.config.default_course_name
        );
        let Some(name) = self.prompt(&question)? else {
            return Ok(None);
        };
        let name = if name.is_empty() {
            self.config.default_course_name.clone()
        } else {
            name
        };

        let Some(lectures) = self.read_slots(SlotKind::Lecture)? else {
            return Ok(None);
        };
        let Some(tutorials) = self.read_slots(SlotKind::Tutorial)? else {
            return Ok(None);
        };

        Ok(Some(
            Course::new(code)
                .with_name(name)
                .with_lectures(lectures)
                .with_tutorials(tutorials),
        ))
    }

    /// Reads a slot list until `e`; `None` if input ended first.
    fn read_slots(&mut self, kind: SlotKind) -> Result<Option<Vec<TimeSlot>>> {
        let kind = match kind {
            SlotKind::Lecture => "lecture",
            SlotKind::Tutorial => "tutorial",
        };
        writeln!(self.output, "\nPlease input {kind} time slots.")?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_slot_reference())?;

        let mut slots: Vec<TimeSlot> = Vec::new();
        loop {
            let question = format!(
                "Enter day number (1-{DAYS_PER_WEEK}) for this {kind}, or '{FINISH}' to finish: "
            );
            let Some(day) = self.prompt(&question)? else {
                return Ok(None);
            };
            if day.eq_ignore_ascii_case(FINISH) {
                break;
            }
            let Some(day) = self.parse_number(&day)? else {
                continue;
            };
            if !(1..=DAYS_PER_WEEK).contains(&day) {
                writeln!(
                    self.output,
                    "[ERROR] Day number must be between 1 and {DAYS_PER_WEEK}."
                )?;
                continue;
            }

            let question = format!(
                "Enter time slot number (0-{}) for this {kind}: ",
                PERIODS_PER_DAY - 1
            );
            let Some(period) = self.prompt(&question)? else {
                return Ok(None);
            };
            let Some(period) = self.parse_number(&period)? else {
                continue;
            };
            // Day is already in 1..=DAYS_PER_WEEK
            let slot = u8::try_from(period)
                .ok()
                .and_then(|period| TimeSlot::checked((day - 1) as u8, period));
            let Some(slot) = slot else {
                writeln!(
                    self.output,
                    "[ERROR] Time slot number must be between 0 and {}.",
                    PERIODS_PER_DAY - 1
                )?;
                continue;
            };
            if slots.contains(&slot) {
                writeln!(
                    self.output,
                    "[WARNING] This time slot is already added. Skipping duplicate."
                )?;
            } else {
                slots.push(slot);
                writeln!(self.output, "  Added: {slot}")?;
            }
        }
        Ok(Some(slots))
    }

    /// Parses a non-negative number, reporting bad input to the user.
    fn parse_number(&mut self, text: &str) -> Result<Option<usize>> {
        match text.parse::<usize>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "[ERROR] Please enter a valid number.")?;
                Ok(None)
            }
        }
    }

    /// Writes a question and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
