//! Input validation for course lists.
//!
//! Checks structural integrity of courses before planning. Detects:
//! - Empty course codes
//! - Duplicate course codes
//! - Slots outside the 5-day × 7-period week
//! - A slot listed twice in one course's lectures or tutorials
//!
//! The planner itself accepts any input; these checks are what the input
//! layer enforces before handing courses over.

use std::collections::HashSet;

use crate::models::{Course, SlotKind, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course has an empty or blank code.
    EmptyCode,
    /// Two courses share the same code.
    DuplicateCode,
    /// A slot's day or period index is outside the week grid.
    SlotOutOfRange,
    /// A slot is listed twice within one course's lectures or tutorials.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a course list.
///
/// Checks:
/// 1. Every course code is non-blank
/// 2. No two courses share a code
/// 3. Every lecture and tutorial slot lies within the week grid
/// 4. No slot is repeated within one course's lectures or tutorials
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for (position, course) in courses.iter().enumerate() {
        if course.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Course #{} has an empty code", position + 1),
            ));
        } else if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }
    }

    for course in courses {
        for (slot, kind) in course.all_time_slots() {
            if !slot.is_in_range() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SlotOutOfRange,
                    format!(
                        "Course '{}' has {} slot (day {}, period {}) outside the week",
                        course.code,
                        kind_name(kind),
                        slot.day,
                        slot.period
                    ),
                ));
            }
        }

        check_repeats(course, &course.lectures, SlotKind::Lecture, &mut errors);
        check_repeats(course, &course.tutorials, SlotKind::Tutorial, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Tutorial options of `course` that coincide with its own lectures.
///
/// The planner drops such options silently; a course whose options are all
/// listed here can never be scheduled.
pub fn tutorial_lecture_overlaps(course: &Course) -> Vec<TimeSlot> {
    course
        .tutorials
        .iter()
        .copied()
        .filter(|t| course.lectures.contains(t))
        .collect()
}

fn check_repeats(
    course: &Course,
    slots: &[TimeSlot],
    kind: SlotKind,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for slot in slots {
        if !seen.insert(slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!(
                    "Course '{}' lists {} slot {} more than once",
                    course.code,
                    kind_name(kind),
                    slot
                ),
            ));
        }
    }
}

fn kind_name(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::Lecture => "lecture",
        SlotKind::Tutorial => "tutorial",
    }
}
