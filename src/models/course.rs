//! Course model.
//!
//! A course has mandatory lecture slots (all must be free) and optional
//! alternative tutorial slots (exactly one must be chosen when any exist).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeSlot;

/// Whether a slot belongs to a lecture or a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Mandatory lecture session.
    Lecture,
    /// One of several alternative tutorial sessions.
    Tutorial,
}

/// A course offering.
///
/// Treated as read-only once built. Code uniqueness is the caller's
/// responsibility; see [`crate::validation::validate_courses`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., `MAT1001`).
    pub code: String,
    /// Display name (e.g., `Calculus I`).
    pub name: String,
    /// Lecture slots; every one is required.
    pub lectures: Vec<TimeSlot>,
    /// Tutorial options; one is chosen if non-empty.
    pub tutorials: Vec<TimeSlot>,
}

impl Course {
    /// Creates a course with no name and no slots.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            lectures: Vec::new(),
            tutorials: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a lecture slot.
    pub fn with_lecture(mut self, day: u8, period: u8) -> Self {
        self.lectures.push(TimeSlot::new(day, period));
        self
    }

    /// Adds a tutorial option.
    pub fn with_tutorial(mut self, day: u8, period: u8) -> Self {
        self.tutorials.push(TimeSlot::new(day, period));
        self
    }

    /// Replaces the lecture slots.
    pub fn with_lectures(mut self, lectures: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.lectures = lectures.into_iter().collect();
        self
    }

    /// Replaces the tutorial options.
    pub fn with_tutorials(mut self, tutorials: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.tutorials = tutorials.into_iter().collect();
        self
    }

    /// Whether a tutorial must be chosen for this course.
    #[inline]
    pub fn has_tutorials(&self) -> bool {
        !self.tutorials.is_empty()
    }

    /// Every slot of the course tagged by kind, lectures first.
    pub fn all_time_slots(&self) -> Vec<(TimeSlot, SlotKind)> {
        self.lectures
            .iter()
            .map(|&s| (s, SlotKind::Lecture))
            .chain(self.tutorials.iter().map(|&s| (s, SlotKind::Tutorial)))
            .collect()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("MAT1001")
            .with_name("Calculus")
            .with_lecture(0, 0)
            .with_lecture(2, 0)
            .with_tutorial(1, 1);

        assert_eq!(course.code, "MAT1001");
        assert_eq!(course.name, "Calculus");
        assert_eq!(course.lectures, vec![TimeSlot::new(0, 0), TimeSlot::new(2, 0)]);
        assert_eq!(course.tutorials, vec![TimeSlot::new(1, 1)]);
        assert!(course.has_tutorials());
        assert_eq!(course.to_string(), "MAT1001: Calculus");
    }

    #[test]
    fn test_all_time_slots_lectures_first() {
        let course = Course::new("PHY1001")
            .with_tutorial(3, 2)
            .with_lecture(0, 2);
        let slots = course.all_time_slots();
        assert_eq!(
            slots,
            vec![
                (TimeSlot::new(0, 2), SlotKind::Lecture),
                (TimeSlot::new(3, 2), SlotKind::Tutorial),
            ]
        );
    }

    #[test]
    fn test_course_without_tutorials() {
        let course = Course::new("CSC4001").with_lectures([TimeSlot::new(0, 0)]);
        assert!(!course.has_tutorials());
        assert_eq!(course.lectures.len(), 1);
    }
}
