//! Schedule (solution) model.
//!
//! A schedule is a conflict-free subset of the input courses plus the
//! tutorial slot chosen for each of those courses that offers tutorials.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{Course, TimeSlot};

/// Chosen tutorial slot per course, keyed by course code.
///
/// Courses without tutorials never appear as keys.
pub type TutorialSelection = BTreeMap<String, TimeSlot>;

/// One enumerated schedule: courses (in input order) and tutorial choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSchedule {
    /// Courses taken together.
    pub courses: Vec<Course>,
    /// Tutorial choice for each course that has tutorials.
    pub tutorials: TutorialSelection,
}

impl CourseSchedule {
    /// Creates a schedule.
    pub fn new(courses: Vec<Course>, tutorials: TutorialSelection) -> Self {
        Self { courses, tutorials }
    }

    /// Course codes in schedule order.
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// The tutorial chosen for a course, if it has one.
    pub fn tutorial_for(&self, code: &str) -> Option<TimeSlot> {
        self.tutorials.get(code).copied()
    }

    /// Slots used by this schedule: all lectures plus the chosen tutorials.
    pub fn occupied_slots(&self) -> Vec<TimeSlot> {
        let mut slots: Vec<TimeSlot> = self
            .courses
            .iter()
            .flat_map(|c| c.lectures.iter().copied())
            .collect();
        slots.extend(self.tutorials.values().copied());
        slots.sort();
        slots
    }

    /// Whether this schedule's course set is a strict subset of `other`'s.
    ///
    /// Compared by course code; tutorial choices are ignored.
    pub fn is_dominated_by(&self, other: &CourseSchedule) -> bool {
        is_strict_code_subset(&self.code_set(), &other.code_set())
    }

    fn code_set(&self) -> HashSet<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }
}

/// Whether `ours` is a strict subset of `theirs`.
///
/// The single dominance rule shared by [`CourseSchedule::is_dominated_by`]
/// and the enumerator's maximality filter.
pub(crate) fn is_strict_code_subset(ours: &HashSet<&str>, theirs: &HashSet<&str>) -> bool {
    ours.len() < theirs.len() && ours.is_subset(theirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math() -> Course {
        Course::new("MAT1001")
            .with_name("Calculus")
            .with_lecture(0, 0)
            .with_tutorial(1, 1)
            .with_tutorial(2, 1)
    }

    fn physics() -> Course {
        Course::new("PHY1001").with_name("Physics").with_lecture(0, 2)
    }

    #[test]
    fn test_schedule_accessors() {
        let mut tutorials = TutorialSelection::new();
        tutorials.insert("MAT1001".into(), TimeSlot::new(2, 1));
        let s = CourseSchedule::new(vec![math(), physics()], tutorials);

        assert_eq!(s.codes(), vec!["MAT1001", "PHY1001"]);
        assert_eq!(s.course_count(), 2);
        assert_eq!(s.tutorial_for("MAT1001"), Some(TimeSlot::new(2, 1)));
        assert_eq!(s.tutorial_for("PHY1001"), None);
        assert_eq!(
            s.occupied_slots(),
            vec![TimeSlot::new(0, 0), TimeSlot::new(0, 2), TimeSlot::new(2, 1)]
        );
    }

    #[test]
    fn test_dominance_is_strict() {
        let small = CourseSchedule::new(vec![physics()], TutorialSelection::new());
        let big = CourseSchedule::new(vec![math(), physics()], TutorialSelection::new());

        assert!(small.is_dominated_by(&big));
        assert!(!big.is_dominated_by(&small));
        assert!(!big.is_dominated_by(&big.clone()));
    }

    #[test]
    fn test_dominance_requires_containment() {
        let a = CourseSchedule::new(vec![math()], TutorialSelection::new());
        let b = CourseSchedule::new(
            vec![physics(), Course::new("CHE1001")],
            TutorialSelection::new(),
        );
        assert!(!a.is_dominated_by(&b));
    }

    #[test]
    fn test_strict_code_subset() {
        let ab: HashSet<&str> = ["A", "B"].into_iter().collect();
        let abc: HashSet<&str> = ["A", "B", "C"].into_iter().collect();
        let bcd: HashSet<&str> = ["B", "C", "D"].into_iter().collect();

        assert!(is_strict_code_subset(&ab, &abc));
        assert!(!is_strict_code_subset(&abc, &abc));
        assert!(!is_strict_code_subset(&abc, &ab));
        assert!(!is_strict_code_subset(&ab, &bcd));
        assert!(is_strict_code_subset(&HashSet::new(), &ab));
    }
}
