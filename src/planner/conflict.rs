//! Lecture conflict detection.

use std::collections::HashSet;

use crate::models::{Course, TimeSlot};

/// Whether any lecture slot is used twice across `courses`.
///
/// A repeated slot within a single course also counts. Stops at the first
/// repeated slot.
pub fn lectures_conflict(courses: &[Course]) -> bool {
    let mut occupied: HashSet<TimeSlot> = HashSet::new();
    for course in courses {
        for &slot in &course.lectures {
            if !occupied.insert(slot) {
                return true;
            }
        }
    }
    false
}

/// All lecture slots of `courses`.
pub(crate) fn lecture_slots(courses: &[Course]) -> HashSet<TimeSlot> {
    courses
        .iter()
        .flat_map(|c| c.lectures.iter().copied())
        .collect()
}
