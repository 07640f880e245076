//! Tutorial assignment search.
//!
//! For a lecture-compatible set of courses, enumerates every way of picking
//! one tutorial per course such that no two picks coincide and no pick lands
//! on a lecture.
//!
//! # Algorithm
//! 1. Remove tutorial options that coincide with any lecture of the set.
//! 2. If a course is left with no option, the set is infeasible.
//! 3. Walk the cartesian product of the remaining options (first course
//!    outermost) and keep the tuples without repeated slots.
//!
//! # Complexity
//! O(∏ kᵢ · m) where kᵢ = options of course i and m = courses with tutorials.

use std::collections::HashSet;

use tracing::trace;

use super::conflict::lecture_slots;
use crate::models::{Course, TimeSlot, TutorialSelection};

/// Every valid tutorial selection for `courses`, in product order.
///
/// Returns one empty selection when no course has tutorials, and no
/// selections at all when some course has no tutorial option left after
/// removing lecture slots.
///
/// Selections are keyed by course code; duplicate codes in the input
/// collapse onto one key.
pub fn tutorial_combinations(courses: &[Course]) -> Vec<TutorialSelection> {
    let occupied = lecture_slots(courses);

    let mut codes: Vec<&str> = Vec::new();
    let mut options: Vec<Vec<TimeSlot>> = Vec::new();
    for course in courses.iter().filter(|c| c.has_tutorials()) {
        let available: Vec<TimeSlot> = course
            .tutorials
            .iter()
            .copied()
            .filter(|t| !occupied.contains(t))
            .collect();
        if available.is_empty() {
            trace!(course = %course.code, "no tutorial option left after lectures");
            return Vec::new();
        }
        codes.push(&course.code);
        options.push(available);
    }

    if options.is_empty() {
        return vec![TutorialSelection::new()];
    }

    let mut selections = Vec::new();
    for picks in CartesianProduct::new(&options) {
        let mut taken: HashSet<TimeSlot> = HashSet::with_capacity(picks.len());
        let valid = picks
            .iter()
            .all(|slot| !occupied.contains(slot) && taken.insert(*slot));
        if valid {
            selections.push(
                codes
                    .iter()
                    .zip(&picks)
                    .map(|(code, slot)| (code.to_string(), *slot))
                    .collect(),
            );
        }
    }
    selections
}

/// Odometer over a list of non-empty option lists; the last list turns
/// fastest.
struct CartesianProduct<'a, T> {
    lists: &'a [Vec<T>],
    cursor: Vec<usize>,
    done: bool,
}

impl<'a, T> CartesianProduct<'a, T> {
    fn new(lists: &'a [Vec<T>]) -> Self {
        Self {
            lists,
            cursor: vec![0; lists.len()],
            done: lists.is_empty() || lists.iter().any(Vec::is_empty),
        }
    }
}

impl<T: Copy> Iterator for CartesianProduct<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let item = self
            .cursor
            .iter()
            .zip(self.lists)
            .map(|(&i, list)| list[i])
            .collect();

        // Advance, carrying from the rightmost position
        let mut pos = self.lists.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.lists[pos].len() {
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: u8, period: u8) -> TimeSlot {
        TimeSlot::new(day, period)
    }

    #[test]
    fn test_no_tutorials_yields_single_empty_selection() {
        let courses = vec![
            Course::new("A").with_lecture(0, 0),
            Course::new("B").with_lecture(1, 0),
        ];
        let combos = tutorial_combinations(&courses);
        assert_eq!(combos.len(), 1);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_empty_input_yields_single_empty_selection() {
        let combos = tutorial_combinations(&[]);
        assert_eq!(combos, vec![TutorialSelection::new()]);
    }

    #[test]
    fn test_shared_tutorial_option_excluded() {
        let a = Course::new("A")
            .with_lecture(0, 0)
            .with_tutorial(1, 1)
            .with_tutorial(2, 1);
        let b = Course::new("B")
            .with_lecture(1, 2)
            .with_tutorial(1, 1)
            .with_tutorial(3, 2);

        let combos = tutorial_combinations(&[a, b]);
        let pairs: Vec<(TimeSlot, TimeSlot)> =
            combos.iter().map(|m| (m["A"], m["B"])).collect();

        assert_eq!(
            pairs,
            vec![
                (slot(1, 1), slot(3, 2)),
                (slot(2, 1), slot(1, 1)),
                (slot(2, 1), slot(3, 2)),
            ]
        );
    }

    #[test]
    fn test_tutorial_on_own_lecture_is_infeasible() {
        let c = Course::new("C").with_lecture(0, 0).with_tutorial(0, 0);
        assert!(tutorial_combinations(&[c]).is_empty());
    }

    #[test]
    fn test_tutorial_on_other_lecture_is_filtered() {
        let a = Course::new("A")
            .with_lecture(0, 0)
            .with_tutorial(0, 1)
            .with_tutorial(2, 2);
        let b = Course::new("B").with_lecture(0, 1);

        let combos = tutorial_combinations(&[a, b]);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].get("A"), Some(&slot(2, 2)));
        assert!(!combos[0].contains_key("B"));
    }

    #[test]
    fn test_one_infeasible_course_short_circuits() {
        let a = Course::new("A").with_lecture(0, 0).with_tutorial(1, 1);
        let b = Course::new("B").with_lecture(1, 1).with_tutorial(0, 0);
        assert!(tutorial_combinations(&[a, b]).is_empty());
    }

    #[test]
    fn test_all_picks_colliding_yields_nothing() {
        let a = Course::new("A").with_lecture(0, 0).with_tutorial(4, 4);
        let b = Course::new("B").with_lecture(0, 1).with_tutorial(4, 4);
        assert!(tutorial_combinations(&[a, b]).is_empty());
    }

    #[test]
    fn test_courses_without_tutorials_are_not_keys() {
        let a = Course::new("A").with_lecture(0, 0);
        let b = Course::new("B")
            .with_lecture(0, 1)
            .with_tutorial(3, 3)
            .with_tutorial(3, 4);

        let combos = tutorial_combinations(&[a, b]);
        assert_eq!(combos.len(), 2);
        assert!(combos.iter().all(|m| m.len() == 1 && m.contains_key("B")));
    }

    #[test]
    fn test_cartesian_product_order() {
        let lists = vec![vec![1, 2], vec![10, 20, 30]];
        let all: Vec<Vec<i32>> = CartesianProduct::new(&lists).collect();
        assert_eq!(
            all,
            vec![
                vec![1, 10],
                vec![1, 20],
                vec![1, 30],
                vec![2, 10],
                vec![2, 20],
                vec![2, 30],
            ]
        );
    }

    #[test]
    fn test_cartesian_product_with_empty_list() {
        let lists: Vec<Vec<i32>> = vec![vec![1], vec![]];
        assert_eq!(CartesianProduct::new(&lists).count(), 0);
    }
}
