//! Maximal schedule enumeration.
//!
//! # Algorithm
//!
//! 1. For r = 1..=n, walk every r-subset of the courses in lexicographic
//!    order of input position.
//! 2. Skip subsets whose lectures conflict.
//! 3. Ask [`tutorial_combinations`] for the tutorial selections; skip the
//!    subset if there are none, otherwise emit one candidate per selection.
//! 4. Keep only candidates whose course-code set is not a strict subset of
//!    another candidate's. Equal-size survivors are all kept, with all of
//!    their tutorial variants.
//!
//! # Complexity
//! O(2ⁿ · T) where T is the cost of the tutorial search per subset, plus
//! O(q²) for the dominance filter over q qualifying subsets.

use std::collections::HashSet;

use tracing::{debug, info};

use super::conflict::lectures_conflict;
use super::tutorials::tutorial_combinations;
use crate::models::{is_strict_code_subset, Course, CourseSchedule, TutorialSelection};

/// Every maximal conflict-free schedule of `courses`.
///
/// Empty input gives an empty result. The function never fails; malformed
/// input (duplicate codes, out-of-range slots) is the caller's concern.
///
/// # Example
///
/// ```
/// use course_planner::models::Course;
/// use course_planner::planner::find_all_valid_schedules;
///
/// let a = Course::new("A").with_lecture(0, 0);
/// let b = Course::new("B").with_lecture(0, 0);
/// let schedules = find_all_valid_schedules(&[a, b]);
///
/// assert_eq!(schedules.len(), 2);
/// assert_eq!(schedules[0].codes(), vec!["A"]);
/// assert_eq!(schedules[1].codes(), vec!["B"]);
/// ```
pub fn find_all_valid_schedules(courses: &[Course]) -> Vec<CourseSchedule> {
    ScheduleEnumerator::new().enumerate(courses).schedules
}

/// Counters collected during one enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Course subsets visited.
    pub subsets_examined: usize,
    /// Subsets rejected for a lecture clash.
    pub lecture_conflicts: usize,
    /// Lecture-compatible subsets with no valid tutorial selection.
    pub tutorial_infeasible: usize,
    /// Subsets that qualified before the maximality filter.
    pub qualifying_subsets: usize,
    /// Schedules (subset × tutorial selection) before the maximality filter.
    pub candidates: usize,
    /// Schedules kept after the maximality filter.
    pub maximal: usize,
}

/// Result of one enumeration.
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    /// Maximal schedules in enumeration order.
    pub schedules: Vec<CourseSchedule>,
    /// Search counters.
    pub stats: SearchStats,
}

impl PlanOutcome {
    /// Whether no schedule was found.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Size of the largest schedule found (0 when none).
    pub fn max_course_count(&self) -> usize {
        self.schedules
            .iter()
            .map(CourseSchedule::course_count)
            .max()
            .unwrap_or(0)
    }
}

/// Exhaustive enumerator of maximal schedules.
///
/// Stateless; each call to [`enumerate`](Self::enumerate) is a pure
/// function of its input.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEnumerator;

/// A subset that passed both checks, with its tutorial selections.
struct Qualifying<'a> {
    members: Vec<usize>,
    codes: HashSet<&'a str>,
    selections: Vec<TutorialSelection>,
}

impl ScheduleEnumerator {
    /// Creates an enumerator.
    pub fn new() -> Self {
        Self
    }

    /// Enumerates every maximal schedule of `courses`, with search counters.
    pub fn enumerate(&self, courses: &[Course]) -> PlanOutcome {
        let mut stats = SearchStats::default();
        let mut qualifying: Vec<Qualifying<'_>> = Vec::new();

        for size in 1..=courses.len() {
            let before = qualifying.len();
            for members in Combinations::new(courses.len(), size) {
                stats.subsets_examined += 1;
                let subset: Vec<Course> = members.iter().map(|&i| courses[i].clone()).collect();

                if lectures_conflict(&subset) {
                    stats.lecture_conflicts += 1;
                    continue;
                }

                let selections = tutorial_combinations(&subset);
                if selections.is_empty() {
                    stats.tutorial_infeasible += 1;
                    continue;
                }

                stats.candidates += selections.len();
                let codes = members.iter().map(|&i| courses[i].code.as_str()).collect();
                qualifying.push(Qualifying {
                    members,
                    codes,
                    selections,
                });
            }
            debug!(size, qualifying = qualifying.len() - before, "examined subsets");
        }
        stats.qualifying_subsets = qualifying.len();

        let keep = undominated(&qualifying);
        let mut schedules = Vec::new();
        for (subset, _) in qualifying.into_iter().zip(keep).filter(|(_, k)| *k) {
            let members: Vec<Course> = subset.members.iter().map(|&i| courses[i].clone()).collect();
            for selection in subset.selections {
                schedules.push(CourseSchedule::new(members.clone(), selection));
            }
        }
        stats.maximal = schedules.len();

        info!(
            courses = courses.len(),
            subsets = stats.subsets_examined,
            candidates = stats.candidates,
            maximal = stats.maximal,
            "schedule enumeration finished"
        );

        PlanOutcome { schedules, stats }
    }
}

/// Marks each qualifying subset that no strictly larger qualifying subset
/// contains (by course code).
///
/// All tutorial variants of one subset share its code set, so testing each
/// distinct subset once is equivalent to testing every candidate pair.
fn undominated(qualifying: &[Qualifying<'_>]) -> Vec<bool> {
    qualifying
        .iter()
        .map(|q| {
            !qualifying
                .iter()
                .any(|other| is_strict_code_subset(&q.codes, &other.codes))
        })
        .collect()
}

/// r-combinations of `0..n` as sorted index vectors, in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Rightmost index that has not reached its maximum
        let r = self.indices.len();
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + self.n - r) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
