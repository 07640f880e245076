//! End-to-end properties of schedule enumeration over generated catalogues.

use std::collections::BTreeSet;

use course_planner::calendar::render_report;
use course_planner::generator::{CatalogueGenerator, GeneratorConfig};
use course_planner::models::{Course, CourseSchedule, TimeSlot};
use course_planner::planner::{
    find_all_valid_schedules, lectures_conflict, tutorial_combinations, ScheduleEnumerator,
};

fn catalogue(seed: u64) -> Vec<Course> {
    CatalogueGenerator::new(GeneratorConfig::medium().with_num_courses(7), seed).generate()
}

fn code_set(schedule: &CourseSchedule) -> BTreeSet<String> {
    schedule.courses.iter().map(|c| c.code.clone()).collect()
}

/// Every non-empty subset of `courses` that has a lecture-free, tutorial-
/// satisfiable assignment, as code sets.
fn feasible_subsets(courses: &[Course]) -> Vec<BTreeSet<String>> {
    let n = courses.len();
    (1u32..(1 << n))
        .filter_map(|mask| {
            let subset: Vec<Course> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| courses[i].clone())
                .collect();
            let feasible =
                !lectures_conflict(&subset) && !tutorial_combinations(&subset).is_empty();
            feasible.then(|| subset.iter().map(|c| c.code.clone()).collect())
        })
        .collect()
}

#[test]
fn results_are_pairwise_undominated() {
    for seed in 0..15 {
        let schedules = find_all_valid_schedules(&catalogue(seed));
        for a in &schedules {
            for b in &schedules {
                assert!(!a.is_dominated_by(b), "seed {seed}: {:?} ⊂ {:?}", a.codes(), b.codes());
            }
        }
    }
}

#[test]
fn every_feasible_subset_is_covered() {
    for seed in 0..15 {
        let courses = catalogue(seed);
        let schedules = find_all_valid_schedules(&courses);
        let results: Vec<BTreeSet<String>> = schedules.iter().map(code_set).collect();

        for subset in feasible_subsets(&courses) {
            assert!(
                results.iter().any(|r| subset.is_subset(r)),
                "seed {seed}: feasible subset {subset:?} not covered"
            );
        }
    }
}

#[test]
fn result_subsets_are_exactly_the_maximal_feasible_ones() {
    for seed in 0..15 {
        let courses = catalogue(seed);
        let feasible = feasible_subsets(&courses);
        let expected: BTreeSet<BTreeSet<String>> = feasible
            .iter()
            .filter(|s| {
                !feasible
                    .iter()
                    .any(|other| other.len() > s.len() && s.is_subset(other))
            })
            .cloned()
            .collect();

        let actual: BTreeSet<BTreeSet<String>> = find_all_valid_schedules(&courses)
            .iter()
            .map(code_set)
            .collect();
        assert_eq!(actual, expected, "seed {seed}");
    }
}

#[test]
fn every_schedule_is_conflict_free() {
    for seed in 0..15 {
        for schedule in find_all_valid_schedules(&catalogue(seed)) {
            let slots = schedule.occupied_slots();
            let distinct: BTreeSet<TimeSlot> = slots.iter().copied().collect();
            assert_eq!(slots.len(), distinct.len(), "seed {seed}: {:?}", schedule.codes());

            for course in &schedule.courses {
                match schedule.tutorial_for(&course.code) {
                    Some(slot) => assert!(course.tutorials.contains(&slot)),
                    None => assert!(!course.has_tutorials()),
                }
            }
        }
    }
}

#[test]
fn enumeration_is_idempotent() {
    let courses = catalogue(3);
    let snapshot = courses.clone();
    let first = find_all_valid_schedules(&courses);
    let second = find_all_valid_schedules(&courses);
    assert_eq!(first, second);
    assert_eq!(courses, snapshot);
    assert_eq!(ScheduleEnumerator::new().enumerate(&courses).schedules, first);
}

#[test]
fn schedules_keep_input_course_order() {
    for seed in 0..10 {
        let courses = catalogue(seed);
        let position = |code: &str| courses.iter().position(|c| c.code == code);
        for schedule in find_all_valid_schedules(&courses) {
            let positions: Vec<_> = schedule.codes().iter().map(|c| position(c)).collect();
            let mut sorted = positions.clone();
            sorted.sort();
            assert_eq!(positions, sorted);
        }
    }
}

#[test]
fn report_numbers_every_schedule() {
    let a = Course::new("A").with_name("Alpha").with_lecture(0, 0);
    let b = Course::new("B").with_name("Beta").with_lecture(0, 0);
    let report = render_report(&find_all_valid_schedules(&[a, b]));

    assert!(report.starts_with("Found 2 valid schedule(s):"));
    assert!(report.contains("SCHEDULE #1 - 1 course(s): [A]"));
    assert!(report.contains("SCHEDULE #2 - 1 course(s): [B]"));
}

#[test]
fn schedules_serialize_with_code_keys() {
    let math = Course::new("MAT1001")
        .with_lecture(0, 0)
        .with_tutorial(1, 1);
    let schedules = find_all_valid_schedules(&[math]);
    let json = serde_json::to_value(&schedules[0]).unwrap();

    assert_eq!(json["tutorials"]["MAT1001"]["day"], 1);
    assert_eq!(json["tutorials"]["MAT1001"]["period"], 1);
    assert_eq!(json["courses"][0]["code"], "MAT1001");
}
