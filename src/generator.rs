//! Random course catalogue generator.
//!
//! Produces reproducible course lists for demos and property tests. Slots
//! are drawn uniformly from the in-range week; a course never repeats a
//! slot within its lectures or within its tutorials, but lectures and
//! tutorials of different courses (or of the same course) may collide.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::{PlannerError, Result};
use crate::models::{Course, TimeSlot};

/// Configuration for generated catalogues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of courses.
    pub num_courses: usize,
    /// Lectures per course (min, max), inclusive.
    pub lectures_range: (usize, usize),
    /// Tutorial options per course (min, max), inclusive.
    pub tutorials_range: (usize, usize),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::small()
    }
}

impl GeneratorConfig {
    /// A handful of courses with few options.
    pub fn small() -> Self {
        Self {
            num_courses: 5,
            lectures_range: (1, 2),
            tutorials_range: (0, 2),
        }
    }

    /// A typical semester load with more tutorial alternatives.
    pub fn medium() -> Self {
        Self {
            num_courses: 8,
            lectures_range: (1, 3),
            tutorials_range: (0, 3),
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "small" => Ok(Self::small()),
            "medium" => Ok(Self::medium()),
            _ => Err(PlannerError::UnknownPreset(name.to_string())),
        }
    }

    /// Overrides the number of courses.
    pub fn with_num_courses(mut self, num_courses: usize) -> Self {
        self.num_courses = num_courses;
        self
    }
}

/// Seeded generator of course catalogues.
pub struct CatalogueGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl CatalogueGenerator {
    /// Creates a generator with the given config and seed.
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a catalogue: courses `C101`, `C102`, ...
    pub fn generate(&mut self) -> Vec<Course> {
        (0..self.config.num_courses)
            .map(|i| {
                let lectures = self.draw_slots(self.config.lectures_range);
                let tutorials = self.draw_slots(self.config.tutorials_range);
                Course::new(format!("C{}", 101 + i))
                    .with_name(format!("Course {}", i + 1))
                    .with_lectures(lectures)
                    .with_tutorials(tutorials)
            })
            .collect()
    }

    /// Draws distinct slots, count uniform in `range` (capped at the week).
    fn draw_slots(&mut self, (min, max): (usize, usize)) -> Vec<TimeSlot> {
        let week: Vec<TimeSlot> = TimeSlot::all().collect();
        let max = max.min(week.len());
        let min = min.min(max);
        let count = self.rng.random_range(min..=max);
        let mut slots: Vec<TimeSlot> = week
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();
        slots.sort();
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_courses;

    #[test]
    fn test_deterministic_per_seed() {
        let a = CatalogueGenerator::new(GeneratorConfig::medium(), 7).generate();
        let b = CatalogueGenerator::new(GeneratorConfig::medium(), 7).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_respects_ranges() {
        let config = GeneratorConfig::medium();
        for seed in 0..20 {
            let courses = CatalogueGenerator::new(config.clone(), seed).generate();
            assert_eq!(courses.len(), config.num_courses);
            for c in &courses {
                assert!((1..=3).contains(&c.lectures.len()));
                assert!(c.tutorials.len() <= 3);
            }
        }
    }

    #[test]
    fn test_generated_courses_validate() {
        for seed in 0..20 {
            let courses = CatalogueGenerator::new(GeneratorConfig::small(), seed).generate();
            assert!(validate_courses(&courses).is_ok());
        }
    }

    #[test]
    fn test_codes() {
        let courses =
            CatalogueGenerator::new(GeneratorConfig::small().with_num_courses(3), 1).generate();
        let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["C101", "C102", "C103"]);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(GeneratorConfig::preset("Small").unwrap(), GeneratorConfig::small());
        assert_eq!(GeneratorConfig::preset("medium").unwrap(), GeneratorConfig::medium());
        assert!(matches!(
            GeneratorConfig::preset("huge"),
            Err(PlannerError::UnknownPreset(_))
        ));
    }
}
