//! Planner configuration.

use serde::Deserialize;

use crate::error::{PlannerError, Result};
use crate::models::Course;

/// Limits and defaults shared by the CLI and the interactive input layer.
///
/// The enumerator is exponential in the number of courses, so the caller
/// caps the list before planning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of courses accepted for one planning run.
    pub max_courses: usize,
    /// Name given to a course when the user leaves it blank.
    pub default_course_name: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_courses: 15,
            default_course_name: "DEFAULT_NAME".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Sets the course limit.
    pub fn with_max_courses(mut self, max_courses: usize) -> Self {
        self.max_courses = max_courses;
        self
    }

    /// Sets the default course name.
    pub fn with_default_course_name(mut self, name: impl Into<String>) -> Self {
        self.default_course_name = name.into();
        self
    }

    /// Rejects course lists longer than `max_courses`.
    pub fn check_course_count(&self, courses: &[Course]) -> Result<()> {
        if courses.len() > self.max_courses {
            return Err(PlannerError::TooManyCourses {
                count: courses.len(),
                max: self.max_courses,
            });
        }
        Ok(())
    }
}
