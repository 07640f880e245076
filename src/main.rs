//! Course planner CLI.
//!
//! Collect courses interactively (or generate a random catalogue) and print
//! every maximal conflict-free schedule as a weekly calendar.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use course_planner::calendar::{render_report, render_slot_reference, SlotGrid};
use course_planner::config::PlannerConfig;
use course_planner::generator::{CatalogueGenerator, GeneratorConfig};
use course_planner::input::CourseReader;
use course_planner::models::{Course, TimeSlot};
use course_planner::planner::ScheduleEnumerator;
use course_planner::validation::{tutorial_lecture_overlaps, validate_courses};
use course_planner::PlannerError;

#[derive(Parser)]
#[command(name = "course-planner")]
#[command(about = "Find every maximal conflict-free course schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Maximum number of courses per planning run
    #[arg(
        long,
        env = "COURSE_PLANNER_MAX_COURSES",
        default_value = "15",
        global = true
    )]
    max_courses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter courses interactively, then list every maximal schedule.
    Plan {
        /// Name used when a course name is left blank
        #[arg(long, default_value = "DEFAULT_NAME")]
        default_name: String,
    },

    /// Plan a randomly generated catalogue.
    Demo {
        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Preset: small, medium
        #[arg(short, long, default_value = "small")]
        preset: String,
        /// Override the number of generated courses
        #[arg(short, long)]
        courses: Option<usize>,
    },

    /// Print the day and time-slot numbering.
    Slots,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the calendars
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = PlannerConfig::default().with_max_courses(cli.max_courses);

    match cli.command {
        Commands::Plan { default_name } => {
            let config = config.with_default_course_name(default_name);
            println!("=== Curriculum Planner ===");

            let courses = {
                let stdin = io::stdin();
                let stdout = io::stdout();
                CourseReader::new(stdin.lock(), stdout.lock(), config.clone()).read_courses()?
            };

            let rule = "=".repeat(60);
            println!("\n{rule}");
            println!("Total courses added: {}", courses.len());
            println!("{rule}");

            if courses.is_empty() {
                println!("No courses added. Exiting.");
                return Ok(());
            }
            plan(&courses, &config)?;
        }

        Commands::Demo {
            seed,
            preset,
            courses,
        } => {
            let mut generator_config = GeneratorConfig::preset(&preset)?;
            if let Some(n) = courses {
                generator_config = generator_config.with_num_courses(n);
            }
            info!(
                seed,
                preset = %preset,
                courses = generator_config.num_courses,
                "generating catalogue"
            );

            let courses = CatalogueGenerator::new(generator_config, seed).generate();
            println!("Generated catalogue (seed {seed}):");
            for course in &courses {
                println!(
                    "  • {course}  lectures: {}  tutorial options: {}",
                    format_slots(&course.lectures),
                    format_slots(&course.tutorials)
                );
            }
            println!("\nAll offered slots:");
            print!("{}", SlotGrid::from_courses(&courses));
            println!();

            plan(&courses, &config)?;
        }

        Commands::Slots => {
            print!("{}", render_slot_reference());
        }
    }

    Ok(())
}

/// Validates, enumerates, and prints the report for `courses`.
fn plan(courses: &[Course], config: &PlannerConfig) -> Result<()> {
    config.check_course_count(courses)?;
    validate_courses(courses).map_err(PlannerError::from)?;

    for course in courses {
        let overlaps = tutorial_lecture_overlaps(course);
        if !overlaps.is_empty() {
            warn!(
                code = %course.code,
                slots = %format_slots(&overlaps),
                "tutorial options coincide with the course's own lectures and will be ignored"
            );
        }
    }

    let outcome = ScheduleEnumerator::new().enumerate(courses);
    info!(
        schedules = outcome.schedules.len(),
        largest = outcome.max_course_count(),
        lecture_conflicts = outcome.stats.lecture_conflicts,
        tutorial_infeasible = outcome.stats.tutorial_infeasible,
        "planning complete"
    );

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_report(&outcome.schedules))?;
    stdout.flush()?;
    Ok(())
}

fn format_slots(slots: &[TimeSlot]) -> String {
    if slots.is_empty() {
        return "-".to_string();
    }
    slots
        .iter()
        .map(|s| format!("D{}P{}", s.day + 1, s.period))
        .collect::<Vec<_>>()
        .join(" ")
}
