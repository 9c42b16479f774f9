//! `slots` CLI: parse schedule-strings, check conflicts, and plan a week.
//!
//! ## Usage
//!
//! ```sh
//! # Decode a schedule-string to JSON
//! slots parse "TTH 14:00-15:15"
//!
//! # Render the time range on a 12-hour clock
//! slots format "MWF 09:00-09:50"
//!
//! # Check two schedule-strings against each other
//! slots conflict "MWF 09:00-09:50" "MWF 09:30-10:30"
//!
//! # Search a catalog (reads stdin if -i is omitted)
//! slots search -i catalog.json --query park --band morning
//!
//! # Pairwise conflicts between chosen courses
//! slots check -i catalog.json --crn CS101,MATH151
//!
//! # Free windows on a day, within the configured calendar hours
//! slots --config slots.toml free -i catalog.json --crn CS101,MATH151 --day Monday
//!
//! # GPA from a grade sheet
//! slots gpa -i grades.json
//!
//! # Every meeting of a slot across the configured term
//! slots --config slots.toml expand "MWF 09:00-09:50"
//! ```
//!
//! Set `RUST_LOG=debug` to see engine decisions on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::catalog::{Availability, TimeBand};
use slot_engine::{Catalog, Day, GradeSheet, Schedule, SearchFilter, SlotsConfig};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Course schedule-string toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (calendar hours, teaching term)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schedule-string and print it as JSON
    Parse {
        /// e.g. "MWF 09:00-09:50"
        schedule: String,
    },
    /// Print a schedule-string's time range on a 12-hour clock
    Format { schedule: String },
    /// Report whether two schedule-strings conflict
    Conflict { a: String, b: String },
    /// Search a course catalog
    Search {
        /// Catalog JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Substring of the course name, professor, or CRN
        #[arg(short, long)]
        query: Option<String>,
        /// CRN subject prefix, e.g. MATH
        #[arg(long)]
        subject: Option<String>,
        #[arg(long, value_enum)]
        band: Option<BandArg>,
        #[arg(long)]
        credits: Option<u32>,
        #[arg(long, value_enum)]
        availability: Option<AvailabilityArg>,
    },
    /// List conflicts between the chosen courses
    Check {
        /// Catalog JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated CRNs
        #[arg(long)]
        crn: String,
    },
    /// List free windows on a day for the chosen courses
    Free {
        /// Catalog JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated CRNs
        #[arg(long)]
        crn: String,
        /// Day name or code, e.g. Monday or TH
        #[arg(long)]
        day: String,
    },
    /// Compute GPA from a grade sheet
    Gpa {
        /// Grade sheet JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Expand a schedule-string into meetings across the configured term
    Expand { schedule: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum BandArg {
    Morning,
    Afternoon,
    Evening,
}

impl From<BandArg> for TimeBand {
    fn from(value: BandArg) -> Self {
        match value {
            BandArg::Morning => TimeBand::Morning,
            BandArg::Afternoon => TimeBand::Afternoon,
            BandArg::Evening => TimeBand::Evening,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AvailabilityArg {
    Open,
    Waitlisted,
}

impl From<AvailabilityArg> for Availability {
    fn from(value: AvailabilityArg) -> Self {
        match value {
            AvailabilityArg::Open => Availability::Open,
            AvailabilityArg::Waitlisted => Availability::Waitlisted,
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse { schedule } => {
            let slot = slot_engine::parse_time_slots(&schedule)
                .with_context(|| format!("Failed to parse '{}'", schedule))?;
            println!("{}", serde_json::to_string_pretty(&slot)?);
        }
        Commands::Format { schedule } => {
            let range = slot_engine::format_time_range(&schedule)
                .with_context(|| format!("Failed to format '{}'", schedule))?;
            println!("{}", range);
        }
        Commands::Conflict { a, b } => {
            let conflict = slot_engine::check_time_conflict(&a, &b)
                .context("Failed to compare schedules")?;
            println!("{}", if conflict { "conflict" } else { "no conflict" });
        }
        Commands::Search {
            input,
            query,
            subject,
            band,
            credits,
            availability,
        } => {
            let catalog = read_catalog(input.as_deref())?;
            let filter = SearchFilter {
                query,
                subject,
                band: band.map(TimeBand::from),
                credits,
                availability: availability.map(Availability::from),
            };
            for course in catalog.search(&filter) {
                let range = course
                    .time_slot()
                    .map(|slot| slot.format_range())
                    .unwrap_or_else(|_| course.time.clone());
                println!("{}\t{}\t{}", course.crn, course.name, range);
            }
        }
        Commands::Check { input, crn } => {
            let catalog = read_catalog(input.as_deref())?;
            let schedule = build_schedule(&catalog, &crn)?;
            let conflicts = schedule.conflicts();
            if conflicts.is_empty() {
                println!("No conflicts");
            }
            for conflict in conflicts {
                let days: Vec<&str> = conflict.days.iter().map(|d| d.name()).collect();
                println!(
                    "{} and {} conflict on {} ({} min)",
                    conflict.first,
                    conflict.second,
                    days.join(", "),
                    conflict.overlap_minutes
                );
            }
        }
        Commands::Free { input, crn, day } => {
            let day: Day = day.parse()?;
            let catalog = read_catalog(input.as_deref())?;
            let schedule = build_schedule(&catalog, &crn)?;
            for window in schedule.free_windows(day, &config.calendar.window()) {
                println!(
                    "{} - {} ({} min)",
                    window.start.to_twelve_hour(),
                    window.end.to_twelve_hour(),
                    window.duration_minutes
                );
            }
        }
        Commands::Gpa { input } => {
            let json = read_input(input.as_deref())?;
            let sheet = GradeSheet::from_json(&json).context("Failed to read grade sheet")?;
            println!("GPA: {:.2}", sheet.gpa());
        }
        Commands::Expand { schedule } => {
            let term = config
                .term
                .as_ref()
                .context("Expanding meetings needs a [term] section in --config")?;
            let slot = slot_engine::parse_time_slots(&schedule)
                .with_context(|| format!("Failed to parse '{}'", schedule))?;
            let meetings = slot_engine::expand_meetings(&slot, term)
                .context("Failed to expand meetings")?;
            println!("{}", serde_json::to_string_pretty(&meetings)?);
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<SlotsConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            SlotsConfig::from_toml_str(&text)
                .with_context(|| format!("Failed to parse config: {}", path))
        }
        None => Ok(SlotsConfig::default()),
    }
}

fn read_catalog(path: Option<&str>) -> Result<Catalog> {
    let json = read_input(path)?;
    Catalog::from_json(&json).context("Failed to read catalog")
}

/// Put the comma-separated CRNs from the catalog on a fresh schedule.
fn build_schedule(catalog: &Catalog, crns: &str) -> Result<Schedule> {
    let mut schedule = Schedule::new();
    for crn in crns.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let course = catalog
            .find_by_crn(crn)
            .with_context(|| format!("Unknown CRN: '{}'", crn))?;
        schedule
            .add(course.clone())
            .with_context(|| format!("Failed to add {}", crn))?;
    }
    tracing::info!(courses = schedule.len(), credits = schedule.total_credits(), "built schedule");
    Ok(schedule)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
