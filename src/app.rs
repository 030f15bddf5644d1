//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads and saves the course file
//! - runs classification, aggregation, and the target solver
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{AddArgs, Cli, Command, RemoveArgs, ReportArgs, StoreArgs, TargetArgs};
use crate::domain::{CourseFile, term_catalog};
use crate::engine::{classify_target, required_average};
use crate::error::AppError;
use crate::io::{load_courses, save_courses, write_results_csv};
use crate::report::{format_report, format_target};
use crate::standards::by_id;

pub mod pipeline;

/// Entry point for the `gpat` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Add(args) => handle_add(args),
        Command::Remove(args) => handle_remove(args),
        Command::Clear(args) => handle_clear(args),
        Command::Report(args) => handle_report(args),
        Command::Target(args) => handle_target(args),
    }
}

fn handle_add(args: AddArgs) -> Result<(), AppError> {
    let path = args.store.path();
    let mut book = load_courses(&path)?;
    let standard = by_id(args.standard);
    let valid_terms = term_catalog(args.years, args.terms_per_year);

    let input = pipeline::NewCourse {
        term: args.term,
        code: args.code,
        raw_score: args.score,
        units: args.units,
    };
    let record = pipeline::add_course(&mut book, &input, standard, &valid_terms)?;
    save_courses(&path, &book)?;

    let class = crate::engine::classify(record.score, standard)?;
    println!(
        "Added {} ({}): score {} -> {} ({:.2} points, id {}).",
        record.code, record.term, record.score, class.label, class.points, record.id
    );
    Ok(())
}

fn handle_remove(args: RemoveArgs) -> Result<(), AppError> {
    let path = args.store.path();
    let mut book = load_courses(&path)?;
    let removed = pipeline::remove_course(&mut book, args.id)?;
    save_courses(&path, &book)?;

    println!("Removed {} ({}).", removed.code, removed.term);
    Ok(())
}

fn handle_clear(args: StoreArgs) -> Result<(), AppError> {
    let path = args.path();
    save_courses(&path, &CourseFile::default())?;
    println!("Cleared all courses.");
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let path = args.store.path();
    let book = load_courses(&path)?;
    let standard = by_id(args.standard);

    let output = pipeline::build_report(&book.courses, standard, args.term.as_deref())?;
    print!(
        "{}",
        format_report(&output.rows, &output.by_term, &output.overall, standard)
    );

    if let Some(export_path) = args.export {
        write_results_csv(&export_path, &output.rows, standard)?;
        println!(
            "Exported {} rows to '{}'.",
            output.rows.len(),
            export_path.display()
        );
    }
    Ok(())
}

fn handle_target(args: TargetArgs) -> Result<(), AppError> {
    let path = args.store.path();
    let book = load_courses(&path)?;
    let standard = by_id(args.standard);

    let overall = crate::engine::aggregate(&book.courses, standard)?;
    let required = required_average(
        overall.total_units,
        overall.quality_points,
        args.goal,
        args.next_units,
    )?;
    let outcome = classify_target(required, standard.max_points);

    println!(
        "Current: {:.2} / {:.2} over {} units.",
        overall.gpa, standard.max_points, overall.total_units
    );
    println!("{}", format_target(&outcome));
    Ok(())
}
