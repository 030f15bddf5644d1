//! Read/write the course JSON file.
//!
//! The file is the portable representation of the caller-owned course list
//! (the original tracker kept it in browser local storage). The schema is
//! `domain::CourseFile` and round-trips every `CourseRecord` field.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::CourseFile;
use crate::error::AppError;

/// Default course-file path: `GPA_TRACK_FILE` from the environment (a `.env`
/// file is honored), falling back to `courses.json` in the working directory.
pub fn default_store_path() -> PathBuf {
    dotenvy::dotenv().ok();
    std::env::var("GPA_TRACK_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("courses.json"))
}

/// Load the course file. A missing file is an empty list, not an error.
pub fn load_courses(path: &Path) -> Result<CourseFile, AppError> {
    if !path.exists() {
        return Ok(CourseFile::default());
    }

    let file = File::open(path).map_err(|e| {
        AppError::new(4, format!("Failed to open course file '{}': {e}", path.display()))
    })?;
    let book: CourseFile = serde_json::from_reader(file).map_err(|e| {
        AppError::new(4, format!("Invalid course file '{}': {e}", path.display()))
    })?;
    Ok(book)
}

/// Write the course file as pretty JSON.
pub fn save_courses(path: &Path, book: &CourseFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            4,
            format!("Failed to create course file '{}': {e}", path.display()),
        )
    })?;
    serde_json::to_writer_pretty(file, book)
        .map_err(|e| AppError::new(4, format!("Failed to write course file: {e}")))?;
    Ok(())
}
