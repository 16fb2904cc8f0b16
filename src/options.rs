//! Per-option validators.
//!
//! Each validator inspects one entry of the parsed options and reports
//! `Valid`/`Absent`/`Invalid`. Absence is not an error; it means the
//! pipeline uses the option's default behavior.

use crate::error::{DumpError, ErrorKind};
use crate::parse::ParsedOptions;

/// Unicode emoji spec versions the dataset may reference, ascending.
pub const UNICODE_VERSIONS: [f64; 14] = [
    1.1, 3.0, 3.2, 4.0, 4.1, 5.1, 5.2, 6.0, 6.1, 7.0, 8.0, 9.0, 10.0, 11.0,
];

/// Effective version when `unicode` is absent: everything is kept.
pub const MAX_UNICODE_VERSION: f64 = 11.0;

pub const MIN_ZOOM: i64 = 1;
pub const MAX_ZOOM: i64 = 4;

/// Result of validating a single option.
#[derive(Debug, Clone)]
pub enum Validation<T> {
    Valid(T),
    Absent,
    Invalid(DumpError),
}

/// Render a version the way it appears in the supported set (`6.0`, not `6`).
pub fn format_version(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("{version:.1}")
    } else {
        format!("{version}")
    }
}

fn supported_versions_hint() -> String {
    let list: Vec<String> = UNICODE_VERSIONS.iter().copied().map(format_version).collect();
    format!("Supported versions: {}", list.join(", "))
}

/// `unicode=V`: must be a member of the supported version set.
pub fn unicode_version(options: &ParsedOptions) -> Validation<f64> {
    let Some(value) = options.get("unicode") else {
        return Validation::Absent;
    };
    match value.as_float() {
        Some(version) if UNICODE_VERSIONS.contains(&version) => Validation::Valid(version),
        _ => Validation::Invalid(
            DumpError::new(
                ErrorKind::Validation,
                format!("Invalid Unicode version: {value}"),
            )
            .with_context(supported_versions_hint()),
        ),
    }
}

/// `shuffle=B`: must be a boolean.
pub fn shuffle_flag(options: &ParsedOptions) -> Validation<bool> {
    boolean_option(options, "shuffle")
}

/// `join=B`: must be a boolean.
pub fn join_flag(options: &ParsedOptions) -> Validation<bool> {
    boolean_option(options, "join")
}

fn boolean_option(options: &ParsedOptions, name: &str) -> Validation<bool> {
    let Some(value) = options.get(name) else {
        return Validation::Absent;
    };
    match value.as_bool() {
        Some(flag) => Validation::Valid(flag),
        None => Validation::Invalid(
            DumpError::new(
                ErrorKind::Validation,
                format!("Invalid {name} option: {value}"),
            )
            .with_context("Expected true or false"),
        ),
    }
}

/// `max=N`: any integer is valid; the pipeline decides whether it truncates.
pub fn max_count(options: &ParsedOptions) -> Validation<i64> {
    let Some(value) = options.get("max") else {
        return Validation::Absent;
    };
    match value.as_integer() {
        Some(count) => Validation::Valid(count),
        None => Validation::Invalid(
            DumpError::new(ErrorKind::Validation, format!("Invalid max value: {value}"))
                .with_context("Expected an integer"),
        ),
    }
}

/// `zoom=N`: integer within the inclusive `[MIN_ZOOM, MAX_ZOOM]` range.
pub fn zoom_level(options: &ParsedOptions) -> Validation<i64> {
    let Some(value) = options.get("zoom") else {
        return Validation::Absent;
    };
    match value.as_integer() {
        Some(level) if (MIN_ZOOM..=MAX_ZOOM).contains(&level) => Validation::Valid(level),
        _ => Validation::Invalid(
            DumpError::new(ErrorKind::Validation, format!("Invalid zoom value: {value}"))
                .with_context(format!(
                    "Expected an integer between {MIN_ZOOM} and {MAX_ZOOM}"
                )),
        ),
    }
}
