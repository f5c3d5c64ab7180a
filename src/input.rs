//! Input collection for the CLI surface.
//!
//! This layer owns everything the core pipeline refuses to do: prompting,
//! default substitution on malformed free-form numbers, and domain
//! validation of the collected record. Records that reach the pipeline are
//! already well-formed.

use crate::artifacts::ArtifactStore;
use crate::types::CustomerRecord;
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use tracing::warn;
use validator::Validate;

/// Credit score substituted for malformed input.
pub const DEFAULT_CREDIT_SCORE: f64 = 650.0;
/// Account balance substituted for malformed input.
pub const DEFAULT_BALANCE: f64 = 0.0;
/// Estimated salary substituted for malformed input.
pub const DEFAULT_ESTIMATED_SALARY: f64 = 50_000.0;

/// Parse a free-form numeric field, substituting `default` when the raw
/// text does not parse to a finite number. Returns whether the default was
/// used so the caller can warn about it.
pub fn parse_with_default(raw: &str, default: f64) -> (f64, bool) {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => (value, false),
        _ => (default, true),
    }
}

/// Deserialize a record from JSON and enforce the field domains.
pub fn record_from_json(raw: &str) -> Result<CustomerRecord> {
    let record: CustomerRecord =
        serde_json::from_str(raw).context("Failed to parse customer record")?;
    record
        .validate()
        .context("Customer record is outside the supported domain")?;
    Ok(record)
}

/// Collect a record interactively, offering the category choices the
/// encoders were fitted on.
pub fn prompt_record(store: &ArtifactStore) -> Result<CustomerRecord> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let geography = prompt_choice(&mut lines, "Geography", &store.geo_encoder().categories)?;
    let gender = prompt_choice(&mut lines, "Gender", &store.gender_encoder().classes)?;
    let age = prompt_integer(&mut lines, "Age", 18, 92)?;
    let credit_score = prompt_with_default(&mut lines, "Credit Score", DEFAULT_CREDIT_SCORE)?;
    let balance = prompt_with_default(&mut lines, "Balance", DEFAULT_BALANCE)?;
    let estimated_salary =
        prompt_with_default(&mut lines, "Estimated Salary", DEFAULT_ESTIMATED_SALARY)?;
    let tenure = prompt_integer(&mut lines, "Tenure (years)", 0, 10)?;
    let num_of_products = prompt_integer(&mut lines, "Number of Products", 1, 4)?;
    let has_cr_card = prompt_integer(&mut lines, "Has Credit Card (0/1)", 0, 1)?;
    let is_active_member = prompt_integer(&mut lines, "Is Active Member (0/1)", 0, 1)?;

    Ok(CustomerRecord {
        credit_score,
        geography,
        gender,
        age,
        tenure,
        balance,
        num_of_products,
        has_cr_card,
        is_active_member,
        estimated_salary,
    })
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    match lines.next() {
        Some(line) => line.context("Failed to read input"),
        None => bail!("Input closed before the record was complete"),
    }
}

fn prompt_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    options: &[String],
) -> Result<String> {
    loop {
        print!("{label} ({}): ", options.join("/"));
        io::stdout().flush()?;

        let answer = next_line(lines)?;
        let answer = answer.trim();
        if let Some(matched) = options.iter().find(|option| option.as_str() == answer) {
            return Ok(matched.clone());
        }
        eprintln!("Please enter one of: {}", options.join(", "));
    }
}

fn prompt_integer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    min: u8,
    max: u8,
) -> Result<u8> {
    loop {
        print!("{label} [{min}-{max}]: ");
        io::stdout().flush()?;

        let answer = next_line(lines)?;
        match answer.trim().parse::<u8>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => eprintln!("Please enter an integer between {min} and {max}"),
        }
    }
}

fn prompt_with_default(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    default: f64,
) -> Result<f64> {
    print!("{label} [{default}]: ");
    io::stdout().flush()?;

    let raw = next_line(lines)?;
    let (value, used_default) = parse_with_default(&raw, default);
    if used_default {
        warn!(field = label, default, "Invalid input, defaulting");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_accepts_valid_numbers() {
        assert_eq!(parse_with_default("712", 650.0), (712.0, false));
        assert_eq!(parse_with_default("  83807.86 ", 0.0), (83807.86, false));
        assert_eq!(parse_with_default("-5.5", 0.0), (-5.5, false));
    }

    #[test]
    fn test_parse_with_default_substitutes_on_garbage() {
        assert_eq!(parse_with_default("abc", 650.0), (650.0, true));
        assert_eq!(parse_with_default("", 50_000.0), (50_000.0, true));
        assert_eq!(parse_with_default("12,5", 0.0), (0.0, true));
        assert_eq!(parse_with_default("inf", 0.0), (0.0, true));
    }

    #[test]
    fn test_record_from_json_enforces_domains() {
        let valid = r#"{
            "credit_score": 650.0, "geography": "France", "gender": "Female",
            "age": 40, "tenure": 3, "balance": 0.0, "num_of_products": 2,
            "has_cr_card": 1, "is_active_member": 1, "estimated_salary": 50000.0
        }"#;
        assert!(record_from_json(valid).is_ok());

        let under_age = valid.replace("\"age\": 40", "\"age\": 12");
        assert!(record_from_json(&under_age).is_err());

        let missing_field = r#"{"geography": "France", "gender": "Female", "age": 40}"#;
        assert!(record_from_json(missing_field).is_err());
    }
}
