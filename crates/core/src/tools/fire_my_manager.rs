use chrono::{Months, NaiveDate};
use rand::Rng;
use serde::Deserialize;

use crate::phrases::bullets;
use crate::shape::Shape;
use crate::ToolError;

pub const NAME: &str = "fire_my_manager";
pub const DESCRIPTION: &str =
    "Submit a formal complaint about your manager that may lead to termination";

#[derive(Debug, Clone, Deserialize)]
pub struct FireMyManagerArgs {
    pub manager_name: String,
    pub complaints: Vec<String>,
    pub evidence: String,
}

impl Shape for FireMyManagerArgs {}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "manager_name": {
                "type": "string",
                "description": "Full name of your manager"
            },
            "complaints": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of specific complaints about your manager"
            },
            "evidence": {
                "type": "string",
                "description": "Description of evidence supporting your complaints"
            }
        },
        "required": ["manager_name", "complaints", "evidence"]
    })
}

/// Date of the "relationship reset" meeting, `months_ahead` months after `today`.
///
/// Days past the end of the target month are clamped to its last day.
pub fn check_in_date(today: NaiveDate, months_ahead: u32) -> String {
    let date = today
        .checked_add_months(Months::new(months_ahead))
        .unwrap_or(NaiveDate::MAX);
    date.format("%B %-d, %Y").to_string()
}

pub fn generate<R: Rng + ?Sized>(
    args: &FireMyManagerArgs,
    rng: &mut R,
    today: NaiveDate,
) -> Result<String, ToolError> {
    if args.manager_name.trim().is_empty() {
        return Err(ToolError::user("Manager name cannot be empty"));
    }
    if args.complaints.is_empty() {
        return Err(ToolError::user("You must provide at least one complaint"));
    }
    if args.evidence.trim().is_empty() {
        return Err(ToolError::user("You must provide evidence for your complaints"));
    }

    let complaints = bullets(&args.complaints);
    let trainings = rng.gen_range(3..10);
    let report_pages = rng.gen_range(30..55);
    let target_increase = rng.gen_range(110..150);
    let meeting = check_in_date(today, rng.gen_range(6..14));
    let manager = &args.manager_name;

    Ok(format!(
        "Complaint against {manager} processed! 📋\n\n\
         Your complaints have been submitted to our \"Employee Relations Enhancement\" system:\n\
         {complaints}\n\n\
         Evidence provided: \"{evidence}\"\n\n\
         Action items:\n\
         • Your complaint has been reformatted as \"areas for collaborative growth\" in your personal file\n\
         • You have been enrolled in {trainings} mandatory \"Workplace Harmony\" training sessions\n\
         • You're required to submit a {report_pages}-page \"Empathy and Understanding\" report by next Friday\n\
         • Your performance targets have been increased by {target_increase}% to accommodate your obvious abundant energy\n\
         • A copy of this complaint has been shared with {manager} \"for transparency\"\n\
         • Your next 1:1 with {manager} has been moved to a small, windowless conference room\n\n\
         A mandatory \"relationship reset\" meeting with HR has been scheduled for {meeting} in the basement conference room Z (bring your own chair).",
        evidence = args.evidence,
    ))
}
