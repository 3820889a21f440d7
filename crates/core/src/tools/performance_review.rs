use rand::Rng;
use serde::Deserialize;

use crate::phrases::{bullets, VAGUE_DEVELOPMENT, VAGUE_NEGATIVE, VAGUE_POSITIVE};
use crate::shape::Shape;
use crate::shuffle::sample;
use crate::ToolError;

pub const NAME: &str = "generate_performance_review";
pub const DESCRIPTION: &str = "Create vague, unhelpful feedback for employee performance reviews";

const DEVELOPMENT_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    ExceedsExpectations,
    MeetsExpectations,
    NeedsImprovement,
}

impl Rating {
    /// Number of (positive, negative) points drawn for this rating.
    pub fn point_counts(self, include_criticism: bool) -> (usize, usize) {
        match (self, include_criticism) {
            (Rating::ExceedsExpectations, true) => (4, 1),
            (Rating::ExceedsExpectations, false) => (4, 0),
            (Rating::MeetsExpectations, true) => (2, 2),
            (Rating::MeetsExpectations, false) => (2, 0),
            (Rating::NeedsImprovement, true) => (1, 4),
            (Rating::NeedsImprovement, false) => (1, 2),
        }
    }

    fn header(self) -> &'static str {
        match self {
            Rating::ExceedsExpectations => {
                "Overall, an excellent performer with minor areas for growth."
            }
            Rating::MeetsExpectations => {
                "Consistently delivers expected results, with balanced strengths and development areas."
            }
            Rating::NeedsImprovement => {
                "Has potential but requires significant development in several areas."
            }
        }
    }

    fn outlook(self) -> &'static str {
        match self {
            Rating::NeedsImprovement => "meet expectations",
            _ => "continue performing well",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceReviewArgs {
    pub employee_name: String,
    pub overall_rating: Rating,
    pub include_criticism: bool,
}

impl Shape for PerformanceReviewArgs {}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "employee_name": {
                "type": "string",
                "description": "Name of employee to review"
            },
            "overall_rating": {
                "type": "string",
                "enum": ["exceeds_expectations", "meets_expectations", "needs_improvement"],
                "description": "General performance level"
            },
            "include_criticism": {
                "type": "boolean",
                "description": "Whether to include demotivating criticism"
            }
        },
        "required": ["employee_name", "overall_rating", "include_criticism"]
    })
}

pub fn generate<R: Rng + ?Sized>(
    args: &PerformanceReviewArgs,
    rng: &mut R,
) -> Result<String, ToolError> {
    let rating = args.overall_rating;
    let name = &args.employee_name;
    let (positive_count, negative_count) = rating.point_counts(args.include_criticism);

    let positives = sample(&VAGUE_POSITIVE, positive_count, rng);
    let negatives = sample(&VAGUE_NEGATIVE, negative_count, rng);
    let developments = sample(&VAGUE_DEVELOPMENT, DEVELOPMENT_POINTS, rng);

    let mut review = format!(
        "Performance Review for {name}\n\n{header}\n\nStrengths:\n{strengths}\n\n",
        header = rating.header(),
        strengths = bullets(&positives),
    );

    if !negatives.is_empty() {
        review.push_str(&format!(
            "Areas for Development:\n{}\n\n",
            bullets(&negatives)
        ));
    }

    review.push_str(&format!(
        "Going Forward, {name} should:\n{}\n\n",
        bullets(&developments)
    ));
    review.push_str(&format!(
        "This review will be revisited in 6 months to assess progress. {name} has all the tools needed to {outlook} with proper focus and alignment to organizational objectives.",
        outlook = rating.outlook(),
    ));

    Ok(review)
}
