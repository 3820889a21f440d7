use rand::Rng;
use serde::Deserialize;

use crate::phrases::{ACRONYMS, BUZZWORDS};
use crate::shape::{in_range, whole_number, Shape};
use crate::shuffle::pick;
use crate::ToolError;

pub const NAME: &str = "generate_corporate_jargon";
pub const DESCRIPTION: &str = "Create meaningless buzzword-filled content to impress management";

const MAX_SENTENCES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JargonContext {
    Email,
    Meeting,
    Presentation,
    PerformanceReview,
}

impl JargonContext {
    pub fn opener(self) -> &'static str {
        match self {
            JargonContext::Email => "I hope this email finds you well.",
            JargonContext::Meeting => "Just wanted to touch base with everyone.",
            JargonContext::Presentation => {
                "As you can see from this slide, the data tells a compelling story."
            }
            JargonContext::PerformanceReview => "Let's discuss areas of opportunity and growth.",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorporateJargonArgs {
    pub context: JargonContext,
    #[serde(deserialize_with = "whole_number")]
    pub intensity: u32,
    pub include_acronyms: bool,
}

impl Shape for CorporateJargonArgs {
    fn check(&self) -> Result<(), ToolError> {
        in_range("intensity", self.intensity as f64, 1.0, 10.0)
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "context": {
                "type": "string",
                "enum": ["email", "meeting", "presentation", "performance_review"],
                "description": "Where this jargon will be used"
            },
            "intensity": {
                "type": "integer",
                "minimum": 1,
                "maximum": 10,
                "description": "Jargon intensity level (1-10)"
            },
            "include_acronyms": {
                "type": "boolean",
                "description": "Whether to include meaningless acronyms"
            }
        },
        "required": ["context", "intensity", "include_acronyms"]
    })
}

pub fn sentence_count(intensity: u32) -> u32 {
    (5 + intensity).min(MAX_SENTENCES)
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let a = pick(&BUZZWORDS, rng);
    let b = pick(&BUZZWORDS, rng);
    let c = pick(&BUZZWORDS, rng);

    match rng.gen_range(0..7) {
        0 => format!("We need to {a} our {b} to {c} market expectations."),
        1 => format!("Let's {a} the {b} to ensure {c} across departments."),
        2 => format!("I'm thinking we should {a} our {b} strategy with a focus on {c}."),
        3 => format!("Moving forward, our {a} will {b} the entire {c} ecosystem."),
        4 => format!("The {a} framework provides {b} while maintaining {c}."),
        5 => format!("We're {a} the {b} space to {c} our core competencies."),
        _ => format!("Our {a} roadmap will {b} key stakeholders through {c}."),
    }
}

/// Build the body sentences, each ending in a single period.
pub fn sentences<R: Rng + ?Sized>(
    intensity: u32,
    include_acronyms: bool,
    rng: &mut R,
) -> Vec<String> {
    (0..sentence_count(intensity))
        .map(|_| {
            let sentence = sentence(rng);
            if include_acronyms && rng.gen_bool(0.5) {
                let acronym = pick(&ACRONYMS, rng);
                let stem = sentence.strip_suffix('.').unwrap_or(&sentence);
                format!("{stem} to improve our {acronym}.")
            } else {
                sentence
            }
        })
        .collect()
}

pub fn generate<R: Rng + ?Sized>(args: &CorporateJargonArgs, rng: &mut R) -> Result<String, ToolError> {
    let body = sentences(args.intensity, args.include_acronyms, rng).join(" ");
    let sign_off = if args.include_acronyms {
        "\n\nEOD COB ASAP!"
    } else {
        ""
    };

    Ok(format!(
        "{opener}\n\n{body}\n\nLet's circle back on this and touch base soon to ensure alignment.{sign_off}",
        opener = args.context.opener(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::parse;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn args(intensity: u32, include_acronyms: bool) -> CorporateJargonArgs {
        CorporateJargonArgs {
            context: JargonContext::Meeting,
            intensity,
            include_acronyms,
        }
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count(1), 6);
        assert_eq!(sentence_count(10), 15);
        assert_eq!(sentence_count(20), 15);
    }

    #[test]
    fn test_intensity_one_yields_six_sentences() {
        let mut rng = StdRng::seed_from_u64(8);
        let body = sentences(1, false, &mut rng);
        assert_eq!(body.len(), 6);
        assert!(body.iter().all(|s| s.ends_with('.') && s.matches('.').count() == 1));
    }

    #[test]
    fn test_intensity_out_of_range_is_rejected() {
        let json = serde_json::json!({"context": "email", "intensity": 20, "include_acronyms": false});
        assert!(matches!(
            parse::<CorporateJargonArgs>(json),
            Err(ToolError::Shape(_))
        ));

        let json = serde_json::json!({"context": "email", "intensity": 0, "include_acronyms": false});
        assert!(parse::<CorporateJargonArgs>(json).is_err());
    }

    #[test]
    fn test_integral_float_intensity() {
        let json = serde_json::json!({"context": "email", "intensity": 3.0, "include_acronyms": false});
        let args: CorporateJargonArgs = parse(json).unwrap();
        assert_eq!(args.intensity, 3);

        let json = serde_json::json!({"context": "email", "intensity": 3.5, "include_acronyms": false});
        assert!(matches!(
            parse::<CorporateJargonArgs>(json),
            Err(ToolError::Shape(_))
        ));
    }

    #[test]
    fn test_unknown_context_is_rejected() {
        let json = serde_json::json!({"context": "slack", "intensity": 3, "include_acronyms": false});
        assert!(matches!(
            parse::<CorporateJargonArgs>(json),
            Err(ToolError::Shape(_))
        ));
    }

    #[test]
    fn test_no_acronyms_when_disabled() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let text = generate(&args(10, false), &mut rng).unwrap();
            assert!(ACRONYMS.iter().all(|a| !text.contains(a)));
        }
    }

    #[test]
    fn test_acronyms_when_enabled() {
        let mut rng = StdRng::seed_from_u64(21);
        let text = generate(&args(10, true), &mut rng).unwrap();
        assert!(text.ends_with("EOD COB ASAP!"));

        // 15 sentences at 50% each: a seeded run always lands at least one.
        let body = sentences(10, true, &mut rng);
        assert!(body.iter().any(|s| s.contains(" to improve our ")));
        assert!(body.iter().all(|s| s.matches('.').count() == 1));
    }

    #[test]
    fn test_opener_follows_context() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut a = args(1, false);
        a.context = JargonContext::Email;
        let text = generate(&a, &mut rng).unwrap();
        assert!(text.starts_with("I hope this email finds you well.\n\n"));
        assert!(text.ends_with("touch base soon to ensure alignment."));
    }
}
