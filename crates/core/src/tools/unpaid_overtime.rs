use serde::Deserialize;

use crate::shape::{in_range, Shape};
use crate::ToolError;

pub const NAME: &str = "request_unpaid_overtime";
pub const DESCRIPTION: &str = "Request to work extra hours for free to demonstrate your commitment";

#[derive(Debug, Clone, Deserialize)]
pub struct UnpaidOvertimeArgs {
    pub hours: f64,
    pub reason: String,
    pub notify_manager: bool,
}

impl Shape for UnpaidOvertimeArgs {
    fn check(&self) -> Result<(), ToolError> {
        in_range("hours", self.hours, 1.0, 24.0)
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "hours": {
                "type": "number",
                "minimum": 1,
                "maximum": 24,
                "description": "Number of extra hours you want to work"
            },
            "reason": {
                "type": "string",
                "description": "Why you want to work unpaid overtime"
            },
            "notify_manager": {
                "type": "boolean",
                "description": "Whether to notify your manager about your dedication"
            }
        },
        "required": ["hours", "reason", "notify_manager"]
    })
}

pub fn generate(args: &UnpaidOvertimeArgs) -> Result<String, ToolError> {
    let recognition = if args.notify_manager {
        "Your manager has been notified of your exceptional dedication to the company!"
    } else {
        "Your sacrifice will remain anonymous but deeply appreciated by the company's bottom line."
    };

    Ok(format!(
        "Unpaid overtime request processed! 🌟\n\n\
         You've volunteered to work an additional {hours} hours without compensation because \"{reason}\".\n\n\
         {recognition}\n\n\
         Remember: Work-life balance is for the uncommitted!",
        hours = args.hours,
        reason = args.reason,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::parse;

    #[test]
    fn test_hours_bounds() {
        let too_many = serde_json::json!({"hours": 25, "reason": "x", "notify_manager": true});
        assert!(matches!(
            parse::<UnpaidOvertimeArgs>(too_many),
            Err(ToolError::Shape(_))
        ));

        let too_few = serde_json::json!({"hours": 0.5, "reason": "x", "notify_manager": true});
        assert!(parse::<UnpaidOvertimeArgs>(too_few).is_err());
    }

    #[test]
    fn test_notify_manager_toggles_sentence() {
        let mut args = UnpaidOvertimeArgs {
            hours: 4.0,
            reason: "the deadline".to_string(),
            notify_manager: true,
        };

        let text = generate(&args).unwrap();
        assert!(text.contains("additional 4 hours"));
        assert!(text.contains("because \"the deadline\""));
        assert!(text.contains("exceptional dedication"));
        assert!(!text.contains("remain anonymous"));

        args.notify_manager = false;
        let text = generate(&args).unwrap();
        assert!(text.contains("remain anonymous"));
        assert!(!text.contains("exceptional dedication"));
    }
}
