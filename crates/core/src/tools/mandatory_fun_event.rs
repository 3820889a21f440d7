use rand::Rng;
use serde::Deserialize;

use crate::shape::{in_range, Shape};
use crate::ToolError;

pub const NAME: &str = "mandatory_fun_event";
pub const DESCRIPTION: &str = "Schedule a required team-building activity outside work hours";

const VOUCHER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventDay {
    Saturday,
    Sunday,
    Holiday,
    Evening,
}

impl EventDay {
    pub fn as_str(self) -> &'static str {
        match self {
            EventDay::Saturday => "Saturday",
            EventDay::Sunday => "Sunday",
            EventDay::Holiday => "Holiday",
            EventDay::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MandatoryFunEventArgs {
    pub activity: String,
    pub day: EventDay,
    pub duration: f64,
    pub personal_expenses_required: bool,
}

impl Shape for MandatoryFunEventArgs {
    fn check(&self) -> Result<(), ToolError> {
        in_range("duration", self.duration, 2.0, 12.0)
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "activity": {
                "type": "string",
                "description": "Type of 'fun' activity to plan"
            },
            "day": {
                "type": "string",
                "enum": ["Saturday", "Sunday", "Holiday", "Evening"],
                "description": "When to schedule the event"
            },
            "duration": {
                "type": "number",
                "minimum": 2,
                "maximum": 12,
                "description": "Duration in hours"
            },
            "personal_expenses_required": {
                "type": "boolean",
                "description": "Whether employees must pay their own expenses"
            }
        },
        "required": ["activity", "day", "duration", "personal_expenses_required"]
    })
}

pub fn generate<R: Rng + ?Sized>(
    args: &MandatoryFunEventArgs,
    rng: &mut R,
) -> Result<String, ToolError> {
    let expenses = if args.personal_expenses_required {
        let per_person = rng.gen_range(5..20) * 10;
        format!(
            "Employees will cover their own expenses for this mandatory event. Approximate cost per person: ${per_person}"
        )
    } else {
        let remaining = rng.gen_range(10..30) * 10;
        format!(
            "The company will provide a ${VOUCHER} voucher toward expenses, with employees covering the remaining ${remaining}."
        )
    };

    Ok(format!(
        "Mandatory Fun Event scheduled! 🎉\n\n\
         Activity: {activity}\n\
         Day: {day}\n\
         Duration: {duration} hours\n\n\
         All team members are required to attend this \"optional\" event. Non-attendance will be noted in their next performance review under \"team engagement and culture fit.\"\n\n\
         {expenses}\n\n\
         Emails have been scheduled to go out Friday at 4:55 PM to notify the team.",
        activity = args.activity,
        day = args.day.as_str(),
        duration = args.duration,
    ))
}
