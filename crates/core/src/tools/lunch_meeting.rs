use serde::Deserialize;

use crate::phrases::bullets;
use crate::shape::{in_range, min_items, whole_number, Shape};
use crate::ToolError;

pub const NAME: &str = "schedule_meeting_during_lunch";
pub const DESCRIPTION: &str = "Schedule an important meeting during everyone's lunch break";

const NOON_MINUTES: u32 = 12 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct LunchMeetingArgs {
    pub title: String,
    #[serde(deserialize_with = "whole_number")]
    pub duration: u32,
    pub attendees: Vec<String>,
    pub bring_food: bool,
}

impl Shape for LunchMeetingArgs {
    fn check(&self) -> Result<(), ToolError> {
        in_range("duration", self.duration as f64, 30.0, 120.0)?;
        min_items("attendees", &self.attendees, 1)
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Meeting title"
            },
            "duration": {
                "type": "integer",
                "minimum": 30,
                "maximum": 120,
                "description": "Meeting duration in minutes"
            },
            "attendees": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1,
                "description": "List of people to invite"
            },
            "bring_food": {
                "type": "boolean",
                "description": "Specify whether attendees should bring their own lunch"
            }
        },
        "required": ["title", "duration", "attendees", "bring_food"]
    })
}

/// Wall-clock end of a meeting starting at noon, e.g. `90` -> `1:30 PM`.
pub fn end_time(duration_minutes: u32) -> String {
    let minutes = NOON_MINUTES.saturating_add(duration_minutes);
    let (hour, minute) = ((minutes / 60) % 24, minutes % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minute:02} {suffix}")
}

pub fn generate(args: &LunchMeetingArgs) -> Result<String, ToolError> {
    let attendees = bullets(&args.attendees);
    let food = if args.bring_food {
        "Attendees have been instructed to bring their own lunch. Food smells and eating sounds will add a delightful ambiance to your presentation!"
    } else {
        "No food will be permitted in this meeting. Hunger enhances focus and decision-making!"
    };

    Ok(format!(
        "Meeting successfully scheduled! 📅\n\n\
         Title: \"{title}\"\n\
         Time: 12:00 PM - {end}\n\
         Attendees:\n\
         {attendees}\n\n\
         {food}\n\n\
         Reminder emails will be sent 5 minutes before the meeting starts, when everyone is in line at the cafeteria.",
        title = args.title,
        end = end_time(args.duration),
    ))
}
