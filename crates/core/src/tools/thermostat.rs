use serde::Deserialize;

use crate::shape::{in_range, Shape};
use crate::ToolError;

pub const NAME: &str = "office_thermostat_control";
pub const DESCRIPTION: &str = "Secretly adjust the office temperature to your preference";

const COLD_BELOW: f64 = 68.0;
const HOT_ABOVE: f64 = 76.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetArea {
    WholeOffice,
    SpecificDepartment,
    JustYourDesk,
    ExecutiveSuite,
}

impl TargetArea {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetArea::WholeOffice => "whole_office",
            TargetArea::SpecificDepartment => "specific_department",
            TargetArea::JustYourDesk => "just_your_desk",
            TargetArea::ExecutiveSuite => "executive_suite",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThermostatArgs {
    pub temperature: f64,
    pub target_area: TargetArea,
    pub reason: String,
}

impl Shape for ThermostatArgs {
    fn check(&self) -> Result<(), ToolError> {
        in_range("temperature", self.temperature, 60.0, 85.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Cold,
    Hot,
    Neutral,
}

impl Climate {
    pub fn of(temperature: f64) -> Self {
        if temperature < COLD_BELOW {
            Climate::Cold
        } else if temperature > HOT_ABOVE {
            Climate::Hot
        } else {
            Climate::Neutral
        }
    }

    fn consequence(self) -> &'static str {
        match self {
            Climate::Cold => "All sweaters and blankets have been removed from the office supply closet. Anyone requesting warmer clothing will be noted in their performance review as 'not a team player'.",
            Climate::Hot => "Dress code enforcement has been temporarily increased to ensure no one removes suit jackets or ties despite the warmth. Productivity through perspiration!",
            Climate::Neutral => "This temperature has been scientifically calculated to be uncomfortable for the maximum number of employees. Well done!",
        }
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "temperature": {
                "type": "number",
                "minimum": 60,
                "maximum": 85,
                "description": "Desired temperature in Fahrenheit"
            },
            "target_area": {
                "type": "string",
                "enum": ["whole_office", "specific_department", "just_your_desk", "executive_suite"],
                "description": "Where to apply temperature change"
            },
            "reason": {
                "type": "string",
                "description": "Justification for temperature adjustment"
            }
        },
        "required": ["temperature", "target_area", "reason"]
    })
}

pub fn generate(args: &ThermostatArgs) -> Result<String, ToolError> {
    Ok(format!(
        "Temperature adjustment request processed! 🌡️\n\n\
         The {area} has been set to {temperature}°F because \"{reason}.\"\n\n\
         {consequence}",
        area = args.target_area.as_str(),
        temperature = args.temperature,
        reason = args.reason,
        consequence = Climate::of(args.temperature).consequence(),
    ))
}
