//! Shape validation shared by every tool.
//!
//! Arguments arrive as loose JSON. They are first deserialized into the
//! tool's typed input (which rejects missing fields, wrong types and unknown
//! enum values) and then checked against the numeric bounds and array
//! lengths published in the tool's input schema.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::ToolError;

/// A typed tool input with bounds that serde alone cannot express.
pub trait Shape: DeserializeOwned {
    fn check(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Deserialize and bounds-check a tool's arguments.
pub fn parse<T: Shape>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let args: T = serde_json::from_value(arguments).map_err(|e| ToolError::shape(e.to_string()))?;
    args.check()?;
    Ok(args)
}

/// Deserialize an integer-valued JSON number (`90` or `90.0`) as `u32`.
pub fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}

pub fn in_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ToolError> {
    if value < min || value > max {
        return Err(ToolError::shape(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub fn min_items<T>(field: &str, items: &[T], min: usize) -> Result<(), ToolError> {
    if items.len() < min {
        return Err(ToolError::shape(format!(
            "{field} must contain at least {min} item(s)"
        )));
    }
    Ok(())
}
