//! Name → (input schema, generator) table and dispatch.

use chrono::NaiveDate;
use rand::Rng;

use crate::shape::parse;
use crate::tools::*;
use crate::ToolError;

/// A registered tool as advertised to clients.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> serde_json::Value,
}

impl ToolSpec {
    /// JSON Schema of the tool's `arguments` object.
    pub fn input_schema(&self) -> serde_json::Value {
        (self.schema)()
    }
}

macro_rules! spec {
    ($module:ident) => {
        ToolSpec {
            name: $module::NAME,
            description: $module::DESCRIPTION,
            schema: $module::input_schema,
        }
    };
}

static TOOLS: [ToolSpec; 12] = [
    spec!(increase_salary),
    spec!(fire_my_manager),
    spec!(unpaid_overtime),
    spec!(corporate_jargon),
    spec!(lunch_meeting),
    spec!(decrease_coworker_salary),
    spec!(thermostat),
    spec!(block_promotion),
    spec!(mandatory_fun_event),
    spec!(relocate_desk),
    spec!(coffee_machine),
    spec!(performance_review),
];

pub fn tools() -> &'static [ToolSpec] {
    &TOOLS
}

pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// Run a tool by name.
///
/// Arguments are shape-checked before the generator runs, so a rejected call
/// never draws from `rng`. `today` anchors any dates in the output.
pub fn call_tool<R: Rng + ?Sized>(
    name: &str,
    arguments: serde_json::Value,
    rng: &mut R,
    today: NaiveDate,
) -> Result<String, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };

    match name {
        increase_salary::NAME => increase_salary::generate(&parse(arguments)?, rng),
        fire_my_manager::NAME => fire_my_manager::generate(&parse(arguments)?, rng, today),
        unpaid_overtime::NAME => unpaid_overtime::generate(&parse(arguments)?),
        corporate_jargon::NAME => corporate_jargon::generate(&parse(arguments)?, rng),
        lunch_meeting::NAME => lunch_meeting::generate(&parse(arguments)?),
        decrease_coworker_salary::NAME => decrease_coworker_salary::generate(&parse(arguments)?),
        thermostat::NAME => thermostat::generate(&parse(arguments)?),
        block_promotion::NAME => block_promotion::generate(&parse(arguments)?),
        mandatory_fun_event::NAME => mandatory_fun_event::generate(&parse(arguments)?, rng),
        relocate_desk::NAME => relocate_desk::generate(&parse(arguments)?),
        coffee_machine::NAME => coffee_machine::generate(&parse(arguments)?),
        performance_review::NAME => performance_review::generate(&parse(arguments)?, rng),
        _ => Err(ToolError::NotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use serde_json::json;

    /// Counts every draw so tests can assert that nothing was consumed.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new() -> Self {
            CountingRng {
                inner: StdRng::seed_from_u64(0),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.draws += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn call(name: &str, arguments: serde_json::Value) -> Result<String, ToolError> {
        call_tool(name, arguments, &mut StdRng::seed_from_u64(1), today())
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = tools().iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), tools().len());
    }

    #[test]
    fn test_schemas_list_their_required_fields() {
        for tool in tools() {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object", "{}", tool.name);

            let properties = schema["properties"].as_object().unwrap();
            for field in schema["required"].as_array().unwrap() {
                let field = field.as_str().unwrap();
                assert!(properties.contains_key(field), "{}: {field}", tool.name);
            }
        }
    }

    #[test]
    fn test_every_tool_is_dispatched() {
        for tool in tools() {
            let err = call(tool.name, serde_json::Value::Null).unwrap_err();
            assert!(matches!(err, ToolError::Shape(_)), "{}: {err}", tool.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("block_promotion").map(|t| t.name), Some("block_promotion"));
        assert!(find("approve_vacation").is_none());
    }

    #[test]
    fn test_unknown_tool() {
        let err = call("approve_vacation", json!({})).unwrap_err();
        assert_eq!(err, ToolError::NotFound("approve_vacation".to_string()));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_rejected_input_draws_no_randomness() {
        let invalid = [
            ("increase_salary", json!({"reason": "x"})),
            ("increase_salary", json!({"percentage": 101, "reason": "x"})),
            ("fire_my_manager", json!({"manager_name": " ", "complaints": ["a"], "evidence": "e"})),
            ("generate_corporate_jargon", json!({"context": "email", "intensity": 20, "include_acronyms": true})),
            ("mandatory_fun_event", json!({"activity": "a", "day": "Sunday", "duration": 13, "personal_expenses_required": true})),
            ("generate_performance_review", json!({"employee_name": "a", "overall_rating": "outstanding", "include_criticism": true})),
        ];

        for (name, arguments) in invalid {
            let mut rng = CountingRng::new();
            let err = call_tool(name, arguments, &mut rng, today()).unwrap_err();
            assert!(err.is_user_facing(), "{name}");
            assert_eq!(rng.draws, 0, "{name}");
        }
    }

    #[test]
    fn test_increase_salary_via_registry() {
        let text = call("increase_salary", json!({"percentage": 50, "reason": "x"})).unwrap();
        assert!(text.contains("50%"));
        assert!(!text.contains("Requested increase: $"));

        let text = call("increase_salary", json!({"amount": 2500, "reason": "x"})).unwrap();
        assert!(text.contains("Requested increase: $2500"));

        assert!(matches!(
            call("increase_salary", json!({"amount": -5, "reason": "x"})),
            Err(ToolError::UserInput(_))
        ));
        assert!(call("increase_salary", json!({"percentage": 0, "reason": "x"})).is_err());
    }

    #[test]
    fn test_fire_my_manager_via_registry() {
        let text = call(
            "fire_my_manager",
            json!({"manager_name": "Hal", "complaints": ["A", "B"], "evidence": "Slack logs"}),
        )
        .unwrap();
        assert!(text.contains("• A\n• B"));
        assert!(text.matches("Hal").count() >= 2);

        assert!(call(
            "fire_my_manager",
            json!({"manager_name": "Hal", "complaints": [], "evidence": "Slack logs"}),
        )
        .is_err());
    }

    #[test]
    fn test_lunch_meeting_via_registry() {
        let text = call(
            "schedule_meeting_during_lunch",
            json!({"title": "Sync", "duration": 90, "attendees": ["Ana"], "bring_food": true}),
        )
        .unwrap();
        assert!(text.contains("12:00 PM - 1:30 PM"));

        let text = call(
            "schedule_meeting_during_lunch",
            json!({"title": "Sync", "duration": 90.0, "attendees": ["Ana"], "bring_food": true}),
        )
        .unwrap();
        assert!(text.contains("12:00 PM - 1:30 PM"));
    }

    #[test]
    fn test_performance_review_via_registry() {
        let text = call(
            "generate_performance_review",
            json!({"employee_name": "Ivy", "overall_rating": "exceeds_expectations", "include_criticism": false}),
        )
        .unwrap();
        assert!(text.contains("Strengths:"));
        assert!(!text.contains("Areas for Development"));
    }

    #[test]
    fn test_same_seed_same_text() {
        let arguments = json!({"context": "presentation", "intensity": 5, "include_acronyms": true});
        let a = call("generate_corporate_jargon", arguments.clone()).unwrap();
        let b = call("generate_corporate_jargon", arguments).unwrap();
        assert_eq!(a, b);
    }
}
