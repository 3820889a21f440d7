use rand::Rng;
use serde::Deserialize;

use crate::phrases::COST_CUTTING_INITIATIVES;
use crate::shape::Shape;
use crate::shuffle::pick;
use crate::ToolError;

pub const NAME: &str = "increase_salary";
pub const DESCRIPTION: &str = "Increase your salary by a specified percentage or amount";

#[derive(Debug, Clone, Deserialize)]
pub struct IncreaseSalaryArgs {
    pub amount: Option<f64>,
    pub percentage: Option<f64>,
    pub reason: String,
}

impl Shape for IncreaseSalaryArgs {}

/// What the employee asked for, decided once during validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryRequest {
    Amount(f64),
    Percentage(f64),
}

impl IncreaseSalaryArgs {
    pub fn request(&self) -> Result<SalaryRequest, ToolError> {
        match (self.amount, self.percentage) {
            (None, None) => Err(ToolError::user(
                "You must specify either an amount or percentage increase",
            )),
            (Some(_), Some(_)) => Err(ToolError::user(
                "Specify either an amount or a percentage increase, not both",
            )),
            (None, Some(p)) if p <= 0.0 || p > 100.0 => Err(ToolError::user(
                "Percentage must be greater than 0 and at most 100",
            )),
            (None, Some(p)) => Ok(SalaryRequest::Percentage(p)),
            (Some(a), None) if a <= 0.0 => Err(ToolError::user("Amount must be positive")),
            (Some(a), None) => Ok(SalaryRequest::Amount(a)),
        }
    }
}

pub fn input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "amount": {
                "type": "number",
                "description": "Amount to increase (in currency units)"
            },
            "percentage": {
                "type": "number",
                "description": "Percentage to increase"
            },
            "reason": {
                "type": "string",
                "description": "Reason for requesting a salary increase"
            }
        },
        "required": ["reason"]
    })
}

/// Never above 5%, never below zero.
pub fn approval_probability(request: SalaryRequest) -> f64 {
    let asked = match request {
        SalaryRequest::Percentage(p) => p,
        SalaryRequest::Amount(a) => a / 100.0,
    };
    let probability = (100.0 - asked).clamp(0.0, 5.0);
    (probability * 100.0).round() / 100.0
}

pub fn generate<R: Rng + ?Sized>(args: &IncreaseSalaryArgs, rng: &mut R) -> Result<String, ToolError> {
    let request = args.request()?;

    let processing_delay = rng.gen_range(3..15);
    let approval = approval_probability(request);
    let initiative = pick(&COST_CUTTING_INITIATIVES, rng);

    let text = match request {
        SalaryRequest::Percentage(percentage) => format!(
            "Salary increase request submitted! 💸\n\n\
             Requested increase: {percentage}%\n\
             Reason provided: \"{reason}\"\n\n\
             Your request will be thoroughly ignored by HR for {processing_delay} business weeks before being automatically redirected to our \"Future Considerations\" archive (est. 2047).\n\n\
             Approval probability: {approval}%\n\n\
             While you wait, management has noted your apparent dissatisfaction and subscribed you to our new \"{initiative}\" cost-cutting initiative. Thank you for your involuntary participation!",
            reason = args.reason,
        ),
        SalaryRequest::Amount(amount) => format!(
            "Salary increase request submitted! 💸\n\n\
             Requested increase: ${amount}\n\
             Reason provided: \"{reason}\"\n\n\
             Your request has been flagged for our special \"ambitious employee\" review process, which includes a complimentary 17-page justification form to be completed in triplicate and submitted via carrier pigeon to our offshore processing center.\n\n\
             Approval probability: {approval}%\n\n\
             While we process your request (est. {processing_delay} business weeks), your manager has been notified of your apparent interest in \"career development opportunities\" which may include additional responsibilities at your current compensation level.",
            reason = args.reason,
        ),
    };

    Ok(text)
}
