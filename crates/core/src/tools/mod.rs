//! One module per tool. Each exposes `NAME`, `DESCRIPTION`, a typed
//! argument struct, `input_schema()` and `generate()`.

pub mod block_promotion;
pub mod coffee_machine;
pub mod corporate_jargon;
pub mod decrease_coworker_salary;
pub mod fire_my_manager;
pub mod increase_salary;
pub mod lunch_meeting;
pub mod mandatory_fun_event;
pub mod performance_review;
pub mod relocate_desk;
pub mod thermostat;
pub mod unpaid_overtime;
