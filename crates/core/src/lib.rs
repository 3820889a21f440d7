//! Core library for hilanet
//!
//! This crate is the **Functional Core** of the hilanet HR tools server. It
//! holds every tool's input types, validation rules, phrase tables and text
//! generators, with zero I/O.
//!
//! # Architecture Overview
//!
//! - **`hilanet_core`** (this crate): typed inputs, shape checks, generators
//! - **`hilanet`**: CLI, MCP JSON-RPC dispatch and the stdio/SSE transports
//!
//! Generators never reach for a global random source or the system clock.
//! The caller passes an [`rand::Rng`] and today's date, which keeps every
//! output reproducible under a seeded generator.
//!
//! # Module Organization
//!
//! - [`registry`]: tool table and `call_tool` dispatch
//! - [`tools`]: one module per tool
//! - [`shape`]: deserialization and bounds checks run before any generator
//! - [`shuffle`]: Fisher-Yates and uniform picking over fixed tables
//! - [`phrases`]: the fixed phrase tables
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use hilanet_core::registry::call_tool;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let text = call_tool(
//!     "schedule_meeting_during_lunch",
//!     serde_json::json!({
//!         "title": "Sync",
//!         "duration": 90,
//!         "attendees": ["Ana"],
//!         "bring_food": false
//!     }),
//!     &mut rng,
//!     today,
//! )?;
//!
//! assert!(text.contains("12:00 PM - 1:30 PM"));
//! ```

mod error;

pub mod phrases;
pub mod registry;
pub mod shape;
pub mod shuffle;
pub mod tools;

pub use error::ToolError;
pub use registry::{call_tool, ToolSpec};
