//! Core library modules for the hmcalc application.
//!
//! ## Features
//!
//! - **Duration Model**: signed whole-second durations and their text grammar
//! - **Calculation**: operand/operator history with left-to-right evaluation
//! - **Input State Machine**: keypad events turned into display edits
//! - **Core Infrastructure**: configuration, data storage, messaging
//! - **User Interface**: console tables and formatting
//!
//! ## Usage
//!
//! ```rust
//! use hmcalc::libs::calculation::Calculation;
//! use hmcalc::libs::operator::Operator;
//! use hmcalc::libs::time_value::{TimeFormat, TimeValue};
//!
//! let mut calculation = Calculation::new();
//! calculation.push_value(TimeValue::parse("10:20", TimeFormat::HoursAndMinutes));
//! calculation.push_operator("+".parse::<Operator>()?);
//! calculation.push_value(TimeValue::parse("10:40", TimeFormat::HoursAndMinutes));
//!
//! assert_eq!(calculation.calculate().hours(), 21);
//! # Ok::<(), hmcalc::libs::error::CalcError>(())
//! ```

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod keypad;
pub mod messages;
pub mod operator;
pub mod time_value;
pub mod view;
