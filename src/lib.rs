//! # hmcalc - Hours and Minutes Calculator
//!
//! A keypad-style calculator for adding and subtracting durations written
//! as `HH:MM` or `HH:MM:SS`.
//!
//! ## Features
//!
//! - **Total Parsing**: any display text reads as a duration, never an error
//! - **Odometer Entry**: digits shift through the fields like a clock radio
//! - **Explicit Fields**: typing `:` switches to field-by-field entry
//! - **Running Totals**: `+` and `-` show the running result immediately
//! - **Two Formats**: toggle between hours:minutes and hours:minutes:seconds
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hmcalc::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
