//! Keypad-driven input state machine of the duration calculator.
//!
//! [`Calculator`] owns the live display text and the committed
//! [`Calculation`]. Every keypad event is handled to completion, mutating
//! the display and, for operator keys, the calculation.
//!
//! ## State
//!
//! The machine is driven by three flags plus the active [`TimeFormat`]:
//!
//! - **`overwrite_next`**: the display holds a computed result (or was just
//!   reset), so the next digit replaces it instead of extending it
//! - **`has_entered_digit`**: a digit (or sign) was typed since the last
//!   commit, so `=` has a trailing operand to push
//! - **`separator_typed_explicitly`**: the user typed `:` and digits now
//!   fill fields one by one instead of shifting through them
//!
//! ## Digit entry
//!
//! Without an explicit separator, digits enter odometer style. The display
//! is treated as one run of digits, the new digit is appended on the right
//! and the run is cut into fields from the right:
//!
//! ```text
//! HH:MM      7 → 70 → 7:00 → 70:00
//! HH:MM:SS   1 → 12 → 1:23 → 12:34 → 1:23:45
//! ```
//!
//! After an explicit `:` digits go into the last field. A full final field
//! drops further digits; in seconds mode a full minutes field opens the
//! seconds field instead.
//!
//! ## Committing
//!
//! `+` and `-` push the display and the operator into the calculation,
//! evaluate it and show the running total. `=` pushes the display only if
//! something was typed, evaluates, and starts a fresh calculation.
//!
//! ## Examples
//!
//! ```rust
//! use hmcalc::libs::calculator::Calculator;
//! use hmcalc::libs::keypad::parse_keys;
//! use hmcalc::libs::time_value::TimeFormat;
//!
//! let mut calculator = Calculator::new(TimeFormat::HoursAndMinutes);
//! for key in parse_keys("05:50+03:30+").unwrap() {
//!     calculator.press(key).unwrap();
//! }
//!
//! assert_eq!(calculator.display(), "09:20");
//! assert_eq!(calculator.current_calculation(), "05:50 + 03:30 +");
//! ```

use super::calculation::Calculation;
use super::error::CalcError;
use super::formatter::format_duration;
use super::keypad::Key;
use super::operator::{Operation, Operator};
use super::time_value::{TimeFormat, TimeValue};
use serde::Serialize;
use tracing::debug;

const SEPARATOR: char = ':';

/// The two outbound strings plus the active format, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorSnapshot {
    pub display: String,
    pub calculation: String,
    pub time_format: TimeFormat,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    overwrite_next: bool,
    has_entered_digit: bool,
    separator_typed_explicitly: bool,
    time_format: TimeFormat,
    calculation: Calculation,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(TimeFormat::default())
    }
}

impl Calculator {
    pub fn new(time_format: TimeFormat) -> Self {
        Self {
            display: String::new(),
            overwrite_next: false,
            has_entered_digit: false,
            separator_typed_explicitly: false,
            time_format,
            calculation: Calculation::new(),
        }
    }

    /// The live, editable value.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Space-joined rendering of the committed operands and operators.
    pub fn current_calculation(&self) -> String {
        self.calculation.to_string()
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    pub fn overwrite_next(&self) -> bool {
        self.overwrite_next
    }

    pub fn has_entered_digit(&self) -> bool {
        self.has_entered_digit
    }

    pub fn separator_typed_explicitly(&self) -> bool {
        self.separator_typed_explicitly
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display.clone(),
            calculation: self.current_calculation(),
            time_format: self.time_format,
        }
    }

    /// Handles one keypad event.
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(value) => self.digit(value)?,
            Key::Separator => self.separator(),
            Key::Add => self.add(),
            Key::Subtract => self.subtract(),
            Key::Equals => self.equals(),
            Key::ClearEntry => self.clear_entry(),
            Key::ClearAll => self.clear_all(),
            Key::Backspace => self.backspace(),
            Key::Negate => self.negate(),
            Key::ToggleFormat => self.toggle_time_format(),
        }

        debug!(%key, display = %self.display, "key pressed");
        Ok(())
    }

    pub fn digit(&mut self, value: u8) -> Result<(), CalcError> {
        if value > 9 {
            return Err(CalcError::InvalidDigit(value));
        }
        let digit = char::from(b'0' + value);

        if self.overwrite_next {
            self.display.clear();
            self.overwrite_next = false;
        }

        if self.display.is_empty() {
            self.display.push(digit);
        } else if self.separator_typed_explicitly {
            // A full final field swallows the digit
            if let Some(display) = fill_field(&self.display, digit, self.time_format) {
                self.display = display;
            }
        } else {
            self.display = shift_in(&self.display, digit, self.time_format);
        }

        self.has_entered_digit = true;
        Ok(())
    }

    pub fn separator(&mut self) {
        if self.display.is_empty() || self.overwrite_next {
            self.display = format!("0{}", SEPARATOR);
        } else {
            match self.time_format {
                TimeFormat::HoursAndMinutes => {
                    self.display.retain(|c| c != SEPARATOR);
                    self.display.push(SEPARATOR);
                }
                TimeFormat::HoursMinutesAndSeconds => {
                    let parts: Vec<&str> = self.display.split(SEPARATOR).collect();
                    match parts.as_slice() {
                        [_] => self.display.push(SEPARATOR),
                        [first, minutes] => {
                            let minutes = if minutes.len() < 2 {
                                format!("0{}", minutes)
                            } else {
                                minutes.to_string()
                            };
                            self.display = format!("{first}:{minutes}:");
                        }
                        // Already at the colon limit
                        _ => {}
                    }
                }
            }
        }

        self.separator_typed_explicitly = true;
        self.overwrite_next = false;
    }

    pub fn add(&mut self) {
        self.commit_operator(Operation::Add);
    }

    pub fn subtract(&mut self) {
        self.commit_operator(Operation::Subtract);
    }

    pub fn equals(&mut self) {
        if self.has_entered_digit {
            self.calculation.push_value(TimeValue::parse(&self.display, self.time_format));
        }

        self.show_result();
        self.calculation = Calculation::new();
        self.has_entered_digit = false;
    }

    pub fn backspace(&mut self) {
        if self.display.is_empty() {
            return;
        }

        if self.display.ends_with(SEPARATOR) {
            self.separator_typed_explicitly = false;
        }
        self.display.pop();

        // Never leave a dangling separator behind
        if self.display.ends_with(SEPARATOR) {
            self.separator_typed_explicitly = false;
            self.display.pop();
        }

        self.overwrite_next = false;
        if self.display.is_empty() {
            self.has_entered_digit = false;
        }
    }

    pub fn negate(&mut self) {
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else {
            self.display.insert(0, '-');
        }

        self.overwrite_next = false;
        self.has_entered_digit = true;
    }

    /// CE: forget the current entry, keep the committed calculation.
    pub fn clear_entry(&mut self) {
        self.display.clear();
        self.has_entered_digit = false;
        self.overwrite_next = false;
        self.separator_typed_explicitly = false;
    }

    /// C: forget the current entry and the committed calculation.
    pub fn clear_all(&mut self) {
        self.calculation = Calculation::new();
        self.clear_entry();
    }

    pub fn toggle_time_format(&mut self) {
        self.set_time_format(self.time_format.toggled());
    }

    /// Switches the active format and migrates committed operands.
    ///
    /// Leaving seconds mode strips a seconds field from the display. Entering
    /// it appends `:00`, but only while the display holds a computed result.
    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        if time_format == self.time_format {
            return;
        }

        self.time_format = time_format;
        self.calculation.change_time_format(time_format);

        if self.display.is_empty() {
            return;
        }

        match time_format {
            TimeFormat::HoursAndMinutes => {
                if self.display.split(SEPARATOR).count() == 3 {
                    if let Some(index) = self.display.rfind(SEPARATOR) {
                        self.display.truncate(index);
                    }
                }
            }
            TimeFormat::HoursMinutesAndSeconds => {
                if self.overwrite_next {
                    self.display.push_str(":00");
                }
            }
        }
    }

    fn commit_operator(&mut self, op: Operation) {
        self.calculation.push_value(TimeValue::parse(&self.display, self.time_format));
        self.calculation.push_operator(Operator::new(op));
        self.show_result();
        self.has_entered_digit = false;
    }

    fn show_result(&mut self) {
        let result = self.calculation.calculate();
        self.display = format_duration(&result, self.time_format);
        self.overwrite_next = true;
        self.separator_typed_explicitly = false;
    }
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    }
}

/// Appends `digit` to the last field after an explicit separator.
/// Returns `None` when the digit is dropped.
fn fill_field(display: &str, digit: char, time_format: TimeFormat) -> Option<String> {
    let parts: Vec<&str> = display.split(SEPARATOR).collect();

    match time_format {
        TimeFormat::HoursAndMinutes => match parts.as_slice() {
            [_, minutes] if minutes.len() >= 2 => None,
            _ => Some(format!("{display}{digit}")),
        },
        TimeFormat::HoursMinutesAndSeconds => match parts.as_slice() {
            [_, _, seconds] if seconds.len() >= 2 => None,
            [first, minutes] if minutes.len() >= 2 => {
                let (head, tail) = minutes.split_at(2);
                Some(format!("{first}:{head}:{tail}{digit}"))
            }
            [first] => {
                let (sign, body) = split_sign(first);
                if body.len() >= 2 {
                    let (head, tail) = body.split_at(2);
                    Some(format!("{sign}{head}:{tail}{digit}"))
                } else {
                    Some(format!("{display}{digit}"))
                }
            }
            _ => Some(format!("{display}{digit}")),
        },
    }
}

/// Odometer entry: appends `digit` to the flat digit run and re-cuts it
/// into fields from the right.
fn shift_in(display: &str, digit: char, time_format: TimeFormat) -> String {
    let (sign, body) = split_sign(display);
    let mut digits: String = body.chars().filter(|c| *c != SEPARATOR && *c != '-').collect();
    digits.push(digit);

    let len = digits.len();
    let fields = match time_format {
        TimeFormat::HoursAndMinutes if len > 2 => {
            format!("{}:{}", &digits[..len - 2], &digits[len - 2..])
        }
        TimeFormat::HoursMinutesAndSeconds if len > 4 => format!(
            "{}:{}:{}",
            &digits[..len - 4],
            &digits[len - 4..len - 2],
            &digits[len - 2..]
        ),
        TimeFormat::HoursMinutesAndSeconds if len > 2 => {
            format!("{}:{}", &digits[..len - 2], &digits[len - 2..])
        }
        _ => digits,
    };

    format!("{sign}{fields}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_in_keeps_sign() {
        assert_eq!(shift_in("-1:23", '4', TimeFormat::HoursAndMinutes), "-12:34");
        assert_eq!(shift_in("-", '4', TimeFormat::HoursAndMinutes), "-4");
    }

    #[test]
    fn test_shift_in_removes_every_separator() {
        assert_eq!(shift_in("1:23:45", '6', TimeFormat::HoursMinutesAndSeconds), "12:34:56");
    }

    #[test]
    fn test_fill_field_single_segment_in_seconds_mode() {
        assert_eq!(fill_field("12", '3', TimeFormat::HoursMinutesAndSeconds).as_deref(), Some("12:3"));
        assert_eq!(fill_field("-12", '3', TimeFormat::HoursMinutesAndSeconds).as_deref(), Some("-12:3"));
        assert_eq!(fill_field("1", '3', TimeFormat::HoursMinutesAndSeconds).as_deref(), Some("13"));
    }

    #[test]
    fn test_fill_field_full_minutes_drop_in_minutes_mode() {
        assert_eq!(fill_field("1:30", '5', TimeFormat::HoursAndMinutes), None);
        assert_eq!(fill_field("1:3", '5', TimeFormat::HoursAndMinutes).as_deref(), Some("1:35"));
    }
}
