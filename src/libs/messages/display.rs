//! Display implementation for hmcalc application messages.
//!
//! All user-facing text is defined here, in one `match`, so wording stays
//! consistent between the `eval`, `repl` and `init` commands.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization
//! - **Short**: One line per message where possible
//! - **Specific Details**: Parameters such as the offending key are always shown
//!
//! ## Usage Integration
//!
//! ```rust
//! use hmcalc::libs::messages::Message;
//!
//! let message = Message::KeysApplied(3);
//! assert_eq!(message.to_string(), "Applied 3 keys");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigFallbackToDefaults(error) => format!("Using default settings: {}", error),
            Message::ConfigCurrentTimeFormat(format) => format!("Default time format: {}", format),

            // === CALCULATOR MESSAGES ===
            Message::DisplayValue(display) => format!("Display:     {}", display),
            Message::CalculationTrace(calculation) => format!("Calculation: {}", calculation),
            Message::DisplayEmpty => "(empty)".to_string(),
            Message::TimeFormatActive(format) => format!("Time format: {}", format),
            Message::KeySequenceEmpty => "No keys given".to_string(),
            Message::KeySequenceInvalid(error) => format!("Invalid key sequence: {}", error),
            Message::KeyRejected(error) => format!("Key rejected: {}", error),
            Message::KeysApplied(count) => format!("Applied {} keys", count),

            // === REPL MESSAGES ===
            Message::ReplWelcome(format) => format!("hmcalc ready ({}). Type keys and press Enter, 'q' to quit.", format),
            Message::ReplHelp => "Keys: 0-9 digits, ':' separator, '+' '-' '=' operators, '~' negate, '<' backspace, 'e' clear entry, 'c' clear all, 'f' toggle format".to_string(),
            Message::ReplGoodbye => "Bye".to_string(),
            Message::ReplReadFailed(error) => format!("Failed to read input: {}", error),

            // === PROMPTS ===
            Message::PromptTimeFormat => "Select the default time format".to_string(),
            Message::PromptShowTrace => "Show a key-by-key trace after eval?".to_string(),
            Message::PromptConfirmDeleteConfig => "Are you sure you want to delete the configuration?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
