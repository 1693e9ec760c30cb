/// Every user-facing text of the application.
///
/// Variants are grouped by the part of the application that emits them.
/// The wording lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String),         // path
    ConfigFallbackToDefaults(String), // error
    ConfigCurrentTimeFormat(String), // format

    // === CALCULATOR MESSAGES ===
    DisplayValue(String),     // display text
    CalculationTrace(String), // committed calculation
    DisplayEmpty,
    TimeFormatActive(String), // format
    KeySequenceEmpty,
    KeySequenceInvalid(String), // error
    KeyRejected(String),        // error
    KeysApplied(usize),         // count

    // === REPL MESSAGES ===
    ReplWelcome(String), // format
    ReplHelp,
    ReplGoodbye,
    ReplReadFailed(String), // error

    // === PROMPTS ===
    PromptTimeFormat,
    PromptShowTrace,
    PromptConfirmDeleteConfig,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
