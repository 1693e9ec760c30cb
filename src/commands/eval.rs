//! One-shot evaluation of a key sequence.
//!
//! Feeds every key of the sequence to a fresh [`Calculator`] and prints the
//! resulting display and committed calculation, optionally with a table of
//! each intermediate state or as JSON.

use crate::{
    libs::{
        calculator::{Calculator, CalculatorSnapshot},
        config::Config,
        error::CalcError,
        formatter::FormattedKeyPress,
        keypad::{parse_keys, Key},
        messages::Message,
        time_value::TimeFormat,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Keys to press, e.g. "05:50+03:30="
    keys: String,

    /// Time format to start in (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<TimeFormat>,

    /// Print the state after every key
    #[arg(long)]
    trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EvalReport {
    #[serde(flatten)]
    snapshot: CalculatorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<FormattedKeyPress>>,
}

/// Presses `keys` in order on a new calculator, recording the state after
/// each key.
pub fn run(time_format: TimeFormat, keys: &[Key]) -> Result<(Calculator, Vec<FormattedKeyPress>), CalcError> {
    let mut calculator = Calculator::new(time_format);
    let mut steps = Vec::with_capacity(keys.len());

    for (index, key) in keys.iter().enumerate() {
        calculator.press(*key)?;
        steps.push(FormattedKeyPress {
            step: index + 1,
            key: key.to_string(),
            display: calculator.display().to_string(),
            calculation: calculator.current_calculation(),
        });
    }

    Ok((calculator, steps))
}

pub fn cmd(eval_args: EvalArgs) -> Result<()> {
    let config = Config::read_or_default();

    let keys = parse_keys(&eval_args.keys).map_err(|e| msg_error_anyhow!(Message::KeySequenceInvalid(e.to_string())))?;
    if keys.is_empty() {
        msg_bail_anyhow!(Message::KeySequenceEmpty);
    }

    let time_format = eval_args.format.unwrap_or(config.time_format);
    let (calculator, steps) = run(time_format, &keys).map_err(|e| msg_error_anyhow!(Message::KeyRejected(e.to_string())))?;
    msg_debug!(Message::KeysApplied(steps.len()));
    let show_trace = eval_args.trace || config.show_trace;

    if eval_args.json {
        let report = EvalReport {
            snapshot: calculator.snapshot(),
            steps: show_trace.then_some(steps),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if show_trace {
        View::trace(&steps);
    }

    print_state(&calculator);
    Ok(())
}

pub(crate) fn display_message(calculator: &Calculator) -> Message {
    if calculator.display().is_empty() {
        Message::DisplayValue(Message::DisplayEmpty.to_string())
    } else {
        Message::DisplayValue(calculator.display().to_string())
    }
}

fn print_state(calculator: &Calculator) {
    msg_print!(display_message(calculator));
    msg_print!(Message::CalculationTrace(calculator.current_calculation()));
}
