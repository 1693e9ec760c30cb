//! Interactive keypad session on stdin.
//!
//! Every input line is a key sequence applied to one long-lived
//! [`Calculator`]; after each line the display and the committed calculation
//! are printed. `q`, `quit` or end of input leaves the session.

use crate::{
    libs::{
        calculator::Calculator,
        config::Config,
        keypad::parse_keys,
        messages::{self, Message},
        time_value::TimeFormat,
    },
    msg_debug,
};
use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct ReplArgs {
    /// Time format to start in (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<TimeFormat>,
}

pub fn cmd(repl_args: ReplArgs) -> Result<()> {
    let config = Config::read_or_default();
    let time_format = repl_args.format.unwrap_or(config.time_format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(stdin.lock(), stdout.lock(), Calculator::new(time_format))?;
    Ok(())
}

/// Runs the read-apply-print loop until `quit` or end of input and returns
/// the calculator in its final state.
pub fn session<R: BufRead, W: Write>(reader: R, mut writer: W, mut calculator: Calculator) -> Result<Calculator> {
    writeln!(writer, "{}", messages::info(Message::ReplWelcome(calculator.time_format().to_string())))?;

    for line in reader.lines() {
        let line = line.map_err(|e| anyhow::anyhow!(Message::ReplReadFailed(e.to_string())))?;
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "help" => {
                writeln!(writer, "{}", messages::info(Message::ReplHelp))?;
                continue;
            }
            _ => {}
        }

        let keys = match parse_keys(input) {
            Ok(keys) => keys,
            Err(e) => {
                writeln!(writer, "{}", messages::error(Message::KeyRejected(e.to_string())))?;
                continue;
            }
        };

        for key in keys {
            if let Err(e) = calculator.press(key) {
                writeln!(writer, "{}", messages::error(Message::KeyRejected(e.to_string())))?;
                break;
            }
        }
        msg_debug!(Message::TimeFormatActive(calculator.time_format().to_string()));

        writeln!(writer, "{}", super::eval::display_message(&calculator))?;
        writeln!(writer, "{}", Message::CalculationTrace(calculator.current_calculation()))?;
    }

    writeln!(writer, "{}", Message::ReplGoodbye)?;
    Ok(calculator)
}
