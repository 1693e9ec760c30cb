pub mod eval;
pub mod init;
pub mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Press a sequence of keys and print the result", arg_required_else_help = true)]
    Eval(eval::EvalArgs),
    #[command(about = "Interactive keypad session")]
    Repl(repl::ReplArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Eval(args) => eval::cmd(args),
            Commands::Repl(args) => repl::cmd(args),
        }
    }
}
