use anyhow::Result;
use colored::Colorize;

use chess_etl::cli::Command;
use chess_etl::{handle_fetch, handle_process, handle_run, handle_store, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fetch { username } => handle_fetch(username),
        Command::Process { username } => handle_process(username),
        Command::Store => handle_store(),
        Command::Run { username } => handle_run(username),
    }
}
