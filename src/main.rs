mod cli;
mod config;
mod controller;
mod model;
mod tui;

use std::process;

use clap::Parser;

use cli::{Cli, Command};
use config::Config;

fn main() {
    let args = Cli::parse();

    if let Some(Command::Phases) = args.command {
        cli::print_phases();
        return;
    }

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };
    if args.reduce_motion {
        config.reduce_motion = true;
    }

    match tui::run(&config) {
        Ok(Some(report)) => cli::print_report(&report, args.json),
        Ok(None) => {} // Quit before the end; nothing to report.
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
