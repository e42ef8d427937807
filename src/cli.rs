//! CLI interface for the tour.
//!
//! `opstour` with no subcommand runs the interactive tour. `opstour
//! phases` prints the phase catalog non-interactively — arguments in,
//! structured output out — which is how the copy gets reviewed without
//! sitting through the tour.

use clap::{Parser, Subcommand};

use crate::controller::TourReport;
use crate::model::{ORDER, Phase};

/// opstour — a guided tour of the job board, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "opstour")]
pub struct Cli {
    /// Skip the typewriter reveal and pulse animations.
    #[arg(long)]
    pub reduce_motion: bool,

    /// Print the completion report as JSON instead of a summary line.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the phase catalog in tour order.
    Phases,
}

/// Prints every phase with its transition kind and tooltip copy.
pub fn print_phases() {
    for (i, phase) in ORDER.into_iter().enumerate() {
        let config = phase.config();
        let exit = if let Some(delay) = config.auto_advance_after {
            format!("auto-advance {} ms", delay.as_millis())
        } else if config.show_continue {
            format!("continue [{}]", config.continue_label.unwrap_or("CONTINUE"))
        } else if phase == Phase::Completed {
            "terminal".to_string()
        } else {
            "gesture".to_string()
        };

        println!("{:>2}. {:<24} {exit}", i + 1, phase.name());
        if !config.tooltip_title.is_empty() {
            println!("      {}", config.tooltip_title);
            println!("      {}", config.tooltip_body);
        }
    }
}

/// Prints the completion report, plain or as JSON.
pub fn print_report(report: &TourReport, json: bool) {
    if json {
        let rendered =
            serde_json::to_string_pretty(report).expect("report serializes to JSON");
        println!("{rendered}");
    } else {
        println!(
            "Tour completed in {}s — project \"{}\" for {}.",
            report.elapsed_seconds,
            report.project_name,
            report.client.as_deref().unwrap_or("(no client)"),
        );
    }
}
