//! Application loop: terminal bracket, key dispatch, tick cadence.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::Config;
use crate::controller::TourReport;

use super::shell::Shell;

/// Runs the tour until completion or until the user quits.
///
/// Returns `Some(report)` when the terminal phase was reached, `None` on
/// an early quit.
pub fn run(config: &Config) -> io::Result<Option<TourReport>> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &Config) -> io::Result<Option<TourReport>> {
    let today = jiff::Zoned::now().date();
    let mut shell = Shell::new(config, today, Instant::now());
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| shell.render(frame, Instant::now()))?;

        // The completion report surfaces exactly once.
        if let Some(elapsed_seconds) = shell.take_completion() {
            return Ok(Some(TourReport::new(shell.tour(), elapsed_seconds)));
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    code => shell.on_key(code, Instant::now()),
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            shell.tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}
