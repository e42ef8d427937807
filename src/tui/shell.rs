//! Tutorial shell: decides which layers are mounted for the current
//! phase and translates key gestures into controller operations.
//!
//! Each gesture handler is gated on its own phase, so a key arriving a
//! frame late (after a timer already advanced the tour) falls through
//! harmlessly instead of advancing twice.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use jiff::civil::Date;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::Config;
use crate::controller::Tour;
use crate::model::{CLIENTS, CREW, DATE_OPTIONS, Phase, Project, TASK_TYPES, sample_projects};

use super::screens::{calendar, fab, job_board, project_form, tab_bar, task_form, tooltip};

/// The swipe demo has no config timer; the shell advances it when the
/// card has travelled off the board and settled.
const SWIPE_DEMO: Duration = Duration::from_millis(2300);

/// Calendar mode mounted during a calendar phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    Week,
    Month,
}

/// Floating action button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabState {
    Hidden,
    Pulsing,
    MenuOpen,
}

/// Which bottom tab reads as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Jobs,
    Schedule,
}

/// The declarative layer set for one phase. The render pass consumes
/// this uniformly instead of branching on phases itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub job_board: bool,
    pub calendar: Option<CalendarMode>,
    pub scrim: bool,
    pub fab: FabState,
    pub project_form: bool,
    pub task_form: bool,
    pub continue_label: Option<&'static str>,
    pub tab: Tab,
    pub tab_dimmed: bool,
}

/// Maps a phase to its visible layers via the phase predicates.
pub fn layers_for(phase: Phase) -> Layers {
    let config = phase.config();
    let calendar = if phase.is_calendar_phase() {
        Some(if phase == Phase::CalendarMonth {
            CalendarMode::Month
        } else {
            CalendarMode::Week
        })
    } else {
        None
    };
    let fab = if phase == Phase::FabTap {
        FabState::MenuOpen
    } else if phase.shows_fab() {
        FabState::Pulsing
    } else {
        FabState::Hidden
    };

    Layers {
        job_board: calendar.is_none() && phase != Phase::Completed,
        calendar,
        scrim: phase.shows_blocking_scrim(),
        fab,
        project_form: phase.is_form_phase(),
        task_form: phase.is_task_form_phase(),
        continue_label: config
            .show_continue
            .then(|| config.continue_label.unwrap_or("CONTINUE")),
        tab: if phase.is_calendar_phase() {
            Tab::Schedule
        } else {
            Tab::Jobs
        },
        tab_dimmed: phase.is_demo_phase() || phase.is_form_phase(),
    }
}

/// Key hints for the bottom line, phrased per gesture.
fn help_line(phase: Phase) -> &'static str {
    match phase {
        Phase::JobBoardIntro | Phase::FabTap => " ⏎ tap  q quit",
        Phase::ProjectFormClient => " ↑↓ choose  ⏎ select  q quit",
        Phase::ProjectFormName => " type a name  q quit",
        Phase::ProjectFormAddTask
        | Phase::TaskFormDone
        | Phase::ProjectFormComplete
        | Phase::CalendarMonthPrompt => " ⏎ tap  q quit",
        Phase::TaskFormType | Phase::TaskFormCrew | Phase::TaskFormDate => {
            " ←→ choose  ⏎ select  q quit"
        }
        Phase::DragToAccepted
        | Phase::ProjectListStatusDemo
        | Phase::ProjectListSwipe
        | Phase::ClosedProjectsScroll => " sit back — the demo plays itself  q quit",
        Phase::CalendarWeek | Phase::CalendarMonth => " ⏎ continue  q quit",
        Phase::Completed => "",
    }
}

/// Composition layer: owns the controller, the seed board, and the
/// per-phase UI cursors.
pub struct Shell {
    tour: Tour,
    samples: Vec<Project>,
    today: Date,
    phase_entered: Instant,
    last_phase: Phase,
    reduce_motion: bool,
    client_cursor: usize,
    type_cursor: usize,
    crew_cursor: usize,
    date_cursor: usize,
}

impl Shell {
    pub fn new(config: &Config, today: Date, now: Instant) -> Self {
        let tour = Tour::new(now);
        let last_phase = tour.phase();
        Self {
            tour,
            samples: sample_projects(),
            today,
            phase_entered: now,
            last_phase,
            reduce_motion: config.reduce_motion,
            client_cursor: 0,
            type_cursor: 0,
            crew_cursor: 0,
            date_cursor: 0,
        }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// The completion report, available exactly once after the terminal
    /// phase is reached.
    pub fn take_completion(&mut self) -> Option<u64> {
        self.tour.take_completion()
    }

    /// Advances controller timers and the shell-driven swipe demo.
    pub fn tick(&mut self, now: Instant) {
        self.tour.tick(now);
        self.sync(now);

        if self.tour.phase() == Phase::ProjectListSwipe
            && now.duration_since(self.phase_entered) >= SWIPE_DEMO
        {
            self.tour.advance(now);
            self.sync(now);
        }
    }

    /// Routes one key press to the gesture the current phase expects.
    pub fn on_key(&mut self, code: KeyCode, now: Instant) {
        match self.tour.phase() {
            Phase::JobBoardIntro | Phase::FabTap => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.tour.advance(now);
                }
            }
            Phase::ProjectFormClient => match code {
                KeyCode::Up => self.client_cursor = self.client_cursor.saturating_sub(1),
                KeyCode::Down => {
                    self.client_cursor = (self.client_cursor + 1).min(CLIENTS.len() - 1);
                }
                KeyCode::Enter => self.tour.select_client(CLIENTS[self.client_cursor], now),
                _ => {}
            },
            Phase::ProjectFormName => match code {
                KeyCode::Char(c) => {
                    let mut name = self.tour.project_name().to_string();
                    name.push(c);
                    self.tour.set_project_name(&name, now);
                }
                KeyCode::Backspace => {
                    let mut name = self.tour.project_name().to_string();
                    name.pop();
                    self.tour.set_project_name(&name, now);
                }
                _ => {}
            },
            Phase::ProjectFormAddTask
            | Phase::TaskFormDone
            | Phase::ProjectFormComplete
            | Phase::CalendarWeek
            | Phase::CalendarMonthPrompt
            | Phase::CalendarMonth => {
                if code == KeyCode::Enter {
                    self.tour.advance(now);
                }
            }
            Phase::TaskFormType => {
                let visible = TASK_TYPES.len().min(6);
                match code {
                    KeyCode::Left | KeyCode::Up => {
                        self.type_cursor = self.type_cursor.saturating_sub(1);
                    }
                    KeyCode::Right | KeyCode::Down => {
                        self.type_cursor = (self.type_cursor + 1).min(visible - 1);
                    }
                    KeyCode::Enter => {
                        self.tour.select_task_type(TASK_TYPES[self.type_cursor].name, now);
                    }
                    _ => {}
                }
            }
            Phase::TaskFormCrew => match code {
                KeyCode::Left | KeyCode::Up => {
                    self.crew_cursor = self.crew_cursor.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Down => {
                    self.crew_cursor = (self.crew_cursor + 1).min(CREW.len() - 1);
                }
                KeyCode::Enter => self.tour.select_crew(CREW[self.crew_cursor], now),
                _ => {}
            },
            Phase::TaskFormDate => match code {
                KeyCode::Left | KeyCode::Up => {
                    self.date_cursor = self.date_cursor.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Down => {
                    self.date_cursor = (self.date_cursor + 1).min(DATE_OPTIONS.len() - 1);
                }
                KeyCode::Enter => self.tour.select_date(DATE_OPTIONS[self.date_cursor], now),
                _ => {}
            },
            // Demos and the terminal phase take no input.
            Phase::DragToAccepted
            | Phase::ProjectListStatusDemo
            | Phase::ProjectListSwipe
            | Phase::ClosedProjectsScroll
            | Phase::Completed => {}
        }
        self.sync(now);
    }

    /// Resets per-phase animation time when the phase changes.
    fn sync(&mut self, now: Instant) {
        if self.tour.phase() != self.last_phase {
            self.last_phase = self.tour.phase();
            self.phase_entered = now;
        }
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let phase = self.tour.phase();
        let layers = layers_for(phase);
        let config = phase.config();
        let elapsed = now.duration_since(self.phase_entered);

        let chunks = Layout::vertical([
            Constraint::Length(4), // tooltip
            Constraint::Min(0),    // mock screen
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // help
        ])
        .split(frame.area());

        tooltip::render(
            frame,
            chunks[0],
            config.tooltip_title,
            config.tooltip_body,
            elapsed,
            self.reduce_motion,
        );

        let content = chunks[1];
        if layers.job_board {
            // The user's card joins the board only for the demo phases.
            let user = if phase.is_demo_phase() {
                self.tour.user_project()
            } else {
                None
            };
            job_board::render(frame, content, &self.samples, user.as_ref(), phase, elapsed);
        }
        if let Some(mode) = layers.calendar {
            calendar::render(
                frame,
                content,
                mode == CalendarMode::Month,
                phase,
                self.today,
                self.tour.user_project().as_ref(),
            );
        }
        if layers.scrim {
            render_scrim(frame, content);
        }
        fab::render(frame, content, layers.fab, elapsed);
        if layers.project_form {
            project_form::render(
                frame,
                bottom_sheet(content, 3, 5),
                phase,
                self.tour.selected_client(),
                self.tour.project_name(),
                self.tour.has_task(),
                self.client_cursor,
            );
        }
        if layers.task_form {
            task_form::render(
                frame,
                bottom_sheet(content, 7, 10),
                phase,
                self.tour.selected_task_type(),
                self.tour.selected_crew(),
                self.tour.selected_date(),
                self.type_cursor,
                self.crew_cursor,
                self.date_cursor,
            );
        }
        if let Some(label) = layers.continue_label {
            render_continue(frame, content, label);
        }

        tab_bar::render(frame, chunks[2], layers.tab, layers.tab_dimmed);

        let help = Paragraph::new(Line::from(Span::styled(
            help_line(phase),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(help, chunks[3]);
    }
}

/// A bottom sheet covering `numerator/denominator` of the content height.
fn bottom_sheet(content: Rect, numerator: u16, denominator: u16) -> Rect {
    let height = (content.height * numerator / denominator).clamp(1, content.height);
    Rect {
        x: content.x,
        y: content.y + content.height - height,
        width: content.width,
        height,
    }
}

/// Full-screen blocking scrim, drawn over the board but under the FAB.
fn render_scrim(frame: &mut Frame, area: Rect) {
    let row = "░".repeat(usize::from(area.width));
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(row.clone(), Style::default().fg(Color::Black))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_continue(frame: &mut Frame, content: Rect, label: &str) {
    let area = Rect {
        x: content.x,
        y: (content.y + content.height).saturating_sub(2),
        width: content.width,
        height: 1,
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {label} ]"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::ORDER;

    fn shell_at(phase: Phase, now: Instant) -> Shell {
        let mut shell = Shell::new(&Config::default(), jiff::civil::date(2026, 8, 17), now);
        while shell.tour.phase() != phase {
            shell.tour.advance(now);
        }
        shell.sync(now);
        shell
    }

    #[test]
    fn entry_phase_mounts_scrim_board_and_pulsing_fab() {
        let layers = layers_for(Phase::JobBoardIntro);
        assert!(layers.job_board);
        assert!(layers.scrim);
        assert_eq!(layers.fab, FabState::Pulsing);
        assert!(!layers.project_form);
        assert_eq!(layers.calendar, None);
    }

    #[test]
    fn fab_menu_opens_without_the_scrim() {
        let layers = layers_for(Phase::FabTap);
        assert!(!layers.scrim);
        assert_eq!(layers.fab, FabState::MenuOpen);
    }

    #[test]
    fn form_layers_match_the_predicates() {
        for phase in ORDER {
            let layers = layers_for(phase);
            assert_eq!(layers.project_form, phase.is_form_phase());
            assert_eq!(layers.task_form, phase.is_task_form_phase());
            if layers.task_form {
                assert!(layers.project_form, "task sheet layers over the project sheet");
            }
        }
    }

    #[test]
    fn calendar_phases_swap_the_board_for_the_calendar() {
        for phase in ORDER {
            let layers = layers_for(phase);
            assert_eq!(layers.calendar.is_some(), phase.is_calendar_phase());
            if phase.is_calendar_phase() {
                assert!(!layers.job_board);
                assert_eq!(layers.tab, Tab::Schedule);
            }
        }
        assert_eq!(layers_for(Phase::CalendarWeek).calendar, Some(CalendarMode::Week));
        assert_eq!(
            layers_for(Phase::CalendarMonthPrompt).calendar,
            Some(CalendarMode::Week)
        );
        assert_eq!(layers_for(Phase::CalendarMonth).calendar, Some(CalendarMode::Month));
    }

    #[test]
    fn continue_labels_follow_the_config() {
        assert_eq!(layers_for(Phase::CalendarWeek).continue_label, Some("CONTINUE"));
        assert_eq!(layers_for(Phase::CalendarMonth).continue_label, Some("DONE"));
        assert_eq!(layers_for(Phase::CalendarMonthPrompt).continue_label, None);
    }

    #[test]
    fn terminal_phase_mounts_nothing() {
        let layers = layers_for(Phase::Completed);
        assert!(!layers.job_board);
        assert_eq!(layers.calendar, None);
        assert!(!layers.project_form);
        assert_eq!(layers.fab, FabState::Hidden);
        assert_eq!(layers.continue_label, None);
    }

    #[test]
    fn enter_taps_through_the_opening_phases() {
        let now = Instant::now();
        let mut shell = shell_at(Phase::JobBoardIntro, now);

        shell.on_key(KeyCode::Enter, now);
        assert_eq!(shell.tour.phase(), Phase::FabTap);
        shell.on_key(KeyCode::Enter, now);
        assert_eq!(shell.tour.phase(), Phase::ProjectFormClient);
    }

    #[test]
    fn client_pick_selects_under_the_cursor() {
        let now = Instant::now();
        let mut shell = shell_at(Phase::ProjectFormClient, now);

        shell.on_key(KeyCode::Down, now);
        shell.on_key(KeyCode::Enter, now);
        assert_eq!(shell.tour.selected_client(), Some(CLIENTS[1]));

        // Debounce still pending: the phase has not moved yet.
        assert_eq!(shell.tour.phase(), Phase::ProjectFormClient);
        shell.tick(now + Duration::from_millis(300));
        assert_eq!(shell.tour.phase(), Phase::ProjectFormName);
    }

    #[test]
    fn typing_builds_the_project_name() {
        let now = Instant::now();
        let mut shell = shell_at(Phase::ProjectFormName, now);

        for c in "Test".chars() {
            shell.on_key(KeyCode::Char(c), now);
        }
        shell.on_key(KeyCode::Backspace, now);
        assert_eq!(shell.tour.project_name(), "Tes");
    }

    #[test]
    fn demo_phases_ignore_keys() {
        let now = Instant::now();
        let mut shell = shell_at(Phase::DragToAccepted, now);

        shell.on_key(KeyCode::Enter, now);
        shell.on_key(KeyCode::Char('x'), now);
        assert_eq!(shell.tour.phase(), Phase::DragToAccepted);
    }

    #[test]
    fn swipe_demo_advances_when_the_animation_settles() {
        let now = Instant::now();
        let mut shell = shell_at(Phase::ProjectListSwipe, now);

        shell.tick(now + SWIPE_DEMO - Duration::from_millis(1));
        assert_eq!(shell.tour.phase(), Phase::ProjectListSwipe);

        shell.tick(now + SWIPE_DEMO);
        assert_eq!(shell.tour.phase(), Phase::ClosedProjectsScroll);
    }

    #[test]
    fn help_copy_exists_for_every_interactive_phase() {
        for phase in ORDER {
            if phase != Phase::Completed {
                assert!(!help_line(phase).is_empty(), "{}", phase.name());
            }
        }
    }
}
