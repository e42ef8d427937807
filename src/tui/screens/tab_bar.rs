//! Bottom tab bar, visual only. Jobs vs Schedule follows the phase.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::shell::Tab;

pub fn render(frame: &mut Frame, area: Rect, active: Tab, dimmed: bool) {
    let active_style = if dimmed {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    let inactive = Style::default().fg(Color::DarkGray);

    let (jobs, schedule) = match active {
        Tab::Jobs => (active_style, inactive),
        Tab::Schedule => (inactive, active_style),
    };

    let bar = Paragraph::new(Line::from(vec![
        Span::styled("  ▦ JOBS  ", jobs),
        Span::styled("  ▤ SCHEDULE  ", schedule),
    ]))
    .centered();
    frame.render_widget(bar, area);
}
