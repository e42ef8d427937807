//! Floating action button: pulsing `(+)` on the entry phase, open menu
//! while the tour waits for "Create Project".

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::tui::shell::FabState;

/// Full pulse cycle of the entry-phase glow.
const PULSE_CYCLE: Duration = Duration::from_millis(1500);

pub fn render(frame: &mut Frame, content: Rect, state: FabState, elapsed: Duration) {
    let accent = Color::Rgb(0x59, 0x77, 0x9F);
    let muted = Style::default().fg(Color::DarkGray);

    match state {
        FabState::Hidden => {}
        FabState::Pulsing => {
            // Bottom-right corner of the mock screen.
            let area = anchor(content, 7, 1);
            frame.render_widget(Clear, area);

            let bright = elapsed.as_millis() % PULSE_CYCLE.as_millis()
                < PULSE_CYCLE.as_millis() / 2;
            let style = if bright {
                Style::default()
                    .fg(Color::White)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(accent)
            };
            let button = Paragraph::new(Line::from(vec![
                Span::styled(" (+) ", style),
                Span::styled("◄", Style::default().fg(accent)),
            ]));
            frame.render_widget(button, area);
        }
        FabState::MenuOpen => {
            let area = anchor(content, 22, 4);
            frame.render_widget(Clear, area);

            let menu = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(
                        "› Create Project",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  ◄ tap", Style::default().fg(accent)),
                ]),
                Line::from(Span::styled("  Create Task", muted)),
                Line::from(Span::styled("  Add Client", muted)),
                Line::from(Span::styled(
                    " (×) ",
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                )),
            ]);
            frame.render_widget(menu, area);
        }
    }
}

/// A `width`×`height` rect anchored to the bottom-right of `content`.
fn anchor(content: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(content.width);
    let height = height.min(content.height);
    Rect {
        x: content.x + content.width - width,
        y: content.y + content.height - height,
        width,
        height,
    }
}
