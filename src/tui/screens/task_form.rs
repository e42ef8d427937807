//! Add Task sheet, layered over the project form during the task phases.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph},
};

use crate::model::{CREW, DATE_OPTIONS, Phase, TASK_TYPES};

/// Only the first six task types fit the sheet.
const VISIBLE_TYPES: usize = 6;

fn chip_row<'a>(
    options: impl Iterator<Item = (&'a str, Option<(u8, u8, u8)>)>,
    selected: Option<&str>,
    cursor: usize,
    active: bool,
) -> Line<'a> {
    let muted = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    for (i, (name, color)) in options.enumerate() {
        let style = if selected == Some(name) {
            let (r, g, b) = color.unwrap_or((0x59, 0x77, 0x9F));
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(r, g, b))
                .add_modifier(Modifier::BOLD)
        } else if active && i == cursor {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default().fg(Color::Gray)
        } else {
            muted
        };
        let marker = if active && i == cursor { "›" } else { " " };
        spans.push(Span::raw(marker.to_string()));
        spans.push(Span::styled(format!("({name})"), style));
    }
    Line::from(spans)
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    phase: Phase,
    selected_type: Option<&str>,
    selected_crew: Option<&str>,
    selected_date: Option<&str>,
    type_cursor: usize,
    crew_cursor: usize,
    date_cursor: usize,
) {
    frame.render_widget(Clear, area);

    let muted = Style::default().fg(Color::DarkGray);
    let accent = Style::default().fg(Color::Rgb(0x59, 0x77, 0x9F));

    let label = |text: &str, active: bool| {
        Line::from(Span::styled(
            text.to_string(),
            if active { accent.add_modifier(Modifier::BOLD) } else { muted },
        ))
    };

    let type_active = phase == Phase::TaskFormType;
    let crew_active = phase == Phase::TaskFormCrew;
    let date_active = phase == Phase::TaskFormDate;
    let done_active = phase == Phase::TaskFormDone;

    let lines = vec![
        Line::from(Span::styled(
            "ADD TASK",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label("TASK TYPE", type_active),
        chip_row(
            TASK_TYPES
                .iter()
                .take(VISIBLE_TYPES)
                .map(|t| (t.name, Some(t.color))),
            selected_type,
            type_cursor,
            type_active,
        ),
        Line::from(""),
        label("ASSIGN CREW", crew_active),
        chip_row(
            CREW.iter().map(|&c| (c, None)),
            selected_crew,
            crew_cursor,
            crew_active,
        ),
        Line::from(""),
        label("DATE", date_active),
        chip_row(
            DATE_OPTIONS.iter().map(|&d| (d, None)),
            selected_date,
            date_cursor,
            date_active,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[ DONE ]",
            if done_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                muted
            },
        )),
    ];

    let sheet = Paragraph::new(lines).block(
        Block::bordered()
            .border_style(muted)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(sheet, area);
}
