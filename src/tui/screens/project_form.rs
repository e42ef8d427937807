//! New Project bottom sheet. The active field follows the phase;
//! everything else renders dimmed, exactly like the mock it imitates.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph},
};

use crate::model::{CLIENTS, Phase};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    phase: Phase,
    selected_client: Option<&str>,
    project_name: &str,
    has_task: bool,
    client_cursor: usize,
) {
    frame.render_widget(Clear, area);

    let muted = Style::default().fg(Color::DarkGray);
    let accent = Style::default().fg(Color::Rgb(0x59, 0x77, 0x9F));
    let white = Style::default().fg(Color::White);

    let field_label = |label: &str, active: bool| {
        Line::from(Span::styled(
            label.to_string(),
            if active { accent.add_modifier(Modifier::BOLD) } else { muted },
        ))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "NEW PROJECT",
            white.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Client field, with the dropdown open during the selection phase.
    let client_active = phase == Phase::ProjectFormClient;
    lines.push(field_label("CLIENT", client_active));
    lines.push(Line::from(Span::styled(
        selected_client.map_or_else(|| "Select a client...".to_string(), str::to_string),
        if selected_client.is_some() { white } else { muted },
    )));
    if client_active {
        for (i, client) in CLIENTS.iter().enumerate() {
            let (pointer, style) = if i == client_cursor {
                ("› ", white.add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            lines.push(Line::from(vec![
                Span::styled(pointer, accent),
                Span::styled(*client, style),
            ]));
        }
    }
    lines.push(Line::from(""));

    // Project name input.
    let name_active = phase == Phase::ProjectFormName;
    lines.push(field_label("PROJECT NAME", name_active));
    let mut name_spans = vec![Span::styled(
        if project_name.is_empty() && !name_active {
            "Enter project name...".to_string()
        } else {
            project_name.to_string()
        },
        if project_name.is_empty() { muted } else { white },
    )];
    if name_active {
        name_spans.push(Span::styled("█", accent));
    }
    lines.push(Line::from(name_spans));
    lines.push(Line::from(""));

    // Tasks section.
    let add_task_active = phase == Phase::ProjectFormAddTask;
    lines.push(field_label("TASKS", add_task_active));
    if has_task {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Rgb(0x4A, 0x8B, 0x6E))),
            Span::styled("Task added", white),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "[ + ADD TASK ]",
        if add_task_active { accent.add_modifier(Modifier::BOLD) } else { muted },
    )));
    lines.push(Line::from(""));

    // Primary action.
    let create_active = phase == Phase::ProjectFormComplete;
    lines.push(Line::from(Span::styled(
        "[ CREATE ]",
        if create_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            muted
        },
    )));

    let sheet = Paragraph::new(lines).block(
        Block::bordered()
            .border_style(muted)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(sheet, area);
}
