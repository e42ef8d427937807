//! Mock schedule calendar: week view with a day selector and today's
//! task list, and a month grid. Task dots are seeded deterministically
//! from the day number so the mock looks alive without any real data.

use jiff::ToSpan;
use jiff::civil::Date;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::model::{Phase, Project, TASK_TYPES};

const DAY_ABBREVIATIONS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Deterministic task dots for a day of the month.
fn day_dots(day: i8) -> Vec<(u8, u8, u8)> {
    let palette = |i: i8| TASK_TYPES[usize::from(i.unsigned_abs()) % TASK_TYPES.len()].color;
    let mut dots = Vec::new();
    if day % 2 == 0 {
        dots.push(palette(day));
    }
    if day % 3 == 0 {
        dots.push(palette(day + 2));
    }
    if day % 7 == 0 {
        dots.push(palette(day + 4));
    }
    dots
}

/// The Monday-start week containing `today`.
fn week_days(today: Date) -> [Date; 7] {
    let offset = i64::from(today.weekday().to_monday_zero_offset());
    let monday = today.saturating_sub(offset.days());
    std::array::from_fn(|i| {
        #[allow(clippy::cast_possible_wrap)]
        monday.saturating_add((i as i64).days())
    })
}

/// Month layout: how many leading blanks the grid needs (Monday-start)
/// and how many days the month has.
fn month_grid(today: Date) -> (usize, i8) {
    let offset = today.first_of_month().weekday().to_monday_zero_offset();
    (usize::from(offset.unsigned_abs()), today.days_in_month())
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    month_view: bool,
    phase: Phase,
    today: Date,
    user: Option<&Project>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // week/month toggle
        Constraint::Length(1), // month-year label
        Constraint::Min(0),    // grid / schedule
    ])
    .split(area);

    let muted = Style::default().fg(Color::DarkGray);
    let accent = Style::default().fg(Color::Rgb(0x59, 0x77, 0x9F));
    let highlight = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let header = Paragraph::new(Line::from(Span::styled("SCHEDULE", highlight)))
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(header, chunks[0]);

    // View toggle. The Month tab glows while the tour waits for its tap.
    let month_style = if month_view {
        highlight
    } else if phase == Phase::CalendarMonthPrompt {
        accent.add_modifier(Modifier::BOLD)
    } else {
        muted
    };
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(" WEEK ", if month_view { muted } else { highlight }),
        Span::styled("│", muted),
        Span::styled(" MONTH ", month_style),
        if phase == Phase::CalendarMonthPrompt {
            Span::styled("◄ tap", accent)
        } else {
            Span::raw("")
        },
    ]))
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(toggle, chunks[1]);

    let label = Paragraph::new(Line::from(Span::styled(
        today.strftime("%B %Y").to_string(),
        muted,
    )))
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(label, chunks[2]);

    if month_view {
        render_month(frame, chunks[3], today, user);
    } else {
        render_week(frame, chunks[3], today, user);
    }
}

fn render_week(frame: &mut Frame, area: Rect, today: Date, user: Option<&Project>) {
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    // Day selector: abbreviation, date number, dots.
    let days = week_days(today);
    let mut abbrev = Vec::new();
    let mut numbers = Vec::new();
    let mut dots_row = Vec::new();
    for (i, day) in days.iter().enumerate() {
        let is_today = *day == today;
        abbrev.push(Span::styled(format!("  {} ", DAY_ABBREVIATIONS[i]), muted));
        numbers.push(Span::styled(
            format!(" {:>2} ", day.day()),
            if is_today {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0x59, 0x77, 0x9F))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ));

        let mut dots = day_dots(day.day());
        if is_today {
            if let Some(user) = user {
                dots.insert(0, user.task_type_color);
            }
        }
        let mut cell = String::new();
        for _ in dots.iter().take(3) {
            cell.push('•');
        }
        dots_row.push(Span::styled(
            format!(" {cell:<3}"),
            dots.first().map_or(muted, |&(r, g, b)| {
                Style::default().fg(Color::Rgb(r, g, b))
            }),
        ));
    }
    lines.push(Line::from(abbrev));
    lines.push(Line::from(numbers));
    lines.push(Line::from(dots_row));
    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(area.width.saturating_sub(2))),
        muted,
    )));

    // Today's schedule, user project first.
    let mut items: Vec<(&str, String, String, String, (u8, u8, u8))> = Vec::new();
    if let Some(user) = user {
        items.push((
            "8:00 AM",
            user.name.clone(),
            user.client.clone(),
            user.task_type.clone(),
            user.task_type_color,
        ));
    }
    items.push((
        "9:30 AM",
        "Flight Deck Coating".to_string(),
        "Miramar Flight Academy".to_string(),
        "Coating".to_string(),
        (0x5A, 0x7B, 0xD4),
    ));
    items.push((
        "1:00 PM",
        "O'Club Patio Resurface".to_string(),
        "O'Club Bar & Grill".to_string(),
        "Paving".to_string(),
        (0xB0, 0x88, 0xD4),
    ));

    for (time, name, client, task_type, (r, g, b)) in items {
        let stripe = Style::default().fg(Color::Rgb(r, g, b));
        lines.push(Line::from(vec![
            Span::styled("▌ ", stripe),
            Span::styled(
                name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("▌ ", stripe),
            Span::styled(client, muted),
            Span::styled(format!("  {task_type}"), stripe),
            Span::styled(format!("  {time}"), muted),
        ]));
        lines.push(Line::from(""));
    }

    let week = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(week, area);
}

fn render_month(frame: &mut Frame, area: Rect, today: Date, user: Option<&Project>) {
    let muted = Style::default().fg(Color::DarkGray);
    let (start_offset, days_in_month) = month_grid(today);

    let mut lines = vec![Line::from(
        DAY_ABBREVIATIONS
            .iter()
            .map(|a| Span::styled(format!("  {a} "), muted))
            .collect::<Vec<_>>(),
    )];

    let mut numbers: Vec<Span> = Vec::new();
    let mut dots: Vec<Span> = Vec::new();
    for _ in 0..start_offset {
        numbers.push(Span::raw("    "));
        dots.push(Span::raw("    "));
    }

    let mut column = start_offset;
    for day in 1..=days_in_month {
        let is_today = day == today.day();
        numbers.push(Span::styled(
            format!(" {day:>2} "),
            if is_today {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0x59, 0x77, 0x9F))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ));

        let mut day_colors = day_dots(day);
        if is_today {
            if let Some(user) = user {
                day_colors.insert(0, user.task_type_color);
            }
        }
        let marks: String = day_colors.iter().take(3).map(|_| '•').collect();
        dots.push(Span::styled(
            format!(" {marks:<3}"),
            day_colors.first().map_or(muted, |&(r, g, b)| {
                Style::default().fg(Color::Rgb(r, g, b))
            }),
        ));

        column += 1;
        if column == 7 {
            lines.push(Line::from(std::mem::take(&mut numbers)));
            lines.push(Line::from(std::mem::take(&mut dots)));
            column = 0;
        }
    }
    if !numbers.is_empty() {
        lines.push(Line::from(numbers));
        lines.push(Line::from(dots));
    }

    let month = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(month, area);
}
