//! Mock job board: five status columns rendered as a phone-width window,
//! plus the scripted demo animations (drag hint, status hops, swipe-out,
//! scroll-to-closed).

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::model::{Phase, Project, STATUS_COLUMNS, Status};

/// How many of the five columns fit the phone-width mock at once.
const WINDOW: usize = 3;

/// One status hop in the status demo.
const STATUS_HOP: Duration = Duration::from_millis(1200);

/// Travel time of the swipe-out demo. The card is gone afterwards.
const SWIPE_TRAVEL: Duration = Duration::from_millis(1500);

/// Scroll-to-closed demo: a short hold, then an eased scroll.
const SCROLL_DELAY: Duration = Duration::from_millis(500);
const SCROLL_TRAVEL: Duration = Duration::from_millis(2000);

/// Which column the user's card sits in for the current phase, or `None`
/// when the swipe demo has carried it off the board.
fn user_column(phase: Phase, elapsed: Duration) -> Option<Status> {
    match phase {
        Phase::DragToAccepted => Some(Status::New),
        Phase::ProjectListStatusDemo => {
            if elapsed < STATUS_HOP {
                Some(Status::Accepted)
            } else if elapsed < STATUS_HOP * 2 {
                Some(Status::InProgress)
            } else {
                Some(Status::Completed)
            }
        }
        Phase::ProjectListSwipe => (elapsed < SWIPE_TRAVEL).then_some(Status::InProgress),
        Phase::ClosedProjectsScroll => Some(Status::Closed),
        _ => Some(Status::New),
    }
}

fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

/// Index of the leftmost visible column. Follows the card during the
/// status demo and eases toward Closed during the scroll demo.
fn first_visible_column(phase: Phase, elapsed: Duration) -> usize {
    let max_skip = STATUS_COLUMNS.len() - WINDOW;
    match phase {
        Phase::ProjectListStatusDemo => {
            let column = user_column(phase, elapsed).map_or(0, |s| {
                STATUS_COLUMNS.iter().position(|&c| c == s).unwrap_or(0)
            });
            column.saturating_sub(WINDOW - 1).min(max_skip)
        }
        Phase::ClosedProjectsScroll => {
            let progress = if elapsed <= SCROLL_DELAY {
                0.0
            } else {
                let scrolled = elapsed - SCROLL_DELAY;
                (scrolled.as_secs_f32() / SCROLL_TRAVEL.as_secs_f32()).min(1.0)
            };
            #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let skip = (ease_out_cubic(progress) * max_skip as f32).round() as usize;
            skip.min(max_skip)
        }
        _ => 0,
    }
}

/// Swipe-out indent, in cells, for the user's card.
fn swipe_indent(elapsed: Duration) -> u16 {
    let progress = (elapsed.as_secs_f32() / SWIPE_TRAVEL.as_secs_f32()).min(1.0);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let indent = (progress * 10.0) as u16;
    indent
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    samples: &[Project],
    user: Option<&Project>,
    phase: Phase,
    elapsed: Duration,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // columns
    ])
    .split(area);

    let muted = Style::default().fg(Color::DarkGray);
    let total = samples.len() + usize::from(user.is_some());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Job Board",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {total} projects"), muted),
    ]))
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(header, chunks[0]);

    let first = first_visible_column(phase, elapsed);
    let visible = &STATUS_COLUMNS[first..first + WINDOW];
    let column_areas = Layout::horizontal([Constraint::Ratio(1, WINDOW as u32); WINDOW])
        .split(chunks[1]);

    let user_at = user.and(user_column(phase, elapsed));
    for (column_area, &status) in column_areas.iter().zip(visible) {
        render_column(frame, *column_area, status, samples, user, user_at, phase, elapsed);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_column(
    frame: &mut Frame,
    area: Rect,
    status: Status,
    samples: &[Project],
    user: Option<&Project>,
    user_at: Option<Status>,
    phase: Phase,
    elapsed: Duration,
) {
    let (r, g, b) = status.color();
    let dot = Style::default().fg(Color::Rgb(r, g, b));
    let muted = Style::default().fg(Color::DarkGray);

    let mut cards: Vec<&Project> = Vec::new();
    if user_at == Some(status) {
        if let Some(user) = user {
            cards.push(user);
        }
    }
    cards.extend(samples.iter().filter(|p| p.status == status));

    let mut lines = vec![Line::from(vec![
        Span::styled("● ", dot),
        Span::styled(
            status.label().to_uppercase(),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!(" {}", cards.len()), muted),
    ])];

    for card in &cards {
        let is_user = user.is_some_and(|u| std::ptr::eq(u, *card));
        let indent = if is_user && phase == Phase::ProjectListSwipe {
            usize::from(swipe_indent(elapsed))
        } else {
            0
        };
        let name_style = if is_user {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let (tr, tg, tb) = card.task_type_color;

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(if is_user { "▐ " } else { "  " }, dot),
            Span::styled(card.name.clone(), name_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(format!("  {}", card.client), muted),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(
                format!("  {}", card.task_type),
                Style::default().fg(Color::Rgb(tr, tg, tb)),
            ),
        ]));
    }

    // Drag hint: a cursor sliding out of the New column toward Accepted.
    if phase == Phase::DragToAccepted && status == Status::New {
        let progress = (elapsed.as_secs_f32() / 3.5).min(1.0);
        let travel = f32::from(area.width.saturating_sub(8));
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let x = (progress * travel) as usize;
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(x)),
            Span::styled("✦ drag →", Style::default().fg(Color::Rgb(0x59, 0x77, 0x9F))),
        ]));
    }

    let column = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(column, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_demo_hops_through_the_columns() {
        let phase = Phase::ProjectListStatusDemo;
        assert_eq!(user_column(phase, Duration::ZERO), Some(Status::Accepted));
        assert_eq!(
            user_column(phase, Duration::from_millis(1200)),
            Some(Status::InProgress)
        );
        assert_eq!(
            user_column(phase, Duration::from_millis(2400)),
            Some(Status::Completed)
        );
        assert_eq!(
            user_column(phase, Duration::from_millis(5900)),
            Some(Status::Completed)
        );
    }

    #[test]
    fn swipe_carries_the_card_off_the_board() {
        let phase = Phase::ProjectListSwipe;
        assert_eq!(
            user_column(phase, Duration::from_millis(0)),
            Some(Status::InProgress)
        );
        assert_eq!(user_column(phase, Duration::from_millis(1500)), None);
    }

    #[test]
    fn drag_demo_keeps_the_card_in_new() {
        assert_eq!(
            user_column(Phase::DragToAccepted, Duration::from_secs(3)),
            Some(Status::New)
        );
    }

    #[test]
    fn scroll_demo_ends_on_the_closed_column() {
        let phase = Phase::ClosedProjectsScroll;
        assert_eq!(first_visible_column(phase, Duration::ZERO), 0);
        let last = first_visible_column(phase, Duration::from_millis(2500));
        assert_eq!(last, STATUS_COLUMNS.len() - WINDOW);
    }

    #[test]
    fn window_follows_the_status_demo_card() {
        let phase = Phase::ProjectListStatusDemo;
        assert_eq!(first_visible_column(phase, Duration::ZERO), 0);
        // Card in Completed (index 3): window must include it.
        let first = first_visible_column(phase, Duration::from_millis(2400));
        assert!(first + WINDOW > 3);
    }

    #[test]
    fn swipe_indent_grows_then_saturates() {
        assert_eq!(swipe_indent(Duration::ZERO), 0);
        assert!(swipe_indent(Duration::from_millis(750)) > 0);
        assert_eq!(swipe_indent(Duration::from_millis(1500)), 10);
        assert_eq!(swipe_indent(Duration::from_secs(9)), 10);
    }
}
