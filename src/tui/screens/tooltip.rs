//! Instruction tooltip with a tick-driven typewriter reveal.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

/// Title reveal speed.
const TITLE_CHAR: Duration = Duration::from_millis(20);

/// Body reveal speed. The body starts once the title has finished.
const BODY_CHAR: Duration = Duration::from_millis(15);

/// How many characters of title and body are visible after `elapsed`
/// in the phase.
fn revealed(title_len: usize, body_len: usize, elapsed: Duration) -> (usize, usize) {
    let title_chars =
        usize::try_from(elapsed.as_millis() / TITLE_CHAR.as_millis()).unwrap_or(usize::MAX);
    if title_chars < title_len {
        return (title_chars, 0);
    }

    let title_time = TITLE_CHAR * u32::try_from(title_len).unwrap_or(u32::MAX);
    let body_elapsed = elapsed.saturating_sub(title_time);
    let body_chars =
        usize::try_from(body_elapsed.as_millis() / BODY_CHAR.as_millis()).unwrap_or(usize::MAX);
    (title_len, body_chars.min(body_len))
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &str,
    elapsed: Duration,
    reduce_motion: bool,
) {
    if title.is_empty() {
        return;
    }

    let title_len = title.chars().count();
    let body_len = body.chars().count();
    let (title_chars, body_chars) = if reduce_motion {
        (title_len, body_len)
    } else {
        revealed(title_len, body_len, elapsed)
    };

    let accent = Style::default().fg(Color::Rgb(0x59, 0x77, 0x9F));
    let mut title_spans = vec![
        Span::styled("💡 ", accent),
        Span::styled(
            title.chars().take(title_chars).collect::<String>(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if title_chars < title_len {
        title_spans.push(Span::styled("▌", accent));
    }

    let mut body_spans = vec![Span::styled(
        body.chars().take(body_chars).collect::<String>(),
        Style::default().fg(Color::Gray),
    )];
    if title_chars == title_len && body_chars < body_len {
        body_spans.push(Span::styled("▌", accent));
    }

    let card = Paragraph::new(vec![Line::from(title_spans), Line::from(body_spans)])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(accent)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reveals_before_body() {
        // 10-char title takes 200 ms; body must stay hidden until then.
        let (t, b) = revealed(10, 20, Duration::from_millis(100));
        assert_eq!((t, b), (5, 0));

        let (t, b) = revealed(10, 20, Duration::from_millis(200));
        assert_eq!((t, b), (10, 0));
    }

    #[test]
    fn body_reveals_after_title_finishes() {
        // Title done at 200 ms; 60 ms later, four body chars.
        let (t, b) = revealed(10, 20, Duration::from_millis(260));
        assert_eq!((t, b), (10, 4));
    }

    #[test]
    fn reveal_saturates_at_full_length() {
        let (t, b) = revealed(10, 20, Duration::from_secs(60));
        assert_eq!((t, b), (10, 20));
    }
}
