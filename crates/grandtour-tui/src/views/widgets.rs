//! Small drawing helpers shared by the views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const DANGER: Color = Color::Red;

/// One `key action` pair in a hint row.
pub struct KeyHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> KeyHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Draws the hints centered on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[KeyHint<'_>]) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(MUTED)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(ACCENT)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(MUTED),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

/// A single-line text field.
pub struct Field<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    /// Draw one bullet per character instead of the value.
    pub masked: bool,
}

pub fn render_field(frame: &mut Frame, area: Rect, field: &Field<'_>) {
    let label_width = field.label.width() + 2;
    let max_width = (area.width as usize).saturating_sub(label_width + 1);

    let label_style = if field.focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    let mut spans = vec![Span::styled(format!("{}: ", field.label), label_style)];

    if field.value.is_empty() {
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            truncate_with_ellipsis(field.placeholder, max_width),
            Style::default().fg(MUTED),
        ));
    } else {
        let shown = if field.masked {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.to_string()
        };
        spans.push(Span::raw(truncate_start_with_ellipsis(&shown, max_width)));
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Bordered panel with a title; returns the inner area.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Rect taking `percent_x` by `percent_y` of `r`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

/// Cuts `text` to `max_width` display columns, ending with an ellipsis.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Like [`truncate_with_ellipsis`] but keeps the end, so the cursor side of
/// a long input stays visible.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        kept.push(ch);
    }
    let mut out = String::from("…");
    out.extend(kept.into_iter().rev());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("yacht", 10), "yacht");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("helicopter", 5), "heli…");
        assert_eq!(truncate_with_ellipsis("helicopter", 1), "…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(
            truncate_start_with_ellipsis("guest@grandtour.example", 8),
            "…example"
        );
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Wide glyphs take two columns each.
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 5), "日本…");
    }
}
