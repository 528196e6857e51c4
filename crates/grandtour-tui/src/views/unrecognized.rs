//! Neutral screen for a session whose role maps to no portal.
//!
//! Shows no portal content and offers exactly one way out: sign out.

use crossterm::event::{KeyCode, KeyEvent};
use grandtour_core::nav::{NavCommand, Prop, ViewDescriptor, ViewProps};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::widgets::{self, DANGER, KeyHint, MUTED};
use super::{KeyOutcome, plain_char};

pub fn handle_key(descriptor: &ViewDescriptor, key: KeyEvent) -> KeyOutcome {
    match (key.code, plain_char(&key)) {
        (KeyCode::Enter, _) | (_, Some('o')) => {
            KeyOutcome::granted(descriptor, Prop::OnLogout, NavCommand::Logout)
        }
        (_, Some('q')) => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

pub fn render(frame: &mut Frame, area: Rect, props: &ViewProps<'_>) {
    let panel = widgets::centered_rect(60, 50, area);
    let inner = widgets::render_panel(frame, panel, props.descriptor.title, DANGER);
    let [body, hints] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);

    let mut lines = vec![Line::from(
        "Your account does not have access to any area of this app.",
    )];
    if let Some(user) = props.user {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Signed in as {} with role \"{}\"", user.display_name, user.role),
            Style::default().fg(MUTED),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        "Sign out and contact your Grand Tour manager to have a role assigned.",
    ));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    if props.offers(Prop::OnLogout) {
        widgets::render_hints(frame, hints, &[KeyHint::new("Enter", "sign out")]);
    }
}
