//! Role dashboards. All six portals share this renderer and the same
//! contract: the signed-in user plus logout and back-to-home.

use crossterm::event::{KeyCode, KeyEvent};
use grandtour_core::nav::router::{self, Resolution};
use grandtour_core::nav::{NavCommand, Prop, Session, ViewDescriptor, ViewProps};
use grandtour_core::portal::{Portal, Tile};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::widgets::{self, ACCENT, KeyHint, MUTED};
use super::{KeyOutcome, plain_char};
use crate::events::ViewFault;

pub fn handle_key(descriptor: &ViewDescriptor, key: KeyEvent) -> KeyOutcome {
    if key.code == KeyCode::Esc {
        return KeyOutcome::granted(descriptor, Prop::OnBackToHome, NavCommand::GoHome);
    }
    match plain_char(&key) {
        Some('o') => KeyOutcome::granted(descriptor, Prop::OnLogout, NavCommand::Logout),
        Some('h') => KeyOutcome::granted(descriptor, Prop::OnBackToHome, NavCommand::GoHome),
        Some('q') => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    props: &ViewProps<'_>,
    portal: Portal,
) -> Result<(), ViewFault> {
    let view = props.descriptor.view;
    let user = props
        .user
        .ok_or_else(|| ViewFault::new(view, "dashboard opened without a signed-in user"))?;
    if router::resolve(&user.role) != Resolution::Home(view) {
        return Err(ViewFault::new(
            view,
            format!("role `{}` does not belong to this dashboard", user.role),
        ));
    }

    let content = portal.content();
    let [header, tiles, access, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, user, content.tagline);
    render_tiles(frame, tiles, content.tiles);
    render_access(frame, access, user);

    let mut hint_row = Vec::new();
    if props.offers(Prop::OnBackToHome) {
        hint_row.push(KeyHint::new("h", "home"));
    }
    if props.offers(Prop::OnLogout) {
        hint_row.push(KeyHint::new("o", "sign out"));
    }
    hint_row.push(KeyHint::new("q", "quit"));
    widgets::render_hints(frame, hints, &hint_row);
    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, user: &Session, tagline: &str) {
    let role = user
        .role
        .role()
        .map_or(user.role.as_str(), |r| r.display_name());
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Welcome, {}", user.display_name),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {role}"), Style::default().fg(MUTED)),
        ]),
        Line::from(Span::styled(
            user.contact.as_str().to_string(),
            Style::default().fg(MUTED),
        )),
        Line::from(tagline.to_string()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tiles(frame: &mut Frame, area: Rect, tiles: &[Tile]) {
    if tiles.is_empty() {
        return;
    }
    let columns = Layout::horizontal(tiles.iter().map(|_| Constraint::Fill(1))).split(area);
    for (tile, column) in tiles.iter().zip(columns.iter()) {
        let inner = widgets::render_panel(frame, *column, tile.label, MUTED);
        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(
                widgets::truncate_with_ellipsis(tile.value, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                widgets::truncate_with_ellipsis(tile.note, width),
                Style::default().fg(MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_access(frame: &mut Frame, area: Rect, user: &Session) {
    let permissions = if user.permissions.is_empty() {
        "none".to_string()
    } else {
        user.permissions.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    let text = Line::from(vec![
        Span::styled("Access: ", Style::default().fg(MUTED)),
        Span::raw(permissions),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use grandtour_core::nav::{Contact, Role, ViewId, registry};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(props: &ViewProps<'_>, portal: Portal) -> Result<(), ViewFault> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut result = Ok(());
        terminal
            .draw(|frame| {
                let area = frame.area();
                result = render(frame, area, props, portal);
            })
            .unwrap();
        result
    }

    #[test]
    fn test_render_rejects_role_of_another_portal() {
        let executive = Session::for_role(Contact::Email("anna@b.com".into()), Role::Executive);
        let props =
            ViewProps::assemble(registry::lookup(ViewId::CrewApp), Some(&executive)).unwrap();

        let fault = draw(&props, Portal::Crew).unwrap_err();
        assert_eq!(fault.view, ViewId::CrewApp);
        assert!(fault.message.contains("does not belong to this dashboard"));
    }

    #[test]
    fn test_render_rejects_missing_user() {
        let props = ViewProps {
            descriptor: registry::lookup(ViewId::CrewApp),
            user: None,
        };

        let fault = draw(&props, Portal::Crew).unwrap_err();
        assert_eq!(fault.view, ViewId::CrewApp);
        assert!(fault.message.contains("without a signed-in user"));
    }

    #[test]
    fn test_render_accepts_matching_role() {
        let captain = Session::for_role(Contact::Email("c@b.com".into()), Role::Captain);
        let props =
            ViewProps::assemble(registry::lookup(ViewId::CrewApp), Some(&captain)).unwrap();
        assert!(draw(&props, Portal::Crew).is_ok());
    }

    #[test]
    fn test_portal_keys_map_to_contract_callbacks() {
        let descriptor = registry::lookup(ViewId::CrewApp);
        assert!(matches!(
            handle_key(descriptor, press(KeyCode::Char('o'))),
            KeyOutcome::Navigate(NavCommand::Logout)
        ));
        assert!(matches!(
            handle_key(descriptor, press(KeyCode::Char('h'))),
            KeyOutcome::Navigate(NavCommand::GoHome)
        ));
        assert!(matches!(
            handle_key(descriptor, press(KeyCode::Esc)),
            KeyOutcome::Navigate(NavCommand::GoHome)
        ));
        assert!(matches!(
            handle_key(descriptor, press(KeyCode::Char('x'))),
            KeyOutcome::Ignored
        ));
    }
}
