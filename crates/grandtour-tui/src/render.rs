//! Pure rendering: `render(&AppState, &mut Frame)`.
//!
//! The current view's descriptor picks the collaborator; the props are
//! assembled against that descriptor before anything is drawn. If assembly
//! or the view itself fails, the error boundary draws a recovery screen in
//! place of the view and hands the fault back to the runtime.

use grandtour_core::nav::{Collaborator, ViewProps, registry};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::events::ViewFault;
use crate::state::{AppState, NoticeKind};
use crate::views::widgets::{self, ACCENT, DANGER, KeyHint, MUTED};
use crate::views::{diagram, landing, login, portal, unrecognized};

/// Draws one frame. Returns the fault caught by the error boundary, if the
/// current view failed to draw.
pub fn render(app: &AppState, frame: &mut Frame) -> Option<ViewFault> {
    let [title, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(u16::from(app.show_status_line)),
    ])
    .areas(frame.area());

    render_title(app, frame, title);
    if app.show_status_line {
        render_status_line(app, frame, status);
    }

    if let Some(fault) = &app.fault {
        render_fault(frame, body, fault);
        return None;
    }

    boundary(frame, body, |frame, area| draw_view(app, frame, area))
}

/// Runs `draw` in `area`. On failure the partial drawing is wiped and the
/// recovery screen takes its place.
fn boundary<F>(frame: &mut Frame, area: Rect, draw: F) -> Option<ViewFault>
where
    F: FnOnce(&mut Frame, Rect) -> Result<(), ViewFault>,
{
    match draw(frame, area) {
        Ok(()) => None,
        Err(fault) => {
            frame.render_widget(Clear, area);
            render_fault(frame, area, &fault);
            Some(fault)
        }
    }
}

fn draw_view(app: &AppState, frame: &mut Frame, area: Rect) -> Result<(), ViewFault> {
    let view = app.nav.current_view();
    let descriptor = registry::lookup(view);
    let props = ViewProps::assemble(descriptor, app.nav.session())
        .map_err(|e| ViewFault::new(view, e.to_string()))?;

    match descriptor.collaborator {
        Collaborator::Landing => landing::render(frame, area, &props, &app.landing),
        Collaborator::LoginForm => login::render(
            frame,
            area,
            &props,
            &app.login,
            app.nav.login_flow(),
            app.nav.state().navigation_context(),
        )?,
        Collaborator::Portal(kind) => portal::render(frame, area, &props, kind)?,
        Collaborator::ArchitectureDiagram => diagram::render(frame, area, &props, &app.diagram),
        Collaborator::UnrecognizedRole => unrecognized::render(frame, area, &props),
    }
    Ok(())
}

fn render_title(app: &AppState, frame: &mut Frame, area: Rect) {
    let descriptor = registry::lookup(app.nav.current_view());
    let line = Line::from(vec![
        Span::styled(
            " Grand Tour ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(MUTED)),
        Span::raw(descriptor.title),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let who = app.nav.session().map_or_else(
        || "guest".to_string(),
        |s| format!("{} ({})", s.display_name, s.role),
    );
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.nav.current_view()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(format!("· {who}"), Style::default().fg(MUTED)),
    ];
    if let Some(last) = app.nav.journal().last() {
        spans.push(Span::styled(
            format!(" · #{} {} → {} ({})", last.seq, last.from, last.to, last.cause),
            Style::default().fg(MUTED),
        ));
    }
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => ACCENT,
            NoticeKind::Error => DANGER,
        };
        spans.push(Span::styled(
            format!(" · {}", notice.text),
            Style::default().fg(color),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_fault(frame: &mut Frame, area: Rect, fault: &ViewFault) {
    let panel = widgets::centered_rect(60, 40, area);
    let inner = widgets::render_panel(frame, panel, "Something went wrong", DANGER);
    let [body, hints] =
        Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(inner);

    let lines = vec![
        Line::from(format!("The {} screen could not be shown.", fault.view)),
        Line::from(Span::styled(fault.message.as_str(), Style::default().fg(MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
    widgets::render_hints(frame, hints, &[KeyHint::new("Enter", "return home")]);
}

#[cfg(test)]
mod tests {
    use grandtour_core::config::Config;
    use grandtour_core::nav::{Contact, Role, Session, ViewId};
    use grandtour_core::portal::Portal;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &AppState) -> (String, Option<ViewFault>) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut fault = None;
        terminal
            .draw(|frame| fault = render(app, frame))
            .unwrap();
        (buffer_text(&terminal), fault)
    }

    #[test]
    fn test_landing_renders_offers() {
        let app = AppState::new(&Config::default());
        let (text, fault) = draw(&app);
        assert!(fault.is_none());
        assert!(text.contains("Yacht sunset cruise"));
        assert!(text.contains("landing"));
    }

    #[test]
    fn test_portal_renders_user() {
        let mut app = AppState::new(&Config::default());
        app.nav.login(
            Session::for_role(Contact::Email("anna@b.com".into()), Role::Executive),
        );
        let (text, fault) = draw(&app);
        assert!(fault.is_none());
        assert!(text.contains("Welcome, anna"));
        assert!(text.contains("Revenue"));
    }

    #[test]
    fn test_unrecognized_role_shows_no_portal_content() {
        let mut app = AppState::new(&Config::default());
        app.nav.login(Session::new(
            "Ghost",
            Contact::Email("ghost@b.com".into()),
            "ghost-role",
        ));
        let (text, fault) = draw(&app);
        assert!(fault.is_none());
        assert!(text.contains("ghost-role"));
        assert!(!text.contains("Revenue"));
        assert!(!text.contains("Welcome"));
    }

    #[test]
    fn test_boundary_shows_recovery_screen_for_stored_fault() {
        let mut app = AppState::new(&Config::default());
        app.fault = Some(ViewFault::new(ViewId::CrewApp, "boom"));
        let (text, fault) = draw(&app);
        assert!(fault.is_none());
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("return home"));
        assert!(!text.contains("Yacht sunset cruise"));
    }

    #[test]
    fn test_boundary_catches_failing_portal() {
        let executive = Session::for_role(Contact::Email("anna@b.com".into()), Role::Executive);
        let props =
            ViewProps::assemble(registry::lookup(ViewId::CrewApp), Some(&executive)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut fault = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                fault = boundary(frame, area, |frame, area| {
                    portal::render(frame, area, &props, Portal::Crew)
                });
            })
            .unwrap();

        let fault = fault.expect("portal should fail for an executive");
        assert_eq!(fault.view, ViewId::CrewApp);
        assert!(fault.message.contains("executive"));

        let text = buffer_text(&terminal);
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("return home"));
        assert!(!text.contains("Welcome, anna"));
    }

    #[test]
    fn test_boundary_passes_through_successful_draw() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut fault = Some(ViewFault::new(ViewId::Landing, "stale"));
        terminal
            .draw(|frame| {
                let area = frame.area();
                fault = boundary(frame, area, |_, _| Ok(()));
            })
            .unwrap();
        assert!(fault.is_none());
        assert!(!buffer_text(&terminal).contains("Something went wrong"));
    }

    #[test]
    fn test_status_line_can_be_hidden() {
        let mut config = Config::default();
        config.tui.show_status_line = false;
        let app = AppState::new(&config);
        let (text, _) = draw(&app);
        assert!(!text.contains("guest"));
    }
}
