//! Architecture overview, drawn from the hand-written dataset in
//! [`grandtour_core::diagram`].

use crossterm::event::{KeyCode, KeyEvent};
use grandtour_core::diagram::{self, Layer, Node};
use grandtour_core::nav::{NavCommand, Prop, ViewDescriptor, ViewId, ViewProps};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::widgets::{self, ACCENT, KeyHint, MUTED};
use super::{KeyOutcome, plain_char, step_cursor};
use crate::state::DiagramState;

/// Nodes in display order: grouped by layer.
fn ordered_nodes() -> Vec<&'static Node> {
    let dataset = diagram::architecture();
    Layer::all()
        .iter()
        .flat_map(|layer| dataset.nodes_in(*layer))
        .collect()
}

pub fn handle_key(state: &mut DiagramState, descriptor: &ViewDescriptor, key: KeyEvent) -> KeyOutcome {
    let count = diagram::architecture().nodes.len();
    match (key.code, plain_char(&key)) {
        (KeyCode::Up, _) | (_, Some('k')) => {
            state.selected = step_cursor(state.selected, count, -1);
            KeyOutcome::Handled
        }
        (KeyCode::Down, _) | (_, Some('j')) => {
            state.selected = step_cursor(state.selected, count, 1);
            KeyOutcome::Handled
        }
        // Back to landing without touching the session.
        (KeyCode::Esc, _) | (_, Some('h')) => KeyOutcome::granted(
            descriptor,
            Prop::OnBackToHome,
            NavCommand::GoTo {
                view: ViewId::Landing,
                context: None,
            },
        ),
        (_, Some('q')) => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

pub fn render(frame: &mut Frame, area: Rect, props: &ViewProps<'_>, state: &DiagramState) {
    let dataset = diagram::architecture();
    let nodes = ordered_nodes();

    let [notice, body, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            dataset.notice,
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
        notice,
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);

    let items: Vec<ListItem> = nodes
        .iter()
        .map(|node| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", node.layer.display_name()),
                    Style::default().fg(MUTED),
                ),
                Span::raw(node.label),
            ]))
        })
        .collect();
    let inner = widgets::render_panel(frame, left, "Components", MUTED);
    let list = List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, inner, &mut list_state);

    if let Some(node) = nodes.get(state.selected) {
        let inner = widgets::render_panel(frame, right, node.label, ACCENT);
        let mut lines = vec![Line::from(node.summary), Line::from("")];
        let mut edges = dataset.edges_from(node.id).peekable();
        if edges.peek().is_none() {
            lines.push(Line::from(Span::styled(
                "No outgoing links",
                Style::default().fg(MUTED),
            )));
        }
        for edge in edges {
            let target = dataset.node(edge.to).map_or(edge.to, |n| n.label);
            lines.push(Line::from(vec![
                Span::styled(format!("{} → ", edge.label), Style::default().fg(MUTED)),
                Span::raw(target),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    let mut hint_row = vec![KeyHint::new("↑↓", "select")];
    if props.offers(Prop::OnBackToHome) {
        hint_row.push(KeyHint::new("h", "back"));
    }
    hint_row.push(KeyHint::new("q", "quit"));
    widgets::render_hints(frame, hints, &hint_row);
}
