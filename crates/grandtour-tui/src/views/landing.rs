//! Public landing page: featured offers and the way into sign-in.

use crossterm::event::{KeyCode, KeyEvent};
use grandtour_core::nav::context::keys;
use grandtour_core::nav::{NavCommand, NavigationContext, Prop, ViewDescriptor, ViewId, ViewProps};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::widgets::{self, ACCENT, KeyHint, MUTED};
use super::{KeyOutcome, plain_char, step_cursor};
use crate::state::LandingState;

#[derive(Debug, Clone, Copy)]
pub struct Offer {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
}

pub static OFFERS: &[Offer] = &[
    Offer {
        id: "yacht-sunset",
        title: "Yacht sunset cruise",
        blurb: "Three hours along the coast with dinner on deck",
        price: "from ₽ 85 000",
    },
    Offer {
        id: "heli-krasnaya-polyana",
        title: "Helicopter to Krasnaya Polyana",
        blurb: "Mountain flight with a landing at 2 200 m",
        price: "from ₽ 140 000",
    },
    Offer {
        id: "buggy-abkhazia",
        title: "Off-road buggy day",
        blurb: "Canyons and waterfalls with a guide",
        price: "from ₽ 32 000",
    },
    Offer {
        id: "corporate-regatta",
        title: "Corporate regatta",
        blurb: "Team sailing race with catering and awards",
        price: "on request",
    },
];

pub fn offer(id: &str) -> Option<&'static Offer> {
    OFFERS.iter().find(|o| o.id == id)
}

pub fn handle_key(
    state: &mut LandingState,
    descriptor: &ViewDescriptor,
    key: KeyEvent,
) -> KeyOutcome {
    match key.code {
        KeyCode::Up => {
            state.selected = step_cursor(state.selected, OFFERS.len(), -1);
            return KeyOutcome::Handled;
        }
        KeyCode::Down => {
            state.selected = step_cursor(state.selected, OFFERS.len(), 1);
            return KeyOutcome::Handled;
        }
        KeyCode::Enter => {
            // Booking an offer starts sign-in with the offer attached.
            let context = OFFERS
                .get(state.selected)
                .map(|o| NavigationContext::new().with(keys::DEMO_ID, o.id));
            return KeyOutcome::granted(
                descriptor,
                Prop::OnLoginClick,
                NavCommand::GoTo {
                    view: ViewId::Login,
                    context,
                },
            );
        }
        _ => {}
    }

    match plain_char(&key) {
        Some('k') => {
            state.selected = step_cursor(state.selected, OFFERS.len(), -1);
            KeyOutcome::Handled
        }
        Some('j') => {
            state.selected = step_cursor(state.selected, OFFERS.len(), 1);
            KeyOutcome::Handled
        }
        Some('l') => KeyOutcome::granted(
            descriptor,
            Prop::OnLoginClick,
            NavCommand::GoTo {
                view: ViewId::Login,
                context: None,
            },
        ),
        Some('a') => KeyOutcome::granted(
            descriptor,
            Prop::OnShowDiagram,
            NavCommand::GoTo {
                view: ViewId::ArchitectureDiagram,
                context: None,
            },
        ),
        Some('q') => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

pub fn render(frame: &mut Frame, area: Rect, props: &ViewProps<'_>, state: &LandingState) {
    let [hero, offers, hints] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut hero_lines = vec![
        Line::from(Span::styled(
            "Grand Tour Sochi",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Yachts, helicopters and off-road tours on the Black Sea coast."),
    ];
    if let Some(user) = props.user {
        hero_lines.push(Line::from(Span::styled(
            format!("Signed in as {} ({})", user.display_name, user.role),
            Style::default().fg(MUTED),
        )));
    }
    frame.render_widget(Paragraph::new(hero_lines).wrap(Wrap { trim: true }), hero);

    let items: Vec<ListItem> = OFFERS
        .iter()
        .map(|o| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(o.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", o.price), Style::default().fg(ACCENT)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", o.blurb),
                    Style::default().fg(MUTED),
                )),
            ])
        })
        .collect();
    let inner = widgets::render_panel(frame, offers, "Featured", MUTED);
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, inner, &mut list_state);

    let mut hint_row = vec![KeyHint::new("↑↓", "browse")];
    if props.offers(Prop::OnLoginClick) {
        hint_row.push(KeyHint::new("Enter", "book"));
        hint_row.push(KeyHint::new("l", "sign in"));
    }
    if props.offers(Prop::OnShowDiagram) {
        hint_row.push(KeyHint::new("a", "architecture"));
    }
    hint_row.push(KeyHint::new("q", "quit"));
    widgets::render_hints(frame, hints, &hint_row);
}
