//! Sign-in form: one screen per [`LoginStep`].
//!
//! The form only collects input. Validation and step changes belong to the
//! controller; a rejected submission comes back as an inline error set by
//! the reducer.

use std::mem;

use crossterm::event::{KeyCode, KeyEvent};
use grandtour_core::nav::context::keys;
use grandtour_core::nav::login::TWO_FACTOR_CODE_LEN;
use grandtour_core::nav::{
    LoginFlow, LoginStep, NavCommand, NavigationContext, Prop, Role, ViewDescriptor, ViewProps,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use secrecy::SecretString;

use super::widgets::{self, ACCENT, DANGER, Field, KeyHint, MUTED};
use super::{KeyOutcome, landing, plain_char, step_cursor};
use crate::events::ViewFault;
use crate::state::{CredentialField, LoginFormState};

/// Longest code the field accepts; anything but six digits is still
/// rejected on submit.
const CODE_INPUT_LIMIT: usize = 16;

pub fn handle_key(
    form: &mut LoginFormState,
    step: LoginStep,
    descriptor: &ViewDescriptor,
    key: KeyEvent,
) -> KeyOutcome {
    if key.code == KeyCode::Esc {
        return KeyOutcome::granted(descriptor, Prop::OnBack, NavCommand::LoginBack);
    }
    match step {
        LoginStep::Credentials => credentials_key(form, key),
        LoginStep::Role => role_key(form, key),
        LoginStep::TwoFactor => two_factor_key(form, descriptor, key),
    }
}

/// Pasted text goes into whichever field is being edited.
pub fn handle_paste(form: &mut LoginFormState, step: LoginStep, text: &str) -> KeyOutcome {
    let text = text.trim_end_matches(['\r', '\n']);
    match step {
        LoginStep::Credentials => {
            focused_buffer(form).push_str(text);
            KeyOutcome::Handled
        }
        LoginStep::TwoFactor => {
            let room = CODE_INPUT_LIMIT.saturating_sub(form.code.chars().count());
            form.code.extend(text.chars().take(room));
            KeyOutcome::Handled
        }
        LoginStep::Role => KeyOutcome::Ignored,
    }
}

fn focused_buffer(form: &mut LoginFormState) -> &mut String {
    match form.focus {
        CredentialField::Login => &mut form.login,
        CredentialField::Password => &mut form.password,
    }
}

fn credentials_key(form: &mut LoginFormState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.focus = form.focus.toggle();
            KeyOutcome::Handled
        }
        KeyCode::Enter => {
            if form.focus == CredentialField::Login && form.password.is_empty() {
                form.focus = CredentialField::Password;
                return KeyOutcome::Handled;
            }
            KeyOutcome::Navigate(NavCommand::SubmitCredentials {
                login: form.login.clone(),
                password: SecretString::new(mem::take(&mut form.password)),
            })
        }
        KeyCode::Backspace => {
            focused_buffer(form).pop();
            KeyOutcome::Handled
        }
        _ => match plain_char(&key) {
            Some(c) => {
                focused_buffer(form).push(c);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        },
    }
}

fn role_key(form: &mut LoginFormState, key: KeyEvent) -> KeyOutcome {
    let count = Role::selectable().count();
    match (key.code, plain_char(&key)) {
        (KeyCode::Up, _) | (_, Some('k')) => {
            form.role_cursor = step_cursor(form.role_cursor, count, -1);
            KeyOutcome::Handled
        }
        (KeyCode::Down, _) | (_, Some('j')) => {
            form.role_cursor = step_cursor(form.role_cursor, count, 1);
            KeyOutcome::Handled
        }
        (KeyCode::Enter, _) => match form.highlighted_role() {
            Some(role) => KeyOutcome::Navigate(NavCommand::SelectRole(role)),
            None => KeyOutcome::Ignored,
        },
        _ => KeyOutcome::Ignored,
    }
}

fn two_factor_key(
    form: &mut LoginFormState,
    descriptor: &ViewDescriptor,
    key: KeyEvent,
) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => KeyOutcome::granted(
            descriptor,
            Prop::OnLogin,
            NavCommand::SubmitTwoFactor(mem::take(&mut form.code)),
        ),
        KeyCode::Backspace => {
            form.code.pop();
            KeyOutcome::Handled
        }
        _ => match plain_char(&key) {
            Some(c) if form.code.chars().count() < CODE_INPUT_LIMIT => {
                form.code.push(c);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        },
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    props: &ViewProps<'_>,
    form: &LoginFormState,
    flow: Option<&LoginFlow>,
    context: &NavigationContext,
) -> Result<(), ViewFault> {
    let flow = flow.ok_or_else(|| {
        ViewFault::new(props.descriptor.view, "sign-in form opened without a login flow")
    })?;
    let step = flow.step();

    let panel = widgets::centered_rect(70, 80, area);
    let title = format!("{} · step {} of 3", props.descriptor.title, step.number());
    let inner = widgets::render_panel(frame, panel, &title, ACCENT);

    let [banner, body, error, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let booking = context
        .get(keys::DEMO_ID)
        .and_then(landing::offer)
        .map(|o| format!("Sign in to book: {}", o.title));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            booking.unwrap_or_else(|| "Sign in to your Grand Tour account".to_string()),
            Style::default().fg(MUTED),
        ))),
        banner,
    );

    match step {
        LoginStep::Credentials => render_credentials(frame, body, form),
        LoginStep::Role => render_roles(frame, body, form),
        LoginStep::TwoFactor => render_two_factor(frame, body, form, flow),
    }

    if let Some(message) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(message.as_str(), Style::default().fg(DANGER))),
            error,
        );
    }

    let hint_row = match step {
        LoginStep::Credentials => vec![
            KeyHint::new("Tab", "switch field"),
            KeyHint::new("Enter", "continue"),
            KeyHint::new("Esc", "back to home"),
        ],
        LoginStep::Role => vec![
            KeyHint::new("↑↓", "choose"),
            KeyHint::new("Enter", "continue"),
            KeyHint::new("Esc", "back"),
        ],
        LoginStep::TwoFactor => vec![KeyHint::new("Enter", "verify"), KeyHint::new("Esc", "back")],
    };
    widgets::render_hints(frame, hints, &hint_row);
    Ok(())
}

fn render_credentials(frame: &mut Frame, area: Rect, form: &LoginFormState) {
    let [login, _, password] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    widgets::render_field(
        frame,
        login,
        &Field {
            label: "Email or phone",
            value: &form.login,
            placeholder: "guest@example.com or +7 999 123 45 67",
            focused: form.focus == CredentialField::Login,
            masked: false,
        },
    );
    widgets::render_field(
        frame,
        password,
        &Field {
            label: "Password",
            value: &form.password,
            placeholder: "",
            focused: form.focus == CredentialField::Password,
            masked: true,
        },
    );
}

fn render_roles(frame: &mut Frame, area: Rect, form: &LoginFormState) {
    let items: Vec<ListItem> = Role::selectable()
        .map(|role| {
            ListItem::new(Line::from(vec![
                Span::raw(role.display_name()),
                Span::styled(
                    format!("  {}", role.group().display_name()),
                    Style::default().fg(MUTED),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(form.role_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_two_factor(frame: &mut Frame, area: Rect, form: &LoginFormState, flow: &LoginFlow) {
    let [sent_to, role_area, _, code] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let contact = flow.contact().map_or("your contact", |c| c.as_str());
    frame.render_widget(
        Paragraph::new(format!(
            "We sent a {TWO_FACTOR_CODE_LEN}-digit code to {contact}."
        )),
        sent_to,
    );
    if let Some(role) = flow.selected_role() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Signing in as {}", role.display_name()),
                Style::default().fg(MUTED),
            )),
            role_area,
        );
    }
    widgets::render_field(
        frame,
        code,
        &Field {
            label: "Code",
            value: &form.code,
            placeholder: "000000",
            focused: true,
            masked: false,
        },
    );
}
