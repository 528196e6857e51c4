//! TUI reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Navigation requests coming out of the
//! views are applied to the controller here and nowhere else.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use grandtour_core::nav::{Collaborator, LoginFlow, NavCommand, NavError, ViewId, registry};
use tracing::{error, info, warn};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, NoticeKind};
use crate::views::{KeyOutcome, diagram, landing, login, plain_char, portal, unrecognized};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.expire_notice(Instant::now());
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(Event::Paste(text)) => handle_paste(app, &text),
        UiEvent::Terminal(_) => vec![],
        UiEvent::ViewFault(fault) => {
            error!(view = %fault.view, message = %fault.message, "view failed to render");
            app.fault = Some(fault);
            vec![]
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if app.fault.is_some() {
        return match (key.code, plain_char(&key)) {
            (KeyCode::Enter, _) => recover(app),
            (_, Some('q')) => vec![UiEffect::Quit],
            _ => vec![],
        };
    }

    let descriptor = registry::lookup(app.nav.current_view());
    let outcome = match descriptor.collaborator {
        Collaborator::Landing => landing::handle_key(&mut app.landing, descriptor, key),
        Collaborator::LoginForm => match app.nav.login_flow().map(LoginFlow::step) {
            Some(step) => login::handle_key(&mut app.login, step, descriptor, key),
            None => KeyOutcome::Ignored,
        },
        Collaborator::Portal(_) => portal::handle_key(descriptor, key),
        Collaborator::ArchitectureDiagram => {
            diagram::handle_key(&mut app.diagram, descriptor, key)
        }
        Collaborator::UnrecognizedRole => unrecognized::handle_key(descriptor, key),
    };
    apply_outcome(app, outcome)
}

fn handle_paste(app: &mut AppState, text: &str) -> Vec<UiEffect> {
    if app.fault.is_some() {
        return vec![];
    }
    let outcome = match app.nav.login_flow().map(LoginFlow::step) {
        Some(step) => login::handle_paste(&mut app.login, step, text),
        None => KeyOutcome::Ignored,
    };
    apply_outcome(app, outcome)
}

fn apply_outcome(app: &mut AppState, outcome: KeyOutcome) -> Vec<UiEffect> {
    match outcome {
        KeyOutcome::Ignored | KeyOutcome::Handled => vec![],
        KeyOutcome::Quit => vec![UiEffect::Quit],
        KeyOutcome::Navigate(command) => {
            apply_command(app, command);
            vec![]
        }
    }
}

fn apply_command(app: &mut AppState, command: NavCommand) {
    let before = app.nav.current_view();
    let was_signed_in = app.nav.session().is_some();

    match app.nav.dispatch(command) {
        Ok(()) => {
            app.login.error = None;
            if before == ViewId::Login && app.nav.current_view() != ViewId::Login {
                app.reset_login_form();
            }
            let signed_in_as = app.nav.session().map(|s| s.display_name.clone());
            match (was_signed_in, signed_in_as) {
                (true, None) => app.notify(NoticeKind::Info, "Signed out"),
                (false, Some(name)) => app.notify(NoticeKind::Info, format!("Signed in as {name}")),
                _ => {}
            }
        }
        Err(NavError::IncompleteLoginStep(e)) => {
            app.login.error = Some(e.to_string());
        }
        Err(e) => {
            warn!(error = %e, view = %before, "navigation command rejected");
            app.notify(NoticeKind::Error, e.to_string());
        }
    }
}

/// Leaves the recovery screen. The only way out is the landing page.
fn recover(app: &mut AppState) -> Vec<UiEffect> {
    if let Some(fault) = app.fault.take() {
        info!(view = %fault.view, "recovered from view fault");
    }
    app.nav.go_home();
    app.reset_login_form();
    vec![UiEffect::ClearScreen]
}
