//! View collaborators.
//!
//! Each module draws one [`Collaborator`](grandtour_core::nav::Collaborator)
//! and turns key presses into a [`KeyOutcome`]. Views never touch the
//! controller; navigation leaves them as a [`NavCommand`], and only for the
//! callbacks their descriptor grants.

pub mod diagram;
pub mod landing;
pub mod login;
pub mod portal;
pub mod unrecognized;
pub mod widgets;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use grandtour_core::nav::{NavCommand, Prop, ViewDescriptor};

/// What a view made of a key press.
#[derive(Debug)]
pub enum KeyOutcome {
    Ignored,
    /// Local state changed; nothing to navigate.
    Handled,
    Navigate(NavCommand),
    Quit,
}

impl KeyOutcome {
    /// `Navigate(command)` if the descriptor grants `prop`, else `Ignored`.
    pub fn granted(descriptor: &ViewDescriptor, prop: Prop, command: NavCommand) -> Self {
        if descriptor.requires(prop) {
            KeyOutcome::Navigate(command)
        } else {
            KeyOutcome::Ignored
        }
    }
}

/// Plain character without Ctrl/Alt.
pub(crate) fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Moves a list cursor by `delta`, wrapping around `len`.
pub(crate) fn step_cursor(cursor: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta).rem_euclid(len as isize) as usize
}
