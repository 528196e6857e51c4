//! Events consumed by the reducer.

use crossterm::event::Event;
use grandtour_core::nav::ViewId;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic wake-up; expires transient notices.
    Tick,
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
    /// The renderer could not draw the current view.
    ViewFault(ViewFault),
}

/// A view failed to render. Caught by the error boundary, which replaces the
/// view with a recovery screen until the user returns to the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFault {
    pub view: ViewId,
    pub message: String,
}

impl ViewFault {
    pub fn new(view: ViewId, message: impl Into<String>) -> Self {
        Self {
            view,
            message: message.into(),
        }
    }
}
