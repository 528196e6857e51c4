//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover terminal I/O only; navigation is applied by the reducer
//! through the controller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
    /// Force a full repaint on the next frame (after recovering from a fault).
    ClearScreen,
}
