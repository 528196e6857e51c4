//! Navigation core: which view is on screen, for whom, and how it changes.
//!
//! Dependency order, leaves first: [`registry`] (static data), [`router`]
//! (pure role routing), [`controller`] (the stateful owner of both).

pub mod context;
pub mod controller;
pub mod error;
pub mod journal;
pub mod login;
pub mod registry;
pub mod role;
pub mod router;
pub mod session;
pub mod view;

pub use context::NavigationContext;
pub use controller::{NavCommand, NavigationController, NavigationState};
pub use error::{LoginStepError, NavError};
pub use journal::{Journal, TransitionCause, TransitionRecord};
pub use login::{BackOutcome, LoginFlow, LoginStep};
pub use registry::{Collaborator, ContractError, Prop, ViewDescriptor, ViewProps};
pub use role::{Role, RoleClaim, RoleGroup};
pub use router::Resolution;
pub use session::{Contact, Session};
pub use view::ViewId;
