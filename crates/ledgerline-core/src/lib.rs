//! Ledgerline Core - Shared abstractions for the statement import flow
//!
//! This crate provides the types every other Ledgerline crate depends on.
//! It defines:
//!
//! - `ImportError` - Recoverable failures of the intake and wizard steps
//! - `Notification` / `Notifier` - Toast requests and the collaborator that renders them
//! - `Navigator` - Page-level navigation intents
//! - `SampleFileSource` - Fire-and-forget sample statement download

mod collaborators;
mod error;
mod notification;

pub use collaborators::*;
pub use error::*;
pub use notification::*;
