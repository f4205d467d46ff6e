//! Core UI functionality for the listkeeper application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: action definitions, the base component trait, and event
//! handling. Components implement [`Component`] for consistent rendering,
//! actions describe the state transitions they request, and events are
//! produced by the [`EventHandler`].

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
