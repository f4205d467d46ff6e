//! Listkeeper - a terminal list-of-lists manager
//!
//! This library implements a small interactive application for keeping named
//! lists of text items: create and delete lists, reorder them, add and remove
//! items, and filter everything by name or content. State lives in memory for
//! the duration of a session and is rendered with a Ratatui interface.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`store`] - The in-memory list-of-lists data model
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - Logging utilities

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory data model: lists, items, ordering and filtering
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core model types for convenient access
pub use store::{CreateListError, Item, ListStore};
