//! # Core Application Logic
//!
//! This module contains Grocer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ListStore (the list) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Tests    │
//!            │  Adapter   │            │ (closures  │
//!            │ (ratatui)  │            │  confirm)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, `ItemId`, `Quantity`
//! - [`list`]: `ListStore`, the only mutation surface for the list
//! - [`stats`]: derived counts and the footer message
//! - [`confirm`]: the injected yes/no capability used by `clear`
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod confirm;
pub mod item;
pub mod list;
pub mod state;
pub mod stats;

pub use confirm::Confirm;
pub use item::{Item, ItemId, Quantity};
pub use list::{ClearOutcome, ListError, ListStore};
pub use stats::Stats;
