//! # Core Application Logic
//!
//! This module contains tick's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (task store)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `TaskList` store and the `App` struct — all application
//!   state in one place
//! - [`action`]: the `Action` enum and `update()` — everything that can
//!   happen in the app
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod state;
