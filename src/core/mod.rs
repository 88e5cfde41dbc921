//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Source   │
//!             │  Adapter   │          │  (loader)  │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`country`]: Country records as delivered by the upstream API
//! - [`query`]: Search filter and name sort over the working view
//! - [`pagination`]: Page math and the windowed pager
//! - [`format`]: Display strings for the detail overlay
//! - [`config`]: Settings file, env vars and CLI overrides
//!
//! `config` is the one exception to "no I/O": it reads the settings file
//! once at startup, before any state exists.

pub mod action;
pub mod config;
pub mod country;
pub mod format;
pub mod pagination;
pub mod query;
pub mod state;
