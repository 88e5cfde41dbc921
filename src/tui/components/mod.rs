//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: catalog counts, sort direction, status
//! - `Pager`: the row of page buttons
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and react to events:
//! - `SearchBox`: the filter input; emits `SearchEvent`
//! - `CountryList`: rows of the current page with a highlight
//! - `Detail`: the overlay for one country, with scroll state
//!
//! Stateful components split into a persistent `…State` that lives in
//! `TuiState` and a transient wrapper built each frame with borrowed data.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── search_box.rs
//! ├── country_list.rs
//! ├── pager.rs
//! └── detail.rs
//! ```

pub mod country_list;
pub mod detail;
pub mod pager;
pub mod search_box;
mod title_bar;

pub use country_list::{CountryList, CountryListState};
pub use detail::{Detail, DetailEvent, DetailState};
pub use pager::Pager;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
