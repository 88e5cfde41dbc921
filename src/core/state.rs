//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Vec<Country>          // fetched once, never mutated after
//! ├── view: Vec<usize>               // working view, indices into catalog
//! ├── search_term: String            // current filter
//! ├── sort_order: SortOrder          // direction of the next sort
//! ├── page: usize                    // 1-based, not clamped
//! ├── selected: Option<usize>        // catalog index shown in the overlay
//! ├── load_status: LoadStatus        // Pending → Loaded | Failed
//! ├── status_message: String         // title bar text
//! └── reset_page_on_filter: bool     // reset to page 1 on search/sort
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::ops::Range;

use super::country::Country;
use super::pagination::{PAGE_SIZE, page_count, page_range, page_slice};
use super::query::SortOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

pub struct App {
    pub catalog: Vec<Country>,
    pub view: Vec<usize>,
    pub search_term: String,
    pub sort_order: SortOrder,
    pub page: usize,
    pub selected: Option<usize>,
    pub load_status: LoadStatus,
    pub status_message: String,
    pub reset_page_on_filter: bool,
}

impl App {
    pub fn new(reset_page_on_filter: bool) -> Self {
        Self {
            catalog: Vec::new(),
            view: Vec::new(),
            search_term: String::new(),
            sort_order: SortOrder::default(),
            page: 1,
            selected: None,
            load_status: LoadStatus::Pending,
            status_message: String::from("Loading countries..."),
            reset_page_on_filter,
        }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.view.len(), PAGE_SIZE)
    }

    /// Working-view positions visible on the current page.
    pub fn page_range(&self) -> Range<usize> {
        page_range(self.page, self.view.len(), PAGE_SIZE)
    }

    pub fn page_countries(&self) -> impl Iterator<Item = &Country> {
        page_slice(&self.view, self.page, PAGE_SIZE)
            .iter()
            .map(|&i| &self.catalog[i])
    }

    pub fn view_countries(&self) -> impl Iterator<Item = &Country> {
        self.view.iter().map(|&i| &self.catalog[i])
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    /// The overlay is shown exactly when something is selected.
    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Pending
    }
}
