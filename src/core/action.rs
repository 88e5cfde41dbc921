//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User types in the search box? That's `Action::Search(term)`.
//! The catalog arrives? That's `Action::CatalogLoaded(countries)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place and tells the adapter if anything
//! needs to happen outside the core. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info, warn};

use super::country::Country;
use super::query::{filter_indices, sort_indices};
use super::state::{App, LoadStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogLoaded(Vec<Country>),
    CatalogFailed(String),
    Search(String),
    ToggleSort,
    GoToPage(usize),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Open the overlay for the entry at this absolute working-view position.
    Select(usize),
    CloseDetail,
    Quit,
}

/// Work the adapter must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(countries) => {
            if app.load_status != LoadStatus::Pending {
                warn!("Ignoring duplicate catalog load ({} entries)", countries.len());
                return Effect::None;
            }
            info!("Catalog loaded: {} countries", countries.len());
            app.catalog = countries;
            app.view = (0..app.catalog.len()).collect();
            app.load_status = LoadStatus::Loaded;
            app.status_message = format!("{} countries", app.catalog.len());
        }
        Action::CatalogFailed(reason) => {
            warn!("Catalog load failed: {reason}");
            app.load_status = LoadStatus::Failed(reason);
            app.status_message = String::from("failed to load countries");
        }
        Action::Search(term) => {
            app.view = filter_indices(&app.catalog, &term);
            debug!("Search {:?} matched {} countries", term, app.view.len());
            app.search_term = term;
            if app.reset_page_on_filter {
                app.page = 1;
            }
        }
        Action::ToggleSort => {
            app.view = sort_indices(&app.catalog, &app.view, app.sort_order);
            debug!("Sorted {} countries {:?}", app.view.len(), app.sort_order);
            app.sort_order = app.sort_order.flipped();
            if app.reset_page_on_filter {
                app.page = 1;
            }
        }
        Action::GoToPage(page) => {
            app.page = page.max(1);
        }
        Action::NextPage => {
            if app.page < app.page_count() {
                app.page += 1;
            }
        }
        Action::PrevPage => {
            if app.page > 1 {
                app.page -= 1;
            }
        }
        Action::FirstPage => {
            app.page = 1;
        }
        Action::LastPage => {
            app.page = app.page_count().max(1);
        }
        Action::Select(position) => match app.view.get(position) {
            Some(&index) => {
                debug!("Selected {}", app.catalog[index].official_name());
                app.selected = Some(index);
            }
            None => warn!(
                "Select out of range: position {position}, view has {}",
                app.view.len()
            ),
        },
        Action::CloseDetail => {
            app.selected = None;
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
