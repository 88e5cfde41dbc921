//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::country::{Country, CountryName, Flags, Idd};
use crate::core::state::App;

/// Builds a minimal country with the given official name.
/// Codes are derived from the name so rows stay distinguishable.
pub fn country(official: &str) -> Country {
    let upper: String = official
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let cca2: String = upper.chars().take(2).collect();
    let cca3: String = upper.chars().take(3).collect();

    Country {
        name: CountryName {
            official: official.to_string(),
            common: official.to_string(),
            native_name: Default::default(),
        },
        flags: Flags {
            png: Some(format!("https://flagcdn.com/w320/{}.png", cca2.to_lowercase())),
            ..Default::default()
        },
        cca2,
        cca3,
        alt_spellings: Vec::new(),
        idd: Idd::default(),
    }
}

/// `count` countries named "Country 001", "Country 002", ...
pub fn numbered_countries(count: usize) -> Vec<Country> {
    (1..=count).map(|i| country(&format!("Country {i:03}"))).collect()
}

/// Creates a test App with default settings and an empty catalog.
pub fn test_app() -> App {
    App::new(false)
}

/// Creates a test App whose catalog has already been loaded.
pub fn loaded_app(countries: Vec<Country>) -> App {
    let mut app = test_app();
    update(&mut app, Action::CatalogLoaded(countries));
    app
}

/// Official names of the working view, in order.
pub fn view_names(app: &App) -> Vec<String> {
    app.view_countries()
        .map(|c| c.official_name().to_string())
        .collect()
}
