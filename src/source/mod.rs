pub mod provider;
pub mod providers;

pub use provider::{CatalogSource, SourceError};
pub use providers::{FileSource, RestCountriesSource};
