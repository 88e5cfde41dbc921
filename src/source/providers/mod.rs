pub mod file;
pub mod rest_countries;

pub use file::FileSource;
pub use rest_countries::RestCountriesSource;
