//! Local JSON dump source, for offline use. The file holds the same array
//! the REST endpoint returns.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::core::country::Country;
use crate::source::provider::parse_catalog;
use crate::source::{CatalogSource, SourceError};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        info!("Reading country catalog from {}", self.path.display());
        let body = tokio::fs::read(&self.path).await?;
        parse_catalog(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":{{"official":"Kingdom of Belgium"}},"cca2":"BE","cca3":"BEL"}},
               {{"name":{{"official":"Republic of Chad"}},"cca2":"TD","cca3":"TCD"}}]"#
        )
        .unwrap();

        let countries = FileSource::new(file.path()).fetch_all().await.unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.official_name()).collect();
        assert_eq!(names, vec!["Kingdom of Belgium", "Republic of Chad"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("absent.json")).fetch_all().await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = FileSource::new(file.path()).fetch_all().await;
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }
}
