//! Seed datasets for the in-memory store

use crate::core::book::{Book, Genre};
use crate::core::error::ConfigError;

/// Id of the "City of Glass" seed record
pub const CITY_OF_GLASS_ID: &str = "35b19ead-3aa9-415e-a46d-6621e1604119";

/// Id of "The Awakening" seed record
pub const THE_AWAKENING_ID: &str = "0d1b1f56-7c3e-4a8e-9f2b-6c4e1a5d3b90";

/// The built-in dataset, in shelf order
pub fn default_books() -> Vec<Book> {
    vec![
        Book {
            id: THE_AWAKENING_ID.to_string(),
            title: "The Awakening".to_string(),
            description: Some(
                "A woman's struggle with the roles expected of her in turn-of-the-century Louisiana."
                    .to_string(),
            ),
            isbn: Some("978-0486277868".to_string()),
            publisher: "Herbert S. Stone & Co.".to_string(),
            genre: Genre::Fiction,
            publish_year: Some(1899),
            author_name: "Kate Chopin".to_string(),
            author_nationality: Some("American".to_string()),
        },
        Book {
            id: CITY_OF_GLASS_ID.to_string(),
            title: "City of Glass".to_string(),
            description: Some(
                "A crime writer is drawn into a case after a wrong-number call.".to_string(),
            ),
            isbn: Some("978-0140097313".to_string()),
            publisher: "Sun & Moon Press".to_string(),
            genre: Genre::Mystery,
            publish_year: Some(1985),
            author_name: "Paul Auster".to_string(),
            author_nationality: Some("American".to_string()),
        },
    ]
}

/// Parse a YAML list of complete book records
pub fn books_from_yaml_str(yaml: &str, file: Option<&str>) -> Result<Vec<Book>, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
        file: file.map(str::to_string),
        message: e.to_string(),
    })
}

/// Load a YAML seed file
pub fn books_from_yaml_file(path: &str) -> Result<Vec<Book>, ConfigError> {
    let content = ConfigError::read_file(path)?;
    books_from_yaml_str(&content, Some(path))
}
