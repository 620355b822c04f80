//! Book domain model
//!
//! A [`Book`] stores its author denormalized (`author_name`,
//! `author_nationality`); [`Author`] is only ever a computed view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Literary genre of a book
///
/// `None` is the unset sentinel and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    #[default]
    None,
    Fiction,
    Mystery,
    Fantasy,
    Romance,
}

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// System-assigned identifier, immutable once created
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub publisher: String,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default)]
    pub publish_year: Option<i32>,
    pub author_name: String,
    #[serde(default)]
    pub author_nationality: Option<String>,
}

/// Author view derived from a book's denormalized fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub nationality: Option<String>,
}

/// Input for creating a book; every field except the id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub publisher: String,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default)]
    pub publish_year: Option<i32>,
    pub author_name: String,
    #[serde(default)]
    pub author_nationality: Option<String>,
}

/// Partial update of a book
///
/// A `None` field is left untouched. Any supplied value overwrites the stored
/// one, including empty strings and zero. For nullable fields `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub isbn: Option<Option<String>>,
    pub publisher: Option<String>,
    pub genre: Option<Genre>,
    pub publish_year: Option<Option<i32>>,
    pub author_name: Option<String>,
    pub author_nationality: Option<Option<String>>,
}

impl Book {
    /// Build a new record from creation input, assigning a fresh id
    pub fn create(new_book: NewBook) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: new_book.title,
            description: new_book.description,
            isbn: new_book.isbn,
            publisher: new_book.publisher,
            genre: new_book.genre,
            publish_year: new_book.publish_year,
            author_name: new_book.author_name,
            author_nationality: new_book.author_nationality,
        }
    }

    /// Project the denormalized author fields
    pub fn author(&self) -> Author {
        Author {
            name: self.author_name.clone(),
            nationality: self.author_nationality.clone(),
        }
    }

    /// Merge a patch into this record; the id never changes
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = isbn;
        }
        if let Some(publisher) = patch.publisher {
            self.publisher = publisher;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(publish_year) = patch.publish_year {
            self.publish_year = publish_year;
        }
        if let Some(author_name) = patch.author_name {
            self.author_name = author_name;
        }
        if let Some(author_nationality) = patch.author_nationality {
            self.author_nationality = author_nationality;
        }
    }
}

impl BookPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::create(NewBook {
            title: "Ficciones".to_string(),
            description: Some("Short stories".to_string()),
            isbn: Some("978-0802130303".to_string()),
            publisher: "Sur".to_string(),
            genre: Genre::Fantasy,
            publish_year: Some(1944),
            author_name: "Jorge Luis Borges".to_string(),
            author_nationality: Some("Argentine".to_string()),
        })
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let a = sample();
        let b = sample();

        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "Ficciones");
        assert_eq!(a.publish_year, Some(1944));
    }

    #[test]
    fn test_author_projection() {
        let book = sample();
        let author = book.author();

        assert_eq!(author.name, "Jorge Luis Borges");
        assert_eq!(author.nationality.as_deref(), Some("Argentine"));
    }

    #[test]
    fn test_apply_title_only() {
        let mut book = sample();
        let before = book.clone();

        book.apply(BookPatch {
            title: Some("El Aleph".to_string()),
            ..Default::default()
        });

        assert_eq!(book.title, "El Aleph");
        assert_eq!(book.id, before.id);
        assert_eq!(book.description, before.description);
        assert_eq!(book.genre, before.genre);
        assert_eq!(book.author_name, before.author_name);
    }

    #[test]
    fn test_apply_overwrites_empty_and_zero() {
        let mut book = sample();

        book.apply(BookPatch {
            publisher: Some(String::new()),
            publish_year: Some(Some(0)),
            ..Default::default()
        });

        assert_eq!(book.publisher, "");
        assert_eq!(book.publish_year, Some(0));
    }

    #[test]
    fn test_apply_clears_nullable_fields() {
        let mut book = sample();

        book.apply(BookPatch {
            description: Some(None),
            author_nationality: Some(None),
            ..Default::default()
        });

        assert_eq!(book.description, None);
        assert_eq!(book.author_nationality, None);
        assert_eq!(book.isbn.as_deref(), Some("978-0802130303"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut book = sample();
        let before = book.clone();
        let patch = BookPatch::default();

        assert!(patch.is_empty());
        book.apply(patch);
        assert_eq!(book, before);
    }

    #[test]
    fn test_genre_serializes_screaming_case() {
        let yaml = serde_yaml::to_string(&Genre::Mystery).unwrap();
        assert_eq!(yaml.trim(), "MYSTERY");

        let genre: Genre = serde_yaml::from_str("NONE").unwrap();
        assert_eq!(genre, Genre::None);
    }
}
