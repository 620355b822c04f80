//! GraphQL output types
//!
//! Thin wrappers over the domain model so the core stays free of GraphQL
//! derives.

use crate::core::book::{Author, Book};
use async_graphql::{Enum, ID, Object, SimpleObject};

/// Literary genre; `NONE` means unset
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[graphql(name = "Genre", remote = "crate::core::book::Genre")]
pub enum GenreValue {
    #[default]
    None,
    Fiction,
    Mystery,
    Fantasy,
    Romance,
}

/// Author of a book, derived from the book's own fields
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Author")]
pub struct AuthorNode {
    pub name: String,
    pub nationality: Option<String>,
}

impl From<Author> for AuthorNode {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            nationality: author.nationality,
        }
    }
}

/// A book on the shelf
pub struct BookNode(pub Book);

impl From<Book> for BookNode {
    fn from(book: Book) -> Self {
        Self(book)
    }
}

#[Object(name = "Book")]
impl BookNode {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn isbn(&self) -> Option<&str> {
        self.0.isbn.as_deref()
    }

    async fn publisher(&self) -> &str {
        &self.0.publisher
    }

    async fn genre(&self) -> GenreValue {
        self.0.genre.into()
    }

    async fn publish_year(&self) -> Option<i32> {
        self.0.publish_year
    }

    async fn author_name(&self) -> &str {
        &self.0.author_name
    }

    async fn author_nationality(&self) -> Option<&str> {
        self.0.author_nationality.as_deref()
    }

    /// Computed from `authorName` and `authorNationality`
    async fn author(&self) -> AuthorNode {
        self.0.author().into()
    }
}
