//! Service trait for book storage

use crate::core::book::{Book, BookPatch, NewBook};
use crate::core::error::Result;
use async_trait::async_trait;

/// CRUD operations over an ordered collection of books
///
/// Lookups by id return `Ok(None)` when nothing matches; only rule
/// violations and backend failures are errors. Implementations must keep
/// insertion order and run each mutation's check-then-write atomically.
#[async_trait]
pub trait BookService: Send + Sync {
    /// All books in insertion order
    async fn list(&self) -> Result<Vec<Book>>;

    /// Number of stored books
    async fn count(&self) -> Result<usize>;

    /// Get a book by id
    async fn get(&self, id: &str) -> Result<Option<Book>>;

    /// Append a new book
    ///
    /// Fails with [`BookError::DuplicateTitle`](crate::core::error::BookError)
    /// when the title is already taken; the store is left untouched.
    async fn create(&self, new_book: NewBook) -> Result<Book>;

    /// Merge a patch into the book with this id, keeping its position
    ///
    /// Titles are not re-checked for uniqueness here.
    async fn update(&self, id: &str, patch: BookPatch) -> Result<Option<Book>>;

    /// Remove the book with this id and return it
    async fn delete(&self, id: &str) -> Result<Option<Book>>;
}
