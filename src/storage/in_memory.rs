//! In-memory implementation of BookService

use crate::config::StoreConfig;
use crate::core::book::{Book, BookPatch, NewBook};
use crate::core::error::{BookError, ConfigError, Result, StorageError};
use crate::core::service::BookService;
use crate::storage::seed;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory book store
///
/// Books live in a `Vec` so insertion order is the listing order. Every
/// mutation holds the write lock for its whole scan-then-edit body.
#[derive(Clone)]
pub struct InMemoryBookService {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding these books, in order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Create a store holding the built-in dataset
    pub fn seeded() -> Self {
        Self::with_books(seed::default_books())
    }

    /// Create a store as described by the `store` config section
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let mut books = if config.seed {
            seed::default_books()
        } else {
            Vec::new()
        };

        if let Some(path) = &config.seed_file {
            let extra = seed::books_from_yaml_file(path)?;
            let count = extra.len();
            for book in extra {
                Self::check_seed_record(&books, &book, path)?;
                books.push(book);
            }
            tracing::info!(path = %path, count, "loaded seed file");
        }

        tracing::debug!(count = books.len(), "in-memory book store ready");
        Ok(Self::with_books(books))
    }

    /// Seed records obey the same id and title uniqueness as `create`
    fn check_seed_record(books: &[Book], book: &Book, path: &str) -> Result<(), ConfigError> {
        let conflict = if books.iter().any(|b| b.id == book.id) {
            Some(("id", &book.id))
        } else if books.iter().any(|b| b.title == book.title) {
            Some(("title", &book.title))
        } else {
            None
        };

        match conflict {
            Some((field, value)) => Err(ConfigError::InvalidValue {
                field: format!("store.seed_file.{}", field),
                value: value.clone(),
                message: format!("{} is already on the shelf (seed file {})", field, path),
            }),
            None => Ok(()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| StorageError::LockPoisoned { operation: "read" }.into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| StorageError::LockPoisoned { operation: "write" }.into())
    }
}

impl Default for InMemoryBookService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookService for InMemoryBookService {
    async fn list(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    async fn get(&self, id: &str) -> Result<Option<Book>> {
        Ok(self.read()?.iter().find(|book| book.id == id).cloned())
    }

    async fn create(&self, new_book: NewBook) -> Result<Book> {
        let mut books = self.write()?;

        if books.iter().any(|book| book.title == new_book.title) {
            tracing::warn!(title = %new_book.title, "rejected book with duplicate title");
            return Err(BookError::DuplicateTitle {
                title: new_book.title,
            }
            .into());
        }

        let book = Book::create(new_book);
        books.push(book.clone());

        tracing::info!(book_id = %book.id, title = %book.title, "book added");
        Ok(book)
    }

    async fn update(&self, id: &str, patch: BookPatch) -> Result<Option<Book>> {
        let mut books = self.write()?;

        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            tracing::debug!(book_id = %id, "update skipped, book not found");
            return Ok(None);
        };

        if patch.is_empty() {
            tracing::debug!(book_id = %id, "update carried no fields");
        } else {
            book.apply(patch);
            tracing::info!(book_id = %id, "book updated");
        }

        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Book>> {
        let mut books = self.write()?;

        let Some(index) = books.iter().position(|book| book.id == id) else {
            tracing::debug!(book_id = %id, "delete skipped, book not found");
            return Ok(None);
        };

        let removed = books.remove(index);

        tracing::info!(book_id = %id, title = %removed.title, "book deleted");
        Ok(Some(removed))
    }
}
