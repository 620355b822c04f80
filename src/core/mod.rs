//! Core domain: book model, store trait and typed errors

pub mod book;
pub mod error;
pub mod service;

pub use book::{Author, Book, BookPatch, Genre, NewBook};
pub use error::{BookError, BookshelfError, ConfigError, StorageError};
pub use service::BookService;
