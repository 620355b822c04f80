//! # Bookshelf
//!
//! A GraphQL API offering CRUD operations over an in-memory shelf of books.
//!
//! ## Features
//!
//! - **Typed schema**: `Book`, `Author` and `Genre` with `getBooks`,
//!   `getBooksCount`, `getBook`, `addBook`, `updateBook` and `deleteBook`
//! - **Ordered store**: books are listed in insertion order
//! - **Unique titles**: `addBook` rejects a taken title with `BAD_USER_INPUT`
//! - **Null, not errors**: unknown ids resolve to `null`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookshelf::prelude::*;
//!
//! let schema = build_schema(Arc::new(InMemoryBookService::seeded()));
//! let response = schema.execute("{ getBooksCount }").await;
//!
//! // Or serve it over HTTP
//! ServerBuilder::new()
//!     .with_config(BookshelfConfig::default())
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Author, Book, BookError, BookPatch, BookService, BookshelfError, ConfigError, Genre,
        NewBook, StorageError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryBookService;

    // === Config ===
    pub use crate::config::{BookshelfConfig, GraphQLConfig, ServerConfig, StoreConfig};

    // === Server ===
    pub use crate::server::exposure::graphql::{BookshelfSchema, build_schema};
    pub use crate::server::{GraphQLExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
