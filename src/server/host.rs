//! Server host for transport-agnostic API exposure
//!
//! The host holds the state every exposure needs (the book store and the
//! configuration) and is shared behind an `Arc` by all routers.

use crate::config::BookshelfConfig;
use crate::core::service::BookService;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(
///     Arc::new(InMemoryBookService::seeded()),
///     BookshelfConfig::default(),
/// ));
/// let graphql_app = GraphQLExposure::build_router(host)?;
/// ```
pub struct ServerHost {
    /// Service configuration
    pub config: Arc<BookshelfConfig>,

    /// The book store shared by every request
    pub book_service: Arc<dyn BookService>,
}

impl ServerHost {
    pub fn new(book_service: Arc<dyn BookService>, config: BookshelfConfig) -> Self {
        Self {
            config: Arc::new(config),
            book_service,
        }
    }
}
