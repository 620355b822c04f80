//! GraphQL schema: query and mutation roots over the book store

use super::types::{BookNode, GenreValue};
use crate::core::book::{BookPatch, NewBook};
use crate::core::error::BookshelfError;
use crate::core::service::BookService;
use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, ID, MaybeUndefined, Object, Result,
    Schema,
};
use std::sync::Arc;

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store as context data
pub fn build_schema(book_service: Arc<dyn BookService>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(book_service)
        .finish()
}

impl ErrorExtensions for BookshelfError {
    fn extend(&self) -> Error {
        let code = self.error_code();
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

fn books<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn BookService>> {
    ctx.data::<Arc<dyn BookService>>()
}

/// Nullable update argument: omitted keeps, `null` clears, a value replaces
fn patch_value<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

// ============================================================================
// Query Root
// ============================================================================

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All books in insertion order
    async fn get_books(&self, ctx: &Context<'_>) -> Result<Vec<BookNode>> {
        let books = books(ctx)?.list().await.map_err(|e| e.extend())?;
        Ok(books.into_iter().map(BookNode::from).collect())
    }

    /// Number of books on the shelf
    async fn get_books_count(&self, ctx: &Context<'_>) -> Result<usize> {
        books(ctx)?.count().await.map_err(|e| e.extend())
    }

    /// A single book, or null when the id is unknown
    async fn get_book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BookNode>> {
        let book = books(ctx)?.get(&id).await.map_err(|e| e.extend())?;
        Ok(book.map(BookNode::from))
    }
}

// ============================================================================
// Mutation Root
// ============================================================================

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book; fails with `BAD_USER_INPUT` when the title is taken
    ///
    /// An omitted or null `genre` is stored as `NONE`.
    #[allow(clippy::too_many_arguments)]
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
        isbn: Option<String>,
        publisher: String,
        genre: Option<GenreValue>,
        publish_year: Option<i32>,
        author_name: String,
        author_nationality: Option<String>,
    ) -> Result<BookNode> {
        let new_book = NewBook {
            title,
            description,
            isbn,
            publisher,
            genre: genre.unwrap_or_default().into(),
            publish_year,
            author_name,
            author_nationality,
        };

        let book = books(ctx)?
            .create(new_book)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.into())
    }

    /// Update the supplied fields of a book; null when the id is unknown
    #[allow(clippy::too_many_arguments)]
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        description: MaybeUndefined<String>,
        isbn: MaybeUndefined<String>,
        publisher: Option<String>,
        genre: Option<GenreValue>,
        publish_year: MaybeUndefined<i32>,
        author_name: Option<String>,
        author_nationality: MaybeUndefined<String>,
    ) -> Result<Option<BookNode>> {
        let patch = BookPatch {
            title,
            description: patch_value(description),
            isbn: patch_value(isbn),
            publisher,
            genre: genre.map(Into::into),
            publish_year: patch_value(publish_year),
            author_name,
            author_nationality: patch_value(author_nationality),
        };

        let book = books(ctx)?
            .update(&id, patch)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.map(BookNode::from))
    }

    /// Remove a book and return it; null when the id is unknown
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BookNode>> {
        let book = books(ctx)?.delete(&id).await.map_err(|e| e.extend())?;
        Ok(book.map(BookNode::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryBookService;

    #[test]
    fn test_sdl_declares_operations() {
        let schema = build_schema(Arc::new(InMemoryBookService::new()));
        let sdl = schema.sdl();

        for needle in [
            "getBooks: [Book!]!",
            "getBooksCount: Int!",
            "getBook(id: ID!): Book",
            "deleteBook(id: ID!): Book",
            "author: Author!",
            "enum Genre",
            "ROMANCE",
        ] {
            assert!(sdl.contains(needle), "missing `{}` in SDL:\n{}", needle, sdl);
        }
    }

    #[test]
    fn test_patch_value() {
        assert_eq!(patch_value::<i32>(MaybeUndefined::Undefined), None);
        assert_eq!(patch_value::<i32>(MaybeUndefined::Null), Some(None));
        assert_eq!(patch_value(MaybeUndefined::Value(0)), Some(Some(0)));
    }

    #[test]
    fn test_error_extension_code() {
        let err: BookshelfError = crate::core::error::BookError::DuplicateTitle {
            title: "Dune".to_string(),
        }
        .into();
        let gql = err.extend();

        assert_eq!(gql.message, "El título debe ser único");
        let server_error = gql.into_server_error(async_graphql::Pos { line: 1, column: 1 });
        let json = serde_json::to_value(server_error).unwrap();
        assert_eq!(json["extensions"]["code"], "BAD_USER_INPUT");
    }
}
