//! Server module: host, builder and HTTP exposures
//!
//! `ServerBuilder` assembles a `ServerHost` and turns it into an axum router
//! carrying:
//! - the GraphQL endpoint, SDL export and playground
//! - a `/health` route

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::GraphQLExposure;
pub use host::ServerHost;
