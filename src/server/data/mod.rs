//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over SeaORM queries, organized by domain (catalog,
//! favorites and users). Every repository is generic over `ConnectionTrait` so the same code runs
//! against the connection pool or inside a request-scoped transaction.

pub mod catalog;
pub mod favorite;
pub mod user;
