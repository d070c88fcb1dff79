//! Service layer for business logic.
//!
//! Services compose repositories into the operations exposed by the API: catalog reads shaped
//! into DTOs, user listing, and the favorites workflow with its validation rules. Every
//! favorites mutation runs inside a single database transaction.

pub mod catalog;
pub mod favorite;
pub mod user;
