//! JSON shapes returned and accepted by the HTTP API.
//!
//! Each stored entity has exactly one public shape here, along with a pure mapping from the
//! database model (or loaded record) to that shape so it can be tested without HTTP.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
