//! Test fixture modules for database row creation.
//!
//! - `catalog` - Catalog rows (planets, people, films and their reference tables)
//! - `user` - User accounts
//! - `favorite` - Favorite planets and people of a user
//! - `factory` - In-memory models for tests which do not touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
