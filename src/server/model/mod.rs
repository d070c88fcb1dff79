//! Server application models and type definitions.
//!
//! This module contains the application state injected into every handler, type aliases for the
//! SeaORM entity models, the loaded records which carry a catalog row together with its related
//! rows, and the favorite target used by the favorites service.

pub mod app;
pub mod catalog;
pub mod db;
pub mod favorite;
