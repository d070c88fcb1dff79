//! Server application core modules.
//!
//! This module contains all server-side functionality for Holonet: configuration, HTTP routing,
//! request handlers, services, database repositories and error handling. Handlers receive the
//! database pool through `AppState`; nothing is held in global state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
