//! Tests for user controller endpoints.

mod get_users;

use super::*;
