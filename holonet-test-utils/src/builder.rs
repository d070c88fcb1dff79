//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the test database before execution.
//! Tables are queued by chaining methods and created during the final `build()` call.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Tests which only touch one table create just that table from its entity with
/// [`with_table`](TestBuilder::with_table). Tests which need relations, foreign keys or the
/// unique favorite indexes use [`with_all_tables`](TestBuilder::with_all_tables), which runs the
/// real migrations.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    run_migrations: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            run_migrations: false,
        }
    }

    /// Create every table, foreign key and index by running the migrations.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_all_tables(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Starship)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context by creating all configured tables.
    ///
    /// Migrations run first when requested, then any custom tables are created.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connecting, migrating or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.run_migrations {
            Migrator::up(&context.db, None).await?;
        }

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
