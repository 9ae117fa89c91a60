use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_guild_tables()
///     .with_table(entity::prelude::RedemptionCode)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the per-guild configuration tables: GuildConfig, GuildSettings and GuildLanguage.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_guild_tables(self) -> Self {
        self.with_table(GuildConfig)
            .with_table(GuildSettings)
            .with_table(GuildLanguage)
    }

    /// Adds the livestream tables: LivestreamTracking and LivestreamCode.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_livestream_tables(self) -> Self {
        self.with_table(LivestreamTracking)
            .with_table(LivestreamCode)
    }

    /// Adds every table used by the bot.
    ///
    /// Equivalent to the code table plus `with_guild_tables()` and `with_livestream_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_table(RedemptionCode)
            .with_guild_tables()
            .with_livestream_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
