use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder configuring which entity tables exist in a test database.
///
/// Chain `with_table` calls (or use `with_directory_tables` for the whole
/// schema), then `build()` to get a `TestContext` with the tables created.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(Server)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements derived from entity models, executed in
    /// insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for the given entity to the schema.
    ///
    /// The statement is generated with SQLite syntax and runs at `build()`
    /// time. Add tables in dependency order so foreign key targets exist
    /// first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the server directory needs, in dependency order:
    /// user, category, server, server_member.
    pub fn with_directory_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Server)
            .with_table(ServerMember)
    }

    /// Connects to a fresh in-memory SQLite database and creates the
    /// configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
