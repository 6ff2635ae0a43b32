//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// Servers require an existing owner and category; pass their ids to `new`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, user.id, category.id)
///     .name("Rustaceans")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    owner_id: i32,
    category_id: i32,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"server_{id}"` where id is auto-incremented
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Id of an existing user owning the server
    /// - `category_id` - Id of an existing category
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("server_{}", id),
            description: None,
            owner_id,
            category_id,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Inserts the server into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            owner_id: ActiveValue::Set(self.owner_id),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values owned by `owner_id` in `category_id`.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, category_id).build().await
}
