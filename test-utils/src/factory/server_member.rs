//! Factory helpers for server membership rows.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Adds a user to a server's member set.
///
/// Inserts a row in the `server_member` join table linking the user to the
/// server. The server and user must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Id of an existing server
/// - `user_id` - Id of an existing user
///
/// # Returns
/// - `Ok(Model)` - The created membership row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate membership)
pub async fn add_member(
    db: &DatabaseConnection,
    server_id: i32,
    user_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    // Insert without RETURNING: the composite primary key has no
    // auto-increment column to read back.
    entity::prelude::ServerMember::insert(entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        user_id: ActiveValue::Set(user_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(entity::server_member::Model { server_id, user_id })
}

/// Adds several users to a server's member set.
pub async fn add_members(
    db: &DatabaseConnection,
    server_id: i32,
    user_ids: &[i32],
) -> Result<(), DbErr> {
    for user_id in user_ids {
        add_member(db, server_id, *user_id).await?;
    }

    Ok(())
}
