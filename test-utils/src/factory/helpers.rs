//! Cross-factory helpers: unique id generation and dependency wiring.

use sea_orm::{DatabaseConnection, DbErr};

// Shared across all factories so generated names never collide within a test
// binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next unique counter value for default test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with its owner user and category.
///
/// Everything gets default values; reach for the individual factories when a
/// test needs to control a field.
///
/// # Returns
/// - `Ok((user, category, server))` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, user.id, category.id).await?;

    Ok((user, category, server))
}

/// Creates a server owned by the given user, with a fresh category.
///
/// # Returns
/// - `Ok((category, server))` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::category::Model, entity::server::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, user.id, category.id).await?;

    Ok((category, server))
}
