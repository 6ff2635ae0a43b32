use super::*;

/// Tests finding a user by username when the user exists.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("bob").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, created.id);

    Ok(())
}

/// Tests that username matching is exact.
///
/// Expected: Ok(None) for a near-miss username
#[tokio::test]
async fn matches_username_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("bobby").await?;

    assert!(user.is_none());

    Ok(())
}
