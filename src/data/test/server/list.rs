use super::*;

/// Tests listing with no filters applied.
///
/// Verifies that every server is returned when no parameters are set.
///
/// Expected: Ok(all servers)
#[tokio::test]
async fn returns_all_servers_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _server) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, user.id, category.id).await?;
    factory::server::create_server(db, user.id, category.id).await?;

    let repo = ServerRepository::new(db);
    let servers = repo.list(&params()).await?;

    assert_eq!(servers.len(), 3);

    Ok(())
}

/// Tests listing returns servers ordered by id ascending.
///
/// Expected: Ok(servers) with strictly increasing ids
#[tokio::test]
async fn orders_servers_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _server) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, user.id, category.id).await?;
    factory::server::create_server(db, user.id, category.id).await?;

    let repo = ServerRepository::new(db);
    let servers = repo.list(&params()).await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();

    assert_eq!(ids, sorted);

    Ok(())
}

/// Tests filtering by category name.
///
/// Verifies that only servers whose category name matches exactly are
/// returned.
///
/// Expected: Ok(servers) all in the requested category
#[tokio::test]
async fn filters_by_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let gaming = factory::category::CategoryFactory::new(db)
        .name("gaming")
        .build()
        .await?;
    let music = factory::category::CategoryFactory::new(db)
        .name("music")
        .build()
        .await?;

    let in_gaming = factory::server::create_server(db, user.id, gaming.id).await?;
    factory::server::create_server(db, user.id, music.id).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.category = Some("gaming".to_string());

    let servers = repo.list(&filter).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, in_gaming.id);
    assert_eq!(servers[0].category_id, gaming.id);

    Ok(())
}

/// Tests that a category name with no servers yields an empty result.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.category = Some("does-not-exist".to_string());

    let servers = repo.list(&filter).await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests filtering by membership.
///
/// Verifies that only servers the given user is a member of are returned,
/// and that ownership alone does not count as membership.
///
/// Expected: Ok(servers) the user belongs to
#[tokio::test]
async fn filters_by_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _category, joined) = factory::helpers::create_server_with_dependencies(db).await?;
    let (_category, not_joined) = factory::helpers::create_server_for_user(db, &owner).await?;

    let member = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, joined.id, member.id).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.member_id = Some(member.id);

    let servers = repo.list(&filter).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, joined.id);
    assert_ne!(servers[0].id, not_joined.id);

    Ok(())
}

/// Tests the result-count limit.
///
/// Verifies that `qty` truncates to the first N servers in id order.
///
/// Expected: Ok(first 2 servers by id)
#[tokio::test]
async fn limits_results_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first) = factory::helpers::create_server_with_dependencies(db).await?;
    let second = factory::server::create_server(db, user.id, category.id).await?;
    factory::server::create_server(db, user.id, category.id).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.qty = Some(2);

    let servers = repo.list(&filter).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, first.id);
    assert_eq!(servers[1].id, second.id);

    Ok(())
}

/// Tests that a zero limit yields an empty result.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn qty_zero_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.qty = Some(0);

    let servers = repo.list(&filter).await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests combining the category and membership filters.
///
/// Expected: Ok(servers) in the category that the user also belongs to
#[tokio::test]
async fn combines_category_and_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let gaming = factory::category::CategoryFactory::new(db)
        .name("gaming")
        .build()
        .await?;
    let music = factory::category::CategoryFactory::new(db)
        .name("music")
        .build()
        .await?;

    let gaming_joined = factory::server::create_server(db, owner.id, gaming.id).await?;
    let music_joined = factory::server::create_server(db, owner.id, music.id).await?;
    factory::server::create_server(db, owner.id, gaming.id).await?;

    let member = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, gaming_joined.id, member.id).await?;
    factory::server_member::add_member(db, music_joined.id, member.id).await?;

    let repo = ServerRepository::new(db);
    let mut filter = params();
    filter.category = Some("gaming".to_string());
    filter.member_id = Some(member.id);

    let servers = repo.list(&filter).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, gaming_joined.id);

    Ok(())
}
