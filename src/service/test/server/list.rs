use super::*;

/// Tests the parameterless list.
///
/// Verifies that all servers are returned, unfiltered and without member
/// count annotation.
///
/// Expected: Ok(all servers) with num_members absent
#[tokio::test]
async fn returns_all_servers_unannotated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _server) =
        factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, user.id, category.id).await?;

    let service = ServerListService::new(db);
    let servers = service.list(params()).await?;

    assert_eq!(servers.len(), 2);
    assert!(servers.iter().all(|s| s.num_members.is_none()));

    Ok(())
}

/// Tests member count annotation.
///
/// Verifies that each record carries its true member cardinality, including
/// zero for servers without members.
///
/// Expected: Ok(servers) with exact num_members
#[tokio::test]
async fn annotates_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, busy) = factory::helpers::create_server_with_dependencies(db).await?;
    let empty = factory::server::create_server(db, owner.id, category.id).await?;

    for _ in 0..2 {
        let member = factory::user::create_user(db).await?;
        factory::server_member::add_member(db, busy.id, member.id).await?;
    }

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.with_num_members = true;

    let servers = service.list(list_params).await?;

    let busy_item = servers.iter().find(|s| s.id == busy.id).unwrap();
    let empty_item = servers.iter().find(|s| s.id == empty.id).unwrap();

    assert_eq!(busy_item.num_members, Some(2));
    assert_eq!(empty_item.num_members, Some(0));

    Ok(())
}

/// Tests that the member count is the true cardinality even when the list
/// is filtered to one member's servers.
///
/// Expected: Ok(server) with num_members = 3, not 1
#[tokio::test]
async fn member_filter_does_not_skew_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _category, server) =
        factory::helpers::create_server_with_dependencies(db).await?;

    let first = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, server.id, first.id).await?;
    for _ in 0..2 {
        let member = factory::user::create_user(db).await?;
        factory::server_member::add_member(db, server.id, member.id).await?;
    }

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.member_id = Some(first.id);
    list_params.with_num_members = true;

    let servers = service.list(list_params).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].num_members, Some(3));

    Ok(())
}

/// Tests the single-id lookup.
///
/// Expected: Ok(exactly one server) with the requested id
#[tokio::test]
async fn finds_single_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, wanted) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, user.id, category.id).await?;

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.server_id = Some(wanted.id);

    let servers = service.list(list_params).await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, wanted.id);

    Ok(())
}

/// Tests the single-id lookup for an id that matches nothing.
///
/// Expected: Err(ServerNotFound) with the "not found" detail message
#[tokio::test]
async fn server_id_not_found_is_error() {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.server_id = Some(999);

    let err = service.list(list_params).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::QueryErr(ServerQueryError::ServerNotFound(999))
    ));
    assert_eq!(err.to_string(), "Server with id 999 not found");
}

/// Tests that the id lookup operates on the already-truncated result set.
///
/// A server that exists but falls outside the first `qty` records counts as
/// not found.
///
/// Expected: Err(ServerNotFound)
#[tokio::test]
async fn server_id_cut_off_by_qty_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, _first) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::server::create_server(db, user.id, category.id).await?;
    let third = factory::server::create_server(db, user.id, category.id).await?;

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.qty = Some(1);
    list_params.server_id = Some(third.id);

    let err = service.list(list_params).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::QueryErr(ServerQueryError::ServerNotFound(_))
    ));

    Ok(())
}

/// Tests the combined browse scenario: category filter, member counts, and
/// a result limit together.
///
/// Five servers in "gaming", limit 2: at most 2 records come back, each in
/// the category and each carrying a correct member count.
///
/// Expected: Ok(2 servers) with exact counts
#[tokio::test]
async fn category_with_counts_and_qty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_directory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let gaming = factory::category::CategoryFactory::new(db)
        .name("gaming")
        .build()
        .await?;

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::server::create_server(db, owner.id, gaming.id).await?);
    }

    // First gaming server gets two members, the second gets one
    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    factory::server_member::add_member(db, created[0].id, a.id).await?;
    factory::server_member::add_member(db, created[0].id, b.id).await?;
    factory::server_member::add_member(db, created[1].id, a.id).await?;

    let service = ServerListService::new(db);
    let mut list_params = params();
    list_params.category = Some("gaming".to_string());
    list_params.with_num_members = true;
    list_params.qty = Some(2);

    let servers = service.list(list_params).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, created[0].id);
    assert_eq!(servers[0].num_members, Some(2));
    assert_eq!(servers[1].id, created[1].id);
    assert_eq!(servers[1].num_members, Some(1));

    Ok(())
}
