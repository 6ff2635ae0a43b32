//! Server data repository for the directory's list queries.
//!
//! The list query is built as an immutable pipeline: each conditional filter
//! rebinds the `Select` value rather than mutating shared state, so the
//! composition order is explicit in the code.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::server::ServerListParams;

/// Row shape for the grouped member-count query.
#[derive(FromQueryResult)]
struct MemberCountRow {
    server_id: i32,
    num_members: i64,
}

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the given filters.
    ///
    /// Applies, in order: category name filter (inner join on category),
    /// membership filter (inner join on server_member), ordering by id
    /// ascending, then the result-count limit. The id ordering makes the
    /// limit deterministic. The `server_id` and `with_num_members` fields of
    /// the params are not applied here; they operate on the fetched result
    /// set and are handled by the service layer.
    ///
    /// # Arguments
    /// - `params` - Validated list parameters
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching servers ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, params: &ServerListParams) -> Result<Vec<entity::server::Model>, DbErr> {
        let mut query = entity::prelude::Server::find();

        if let Some(ref category_name) = params.category {
            query = query
                .join(JoinType::InnerJoin, entity::server::Relation::Category.def())
                .filter(entity::category::Column::Name.eq(category_name.clone()));
        }

        if let Some(member_id) = params.member_id {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::server::Relation::ServerMember.def(),
                )
                .filter(entity::server_member::Column::UserId.eq(member_id));
        }

        query = query.order_by_asc(entity::server::Column::Id);

        if let Some(qty) = params.qty {
            query = query.limit(qty);
        }

        query.all(self.db).await
    }

    /// Counts members for each of the given servers.
    ///
    /// Runs a single grouped query over the join table. Counted separately
    /// from `list` so a membership filter there cannot skew the counts: the
    /// result is the true member cardinality of each server. Servers with no
    /// members produce no row and are absent from the returned map.
    ///
    /// # Arguments
    /// - `server_ids` - Ids of the servers to count members for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)` - Member count keyed by server id
    /// - `Err(DbErr)` - Database error during query
    pub async fn member_counts(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .column_as(
                entity::server_member::Column::UserId.count(),
                "num_members",
            )
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .group_by(entity::server_member::Column::ServerId)
            .into_model::<MemberCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.server_id, row.num_members as u64))
            .collect())
    }
}
