use sea_orm::DatabaseConnection;

use crate::{
    data::server::ServerRepository,
    error::{server::ServerQueryError, AppError},
    model::server::{ServerListItem, ServerListParams},
};

pub struct ServerListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers according to the validated parameters.
    ///
    /// The pipeline order is fixed: category and membership filters plus the
    /// result-count limit run in the repository query; the single-id lookup
    /// then operates on the fetched (already truncated) rows, so an id that
    /// was cut off by `qty` counts as not found. Member counts are resolved
    /// last, over exactly the surviving rows.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerListItem>)` - Matching servers, annotated with member
    ///   counts when `with_num_members` was requested
    /// - `Err(AppError::QueryErr(ServerNotFound))` - `server_id` matched nothing
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn list(&self, params: ServerListParams) -> Result<Vec<ServerListItem>, AppError> {
        let repo = ServerRepository::new(self.db);

        let mut servers = repo.list(&params).await?;

        if let Some(server_id) = params.server_id {
            servers.retain(|server| server.id == server_id);

            if servers.is_empty() {
                return Err(ServerQueryError::ServerNotFound(server_id).into());
            }
        }

        let counts = if params.with_num_members {
            let ids: Vec<i32> = servers.iter().map(|server| server.id).collect();
            Some(repo.member_counts(&ids).await?)
        } else {
            None
        };

        Ok(servers
            .into_iter()
            .map(|server| {
                let num_members = counts
                    .as_ref()
                    .map(|counts| counts.get(&server.id).copied().unwrap_or(0));
                ServerListItem::from_entity(server, num_members)
            })
            .collect())
    }
}
