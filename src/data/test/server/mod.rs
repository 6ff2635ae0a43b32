use crate::data::server::ServerRepository;
use crate::model::server::ServerListParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;

/// Default list parameters: no filters, no limit, no annotation.
fn params() -> ServerListParams {
    ServerListParams {
        category: None,
        member_id: None,
        with_num_members: false,
        qty: None,
        server_id: None,
    }
}
