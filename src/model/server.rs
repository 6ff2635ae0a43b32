//! Server directory models and list operation parameters.
//!
//! The list endpoint receives its query parameters as raw strings (the
//! boolean flags trigger only on the literal `"true"`), so the DTO keeps
//! them untyped and `ServerListParams::from_dto` performs the validated
//! conversion to typed parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    util::parse::{parse_qty, parse_server_id},
};

/// Raw query parameters of the server list endpoint.
///
/// All fields are optional and combinable. `by_user` and `with_num_members`
/// take effect only when their value is exactly `"true"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerListQueryDto {
    pub category: Option<String>,
    pub qty: Option<String>,
    pub by_user: Option<String>,
    pub by_serverid: Option<String>,
    pub with_num_members: Option<String>,
}

impl ServerListQueryDto {
    /// Whether the caller asked to filter by their own membership.
    pub fn wants_user_filter(&self) -> bool {
        self.by_user.as_deref() == Some("true")
    }

    /// Whether the caller asked for member counts in the output.
    pub fn wants_num_members(&self) -> bool {
        self.with_num_members.as_deref() == Some("true")
    }
}

/// Validated parameters of the server list operation.
#[derive(Debug, Clone)]
pub struct ServerListParams {
    /// Restrict to servers whose category name equals this value exactly.
    pub category: Option<String>,
    /// Restrict to servers this user is a member of. Resolved from the
    /// session by the controller when `by_user=true`.
    pub member_id: Option<i32>,
    /// Annotate results with member counts and include them in the output.
    pub with_num_members: bool,
    /// Truncate the result set to the first N records (after ordering by id).
    pub qty: Option<u64>,
    /// Restrict the already-truncated result set to this single server id.
    pub server_id: Option<i32>,
}

impl ServerListParams {
    /// Converts the raw query DTO into validated parameters.
    ///
    /// Empty-valued parameters (`?qty=`) mean the same as omitted ones, so
    /// they are dropped before parsing. `member_id` is passed separately
    /// because resolving it requires the session, which is an access-control
    /// concern owned by the controller.
    ///
    /// # Returns
    /// - `Ok(ServerListParams)` - All given parameters parsed successfully
    /// - `Err(AppError::QueryErr(InvalidQuantity))` - `qty` is not a non-negative integer
    /// - `Err(AppError::QueryErr(InvalidServerId))` - `by_serverid` is not a valid id
    pub fn from_dto(dto: ServerListQueryDto, member_id: Option<i32>) -> Result<Self, AppError> {
        let with_num_members = dto.wants_num_members();

        let qty = dto
            .qty
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(parse_qty)
            .transpose()?;
        let server_id = dto
            .by_serverid
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(parse_server_id)
            .transpose()?;

        Ok(Self {
            category: dto.category.filter(|v| !v.is_empty()),
            member_id,
            with_num_members,
            qty,
            server_id,
        })
    }
}

/// A server record in a list result, optionally annotated with its member count.
#[derive(Debug, Clone)]
pub struct ServerListItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub category_id: i32,
    /// Member count, present only when the list operation ran with
    /// `with_num_members`. This field replaces the serializer-flag
    /// side-channel: presence in the domain model is what controls
    /// presence in the serialized output.
    pub num_members: Option<u64>,
}

impl ServerListItem {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::server::Model, num_members: Option<u64>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            owner_id: entity.owner_id,
            category_id: entity.category_id,
            num_members,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
            category_id: self.category_id,
            num_members: self.num_members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub category_id: i32,
    /// Omitted from the JSON output unless the list was requested with
    /// `with_num_members=true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}
