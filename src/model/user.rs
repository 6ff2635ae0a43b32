use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

/// Request body of the login endpoint.
///
/// Identity verification is delegated to the deployment's fronting identity
/// provider; the API only binds the session to an existing user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
}

/// User domain model.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }
}
