use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Guard resolving the session to an authenticated user record.
///
/// Used by controllers for endpoints (or query parameters) that require an
/// authenticated caller.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the current session to its user record.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user's record
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user id in the session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session user no longer exists
    pub async fn require_user(&self) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
