//! Typed wrapper over the raw tower-sessions `Session`.
//!
//! Session keys and their value types live here so call sites can't
//! disagree about either.

use tower_sessions::Session;

use crate::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the
/// authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds the session to a user id, establishing a logged-in state.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Reads the authenticated user's id, if any.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Session carries a logged-in user
    /// - `Ok(None)` - Not logged in
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Whether the session carries a logged-in user.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears the session, dropping the authentication state. Used at logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
