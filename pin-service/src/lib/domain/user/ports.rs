use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for registration, login and token refresh.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// # Arguments
    /// * `command` - Validated username and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Verify a username and password and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (never distinguished)
    /// * `TokenGeneration` - Token encoding failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, UserError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token failed verification
    /// * `TokenGeneration` - Token encoding failed
    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError>;
}

/// Persistence operations for user credentials.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
