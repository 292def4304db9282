use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::CredentialServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for credential operations.
///
/// Concrete implementation of CredentialServicePort with dependency injection.
pub struct CredentialService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> CredentialService<UR>
where
    UR: UserRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> CredentialServicePort for CredentialService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        if command.password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(command.username.to_string()));
        }

        let user = User {
            id: UserId::new(),
            password_hash: self.authenticator.hash_password(&command.password),
            username: command.username,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, UserError> {
        // Unknown accounts still pay for a full hash so timing does not reveal them
        let Ok(username) = Username::new(command.username) else {
            return Err(self.authenticator.reject_unknown(&command.password).into());
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "Login rejected");
            return Err(self.authenticator.reject_unknown(&command.password).into());
        };

        let pair = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, user.id)
            .map_err(|e| {
                tracing::debug!(user_id = %user.id, reason = %e, "Login rejected");
                UserError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "Token pair issued");
        Ok(pair)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError> {
        Ok(self.authenticator.refresh(refresh_token)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use auth::AuthSettings;
    use auth::TokenKind;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        let settings = AuthSettings::new("test-secret-key-for-jwt-signing-at-least-32-bytes")
            .with_hash_iterations(1_000);
        Arc::new(Authenticator::new(&settings).unwrap())
    }

    fn stored_user(authenticator: &Authenticator, username: &str, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: authenticator.hash_password(password),
            created_at: Utc::now(),
        }
    }

    fn login_command(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.password_hash.starts_with("pbkdf2-sha256$")
                    && !user.password_hash.contains("secret123")
            })
            .times(1)
            .returning(|user| Ok(user));

        let authenticator = authenticator();
        let service = CredentialService::new(Arc::new(repository), Arc::clone(&authenticator));

        let command = RegisterCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "secret123".to_string(),
        );

        let user = service.register(command).await.unwrap();
        assert_eq!(user.username.as_str(), "alice");
        assert!(authenticator.verify_password("secret123", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "alice", "secret123");

        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = CredentialService::new(Arc::new(repository), authenticator);

        let command = RegisterCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "other".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_race_reported_by_store() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = CredentialService::new(Arc::new(repository), authenticator());

        let command = RegisterCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "secret123".to_string(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_empty_password() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);
        repository.expect_create().times(0);

        let service = CredentialService::new(Arc::new(repository), authenticator());

        let command =
            RegisterCommand::new(Username::new("alice".to_string()).unwrap(), String::new());

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::EmptyPassword)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "alice", "secret123");
        let user_id = user.id;

        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = CredentialService::new(Arc::new(repository), Arc::clone(&authenticator));

        let pair = service
            .login(login_command("alice", "secret123"))
            .await
            .unwrap();

        let claims = authenticator.authorize(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.kind, TokenKind::Access);

        let access_token = authenticator.refresh(&pair.refresh_token).unwrap();
        assert!(authenticator.authorize(&access_token).is_ok());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "alice", "secret123");

        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username.as_str() == "alice" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = CredentialService::new(Arc::new(repository), authenticator);

        let wrong_password = service
            .login(login_command("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(login_command("mallory", "secret123"))
            .await
            .unwrap_err();
        let malformed_user = service
            .login(login_command("a b", "secret123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, UserError::InvalidCredentials));
        assert!(matches!(unknown_user, UserError::InvalidCredentials));
        assert!(matches!(malformed_user, UserError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), malformed_user.to_string());
    }

    #[tokio::test]
    async fn test_login_failures_take_comparable_time() {
        let mut repository = MockTestUserRepository::new();
        let settings = AuthSettings::new("test-secret-key-for-jwt-signing-at-least-32-bytes")
            .with_hash_iterations(50_000);
        let authenticator = Arc::new(Authenticator::new(&settings).unwrap());
        let user = stored_user(&authenticator, "alice", "secret123");

        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username.as_str() == "alice" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = CredentialService::new(Arc::new(repository), authenticator);

        let mut elapsed = Vec::new();
        for (username, password) in [("alice", "wrong"), ("mallory", "wrong"), ("a b", "wrong")] {
            let started = Instant::now();
            for _ in 0..3 {
                let result = service.login(login_command(username, password)).await;
                assert!(matches!(result, Err(UserError::InvalidCredentials)));
            }
            elapsed.push(started.elapsed());
        }

        let wrong_password = elapsed[0];
        for other in &elapsed[1..] {
            assert!(
                *other * 4 > wrong_password,
                "wrong_password={:?} other={:?}",
                wrong_password,
                other
            );
        }
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let repository = MockTestUserRepository::new();
        let authenticator = authenticator();
        let pair = authenticator.issue_token_pair("user-1").unwrap();

        let service = CredentialService::new(Arc::new(repository), Arc::clone(&authenticator));

        let access_token = service.refresh(&pair.refresh_token).await.unwrap();
        let claims = authenticator.authorize(&access_token).unwrap();
        assert_eq!(claims.sub, "user-1");
    }

    #[tokio::test]
    async fn test_refresh_with_access_token() {
        let repository = MockTestUserRepository::new();
        let authenticator = authenticator();
        let pair = authenticator.issue_token_pair("user-1").unwrap();

        let service = CredentialService::new(Arc::new(repository), authenticator);

        let result = service.refresh(&pair.access_token).await;
        assert!(matches!(result, Err(UserError::InvalidToken)));
    }
}
