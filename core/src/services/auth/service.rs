//! Account management and credential authentication.

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use uuid::Uuid;

use crate::domain::entities::user::{ProfilePatch, User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Signup payload after transport-level validation
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Service for account lifecycle and session issuance.
///
/// Login failures are deliberately undifferentiated: an unknown email and a
/// wrong password both surface as [`AuthError::AuthenticationFailed`] so a
/// client cannot enumerate registered accounts.
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service for bearer credential management
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Register a new account.
    ///
    /// The password is bcrypt-hashed before it reaches the repository. A
    /// duplicate email is rejected with [`AuthError::UserAlreadyExists`].
    pub async fn signup(&self, data: SignupData) -> DomainResult<User> {
        if self.user_repository.exists_by_email(&data.email).await? {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let password_hash = hash(&data.password, DEFAULT_COST)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let user = User::new(data.name, data.email, password_hash, data.role);
        let created = self.user_repository.create(user).await?;

        tracing::info!(user_id = %created.id, "account created");
        Ok(created)
    }

    /// Authenticate credentials and issue a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(DomainError::Auth(AuthError::AuthenticationFailed)),
        };

        let password_ok = verify(password, &user.password_hash).unwrap_or(false);
        if !password_ok {
            return Err(DomainError::Auth(AuthError::AuthenticationFailed));
        }

        self.token_service.generate(&user)
    }

    /// Resolve a bearer token to its full user record.
    ///
    /// An invalid or expired token is a token error (401 at the surface);
    /// a valid token whose user has vanished is a distinct not-found (404).
    pub async fn current_user(&self, token: &str) -> DomainResult<User> {
        let claims = self.token_service.verify(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(crate::errors::TokenError::InvalidClaims))?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Role probe: does this email belong to an owner account?
    ///
    /// Unknown emails yield `false`, never an error.
    pub async fn is_owner(&self, email: &str) -> DomainResult<bool> {
        Ok(self
            .user_repository
            .find_by_email(email)
            .await?
            .map(|u| u.is_owner())
            .unwrap_or(false))
    }

    /// Fetch a profile by email
    pub async fn profile_by_email(&self, email: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Fetch a profile by id
    pub async fn profile_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Apply a partial profile update over the whitelisted field set
    pub async fn update_profile(&self, id: Uuid, patch: ProfilePatch) -> DomainResult<User> {
        let mut user = self.profile_by_id(id).await?;
        user.apply_patch(patch);
        self.user_repository.update(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use hh_shared::config::AuthConfig;

    fn service() -> AuthService<MockUserRepository> {
        AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(TokenService::new(&AuthConfig::new("test-secret"))),
        )
    }

    fn signup_data(email: &str, role: UserRole) -> SignupData {
        SignupData {
            name: "Test".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let auth = service();
        auth.signup(signup_data("a@x.com", UserRole::Tenant))
            .await
            .unwrap();

        let err = auth
            .signup(signup_data("a@x.com", UserRole::Owner))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_login_roundtrip() {
        let auth = service();
        let user = auth
            .signup(signup_data("a@x.com", UserRole::Tenant))
            .await
            .unwrap();

        let token = auth.login("a@x.com", "hunter22").await.unwrap();
        let resolved = auth.current_user(&token).await.unwrap();
        assert_eq!(resolved.id, user.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let auth = service();
        auth.signup(signup_data("a@x.com", UserRole::Tenant))
            .await
            .unwrap();

        let wrong_password = auth.login("a@x.com", "nope").await.unwrap_err();
        let unknown_email = auth.login("ghost@x.com", "hunter22").await.unwrap_err();

        let render = |e: DomainError| e.to_string();
        assert_eq!(render(wrong_password), render(unknown_email));
    }

    #[tokio::test]
    async fn test_current_user_rejects_bad_token() {
        let auth = service();
        let err = auth.current_user("garbage").await.unwrap_err();
        assert!(matches!(err, DomainError::Token(_)));
    }

    #[tokio::test]
    async fn test_is_owner_scenarios() {
        let auth = service();
        auth.signup(signup_data("owner@x.com", UserRole::Owner))
            .await
            .unwrap();
        auth.signup(signup_data("tenant@x.com", UserRole::Tenant))
            .await
            .unwrap();

        assert!(auth.is_owner("owner@x.com").await.unwrap());
        assert!(!auth.is_owner("tenant@x.com").await.unwrap());
        assert!(!auth.is_owner("unknown@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_profile_partial_overwrite() {
        let auth = service();
        let user = auth
            .signup(signup_data("a@x.com", UserRole::Tenant))
            .await
            .unwrap();

        let updated = auth
            .update_profile(
                user.id,
                ProfilePatch {
                    address: Some("5 Hill Road".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.address.as_deref(), Some("5 Hill Road"));
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.name, "Test");
    }
}
