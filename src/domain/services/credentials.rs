use std::sync::Arc;
use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::info;

/// Stateless credential checks over the user store. Hashes on register,
/// verifies on authenticate; never hands the plaintext to anything else.
pub struct CredentialService {
    user_repo: Arc<dyn UserRepository>,
}

impl CredentialService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn register(&self, name: String, email: String, password: &str) -> Result<User, AppError> {
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        let user = User::new(name, email, password_hash);
        let created = self.user_repo.create(&user).await?;

        info!("Registered user: {}", created.id);
        Ok(created)
    }

    /// Checks the password against the stored hash and returns the display
    /// name on success. Unknown email and bad password fail with distinct
    /// error kinds so the handler can answer with different texts.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.user_repo.find_by_email(email).await?
            .ok_or(AppError::UnknownUser)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal)?;

        Argon2::default().verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredentials)?;

        Ok(user.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct InMemoryUserRepo {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepo {
        fn new() -> Self {
            Self { users: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepo {
        async fn create(&self, user: &User) -> Result<User, AppError> {
            self.users.lock().unwrap().push(user.clone());
            Ok(user.clone())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
        }
    }

    #[tokio::test]
    async fn register_then_authenticate_returns_display_name() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = CredentialService::new(repo);

        service.register("Ana".into(), "ana@example.com".into(), "s3cret").await.unwrap();
        let name = service.authenticate("ana@example.com", "s3cret").await.unwrap();

        assert_eq!(name, "Ana");
    }

    #[tokio::test]
    async fn wrong_password_fails_as_invalid_credentials() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = CredentialService::new(repo);

        service.register("Ana".into(), "ana@example.com".into(), "s3cret").await.unwrap();
        let err = service.authenticate("ana@example.com", "nope").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_fails_as_unknown_user() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = CredentialService::new(repo);

        let err = service.authenticate("ghost@example.com", "whatever").await.unwrap_err();

        assert!(matches!(err, AppError::UnknownUser));
    }

    #[tokio::test]
    async fn stored_hash_is_not_the_plaintext() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = CredentialService::new(repo.clone());

        let created = service.register("Ana".into(), "ana@example.com".into(), "s3cret").await.unwrap();

        assert_ne!(created.password_hash, "s3cret");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = CredentialService::new(repo);

        service.register("Ana".into(), "ana@example.com".into(), "s3cret").await.unwrap();
        let err = service.register("Otra".into(), "ana@example.com".into(), "other").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
