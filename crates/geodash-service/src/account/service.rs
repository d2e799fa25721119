//! Account registration — signup validation and user creation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use geodash_auth::password::{PasswordHasher, PasswordValidator};
use geodash_core::error::AppError;
use geodash_core::result::AppResult;
use geodash_database::repositories::UserRepository;
use geodash_entity::user::{CreateUser, User};

/// Maximum length of a display name.
const NAME_MAX_LENGTH: usize = 50;

/// Data for registering a new account.
///
/// An account needs a name and at least one contact channel. Email
/// accounts authenticate with a password; phone-only accounts have none.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Signup {
    /// Display name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Phone number in international format (optional).
    pub phone_number: Option<String>,
    /// Plaintext password (required with email).
    pub password: Option<String>,
}

/// Handles account registration and lookup.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Register a new account.
    pub async fn signup(&self, signup: Signup) -> AppResult<User> {
        let name = signup.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Name cannot exceed {NAME_MAX_LENGTH} characters"
            )));
        }

        let email = signup.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
        let phone_number = signup
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        if email.is_none() && phone_number.is_none() {
            return Err(AppError::validation(
                "Either email or phone number is required",
            ));
        }

        if let Some(email) = email {
            if !is_valid_email(email) {
                return Err(AppError::validation("Invalid email format"));
            }
            if self.user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::conflict("Email already in use"));
            }
        }

        if let Some(phone) = phone_number {
            if !is_valid_phone(phone) {
                return Err(AppError::validation("Invalid phone number format"));
            }
            if self.user_repo.find_by_phone(phone).await?.is_some() {
                return Err(AppError::conflict("Phone number already in use"));
            }
        }

        let password_hash = match (&signup.password, email) {
            (Some(password), _) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            (None, Some(_)) => {
                return Err(AppError::validation(
                    "Password is required for email signup",
                ));
            }
            (None, None) => None,
        };

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.map(str::to_string),
                phone_number: phone_number.map(str::to_string),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(user)
    }

    /// Look up a user by ID.
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}

/// Minimal email shape check: one `@`, a dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Phone numbers are international format: optional `+`, then up to 16
/// digits not starting with zero.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = digits.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_digit()
        && first != '0'
        && digits.len() <= 16
        && chars.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user @example.com"));
    }

    #[test]
    fn test_phone_format() {
        assert!(is_valid_phone("+14155552671"));
        assert!(is_valid_phone("4155552671"));
        assert!(!is_valid_phone("+0415555267"));
        assert!(!is_valid_phone("+1415555267a"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+141555526711234567"));
    }
}
