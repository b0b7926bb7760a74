use std::collections::HashMap;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;

use crate::models::{Role, User};

/// Credential lookup used by the login flow.
pub trait UserDirectory: Send + Sync {
    fn find_user(&self, username: &str) -> Option<User>;
}

/// Fixed, in-memory user table.
#[derive(Debug, Default)]
pub struct StaticUserDirectory {
    users: HashMap<String, User>,
}

impl StaticUserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self { users }
    }

    /// Hash each plaintext password and build the directory from the result.
    pub fn from_credentials(credentials: &[(&str, &str, Role)]) -> anyhow::Result<Self> {
        let mut users = Vec::with_capacity(credentials.len());
        for (username, password, role) in credentials {
            users.push(User {
                username: username.to_string(),
                password_hash: hash_password(password)?,
                role: *role,
            });
        }
        Ok(Self::new(users))
    }

    /// The two built-in accounts: `admin` and `cashier`.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Self::from_credentials(&[
            ("admin", "admin123", Role::Admin),
            ("cashier", "cashier123", Role::Cashier),
        ])
    }
}

impl UserDirectory for StaticUserDirectory {
    fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(password_hash)
}
