//! User repository: the identity service of the board

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a hashed password.
    ///
    /// Returns `Ok(None)` when the username is already taken. The unique
    /// index on `users.username` makes this a single conditional insert,
    /// so two concurrent registrations cannot both succeed.
    pub async fn create(&self, new_user: &NewUser) -> Result<Option<User>> {
        info!("Creating new user: {}", new_user.username);

        let password_hash = hash_password(&new_user.password)?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, is_admin, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await;

        match row {
            Ok(row) => Ok(Some(user_from_row(&row))),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, is_admin, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| user_from_row(&row)))
    }

    /// Verify a user's password against the stored hash
    pub fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let result = Argon2::default().verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }

    /// Get all users in insertion order
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, password_hash, is_admin, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Delete a user by id; returns false when no such user exists.
    ///
    /// Sessions cascade with the row, posts deliberately do not.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Startup bootstrap: make sure the configured admin account exists.
    ///
    /// Promotes an existing row of that username, creates the account
    /// otherwise. This is the only path that ever sets `is_admin`; no HTTP
    /// operation can.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<User> {
        if let Some(user) = self.find_by_username(username).await? {
            if user.is_admin {
                return Ok(user);
            }

            info!("Promoting existing user to admin: {}", username);
            let row = sqlx::query(
                r#"
                UPDATE users SET is_admin = TRUE
                WHERE id = $1
                RETURNING id, username, password_hash, is_admin, created_at
                "#,
            )
            .bind(user.id)
            .fetch_one(&self.pool)
            .await?;

            return Ok(user_from_row(&row));
        }

        info!("Seeding admin user: {}", username);
        let password_hash = hash_password(password)?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, is_admin)
            VALUES ($1, $2, TRUE)
            RETURNING id, username, password_hash, is_admin, created_at
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_from_row(&row))
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        is_admin: row.get("is_admin"),
        created_at: row.get("created_at"),
    }
}

/// Hash a raw password with a fresh random salt
fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_hash(password_hash: String) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hash = hash_password("pw1").unwrap();
        assert_ne!(hash, "pw1", "hash must not be the raw secret");

        let repo = UserRepository::new(PgPool::connect_lazy("postgres://localhost").unwrap());
        let user = user_with_hash(hash);

        assert!(repo.verify_password(&user, "pw1").unwrap());
        assert!(!repo.verify_password(&user, "pw2").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("pw1").unwrap();
        let second = hash_password("pw1").unwrap();
        assert_ne!(first, second);
    }
}
