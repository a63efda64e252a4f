//! Session repository: issues, resolves and revokes opaque session tokens
//!
//! Sessions live in the record store next to the data they guard, so
//! logout and user deletion revoke tokens with a plain delete.

use anyhow::Result;
use chrono::{Duration, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{Identity, Session};

/// Length of the opaque session token
const TOKEN_LEN: usize = 48;

/// Session repository
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issue a new session for the user, valid for `ttl_seconds`
    pub async fn create(&self, user_id: Uuid, ttl_seconds: i64) -> Result<Session> {
        info!("Creating session for user: {}", user_id);

        let token = generate_token();
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds);

        let row = sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, expires_at, created_at
            "#,
        )
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Session {
            token: row.get("token"),
            user_id: row.get("user_id"),
            expires_at: row.get("expires_at"),
            created_at: row.get("created_at"),
        })
    }

    /// Resolve a bearer token to the identity it was issued for.
    ///
    /// Expired sessions are treated as absent.
    pub async fn find_identity(&self, token: &str) -> Result<Option<Identity>> {
        let row = sqlx::query(
            r#"
            SELECT u.id, u.username, u.is_admin
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Identity {
            id: row.get("id"),
            username: row.get("username"),
            is_admin: row.get("is_admin"),
        }))
    }

    /// Delete every session belonging to the user (logout from all devices)
    pub async fn delete_by_user(&self, user_id: Uuid) -> Result<u64> {
        info!("Deleting sessions for user: {}", user_id);

        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Generate an opaque, unguessable token from the thread-local CSPRNG
fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}
