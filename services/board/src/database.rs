//! Schema bootstrap for the board service

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// Create the `users`, `posts` and `sessions` tables if they do not exist.
///
/// The unique index on `users.username` makes registration a single
/// conditional insert; duplicate usernames surface as constraint
/// violations instead of racing a read-then-write check.
///
/// `posts.author_id` carries no foreign key: deleting a user leaves that
/// user's posts in place. Sessions do reference their user and die with
/// the row.
pub async fn init_schema(pool: &PgPool) -> DatabaseResult<()> {
    info!("Ensuring database schema");

    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS users_username_key ON users (username)
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id UUID NOT NULL,
            author_username TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            expires_at TIMESTAMPTZ NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::Schema(e.to_string()))?;
    }

    Ok(())
}
