//! Post repository: the post service of the board

use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{Identity, NewPost, Post};

/// Post repository
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get all posts, newest first
    pub async fn list(&self) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, author_id, author_username, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    /// Create a post attributed to the given identity
    pub async fn create(&self, new_post: &NewPost, author: &Identity) -> Result<Post> {
        info!("Creating post by {}: {}", author.username, new_post.title);

        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, content, author_id, author_username)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_id, author_username, created_at
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(author.id)
        .bind(&author.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(post_from_row(&row))
    }

    /// Delete a post by id; returns false when no such post exists
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn post_from_row(row: &PgRow) -> Post {
    Post {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        author_id: row.get("author_id"),
        author_username: row.get("author_username"),
        created_at: row.get("created_at"),
    }
}
