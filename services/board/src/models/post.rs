//! Post model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Post entity
///
/// `author_id` is an attribution reference, not a foreign key; the author
/// may have been deleted since. `author_username` is a denormalized copy
/// taken at creation time, valid because usernames are immutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

/// New post creation payload; attribution is supplied separately from the
/// verified caller identity
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}
