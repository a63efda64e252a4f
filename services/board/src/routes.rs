//! Board service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    error::ApiError,
    middleware::session_auth,
    models::{Identity, NewPost, NewUser, UserResponse},
    policy::{self, Operation},
    state::AppState,
    validation,
};

/// Request for user registration and login
///
/// Absent fields deserialize to empty strings so that missing and empty
/// input fail the same presence check.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request for post creation; attribution comes from the session identity,
/// not the body
#[derive(Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Public view of the caller identity returned at login
#[derive(Serialize)]
pub struct IdentityResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// Response for user login
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: IdentityResponse,
}

/// Create the router for the board service
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/posts", post(create_post))
        .route("/logout", post(logout))
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id", delete(remove_user))
        .route("/admin/posts/:id", delete(remove_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_auth));

    let api = Router::new()
        .route("/posts", get(list_posts))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "board-service"
    }))
}

/// List all posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state.posts.list().await.map_err(|e| {
        error!("Failed to list posts: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(posts))
}

/// Create a post attributed to the authenticated identity
pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    policy::authorize(Some(&identity), Operation::CreatePost)?;

    validation::require("Title", &payload.title).map_err(ApiError::Validation)?;
    validation::require("Content", &payload.content).map_err(ApiError::Validation)?;

    let new_post = NewPost {
        title: payload.title,
        content: payload.content,
    };

    let created = state.posts.create(&new_post, &identity).await.map_err(|e| {
        error!("Failed to create post: {}", e);
        ApiError::InternalServerError
    })?;

    info!("Post created by {}: {}", identity.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::require("Username", &payload.username).map_err(ApiError::Validation)?;
    validation::require("Password", &payload.password).map_err(ApiError::Validation)?;

    let new_user = NewUser {
        username: payload.username,
        password: payload.password,
    };

    let user = state
        .users
        .create(&new_user)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Conflict("Username already exists".to_string()))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Log a user in and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::require("Username", &payload.username).map_err(ApiError::Validation)?;
    validation::require("Password", &payload.password).map_err(ApiError::Validation)?;

    info!("Login attempt for user: {}", payload.username);

    // Unknown username and wrong password are indistinguishable to the caller
    let user = state
        .users
        .find_by_username(&payload.username)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let verified = state.users.verify_password(&user, &payload.password).map_err(|e| {
        error!("Failed to verify password: {}", e);
        ApiError::InternalServerError
    })?;

    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(user.id, state.config.session_ttl_seconds)
        .await
        .map_err(|e| {
            error!("Failed to create session: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: IdentityResponse {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        },
    }))
}

/// Drop every session belonging to the caller
pub async fn logout(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, ApiError> {
    policy::authorize(Some(&identity), Operation::Logout)?;

    state.sessions.delete_by_user(identity.id).await.map_err(|e| {
        error!("Failed to delete sessions: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(json!({"message": "Logged out successfully"})))
}

/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, ApiError> {
    policy::authorize(Some(&identity), Operation::ListUsers)?;

    let users = state.users.list().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::InternalServerError
    })?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(users))
}

/// Delete a user by id (admin only).
///
/// The user's sessions die with the row; their posts remain, attributed
/// to the now-dangling author id.
pub async fn remove_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    policy::authorize(Some(&identity), Operation::DeleteUser)?;

    let id = parse_id(&id)?;

    let deleted = state.users.delete(id).await.map_err(|e| {
        error!("Failed to delete user: {}", e);
        ApiError::InternalServerError
    })?;

    if deleted {
        info!("User deleted: {}", id);
        Ok(Json(json!({"message": "User deleted successfully"})))
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}

/// Delete a post by id (admin only)
pub async fn remove_post(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    policy::authorize(Some(&identity), Operation::DeletePost)?;

    let id = parse_id(&id)?;

    let deleted = state.posts.delete(id).await.map_err(|e| {
        error!("Failed to delete post: {}", e);
        ApiError::InternalServerError
    })?;

    if deleted {
        info!("Post deleted: {}", id);
        Ok(Json(json!({"message": "Post deleted successfully"})))
    } else {
        Err(ApiError::NotFound("Post not found".to_string()))
    }
}

/// Reject identifiers that are not well formed before touching the store
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid identifier format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_malformed() {
        assert!(matches!(parse_id("not-a-uuid"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_id(""), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let payload: CredentialsRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.username.is_empty());
        assert!(payload.password.is_empty());
    }
}
