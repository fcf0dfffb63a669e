use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::models::{CreateUserRequest, UserModel};
use crate::shared::{AppError, AppState};

/// POST /api/users
#[instrument(name = "create_user", skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserModel>), AppError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    let user = UserModel::new(username.to_string());
    state.user_repository.create_user(&user).await?;

    info!(user_id = %user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
#[instrument(name = "get_user", skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserModel>, AppError> {
    state
        .user_repository
        .get_user(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
