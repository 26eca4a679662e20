use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::user::{CreateUserRequest, UserResponse};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(UserResponse::from)
        .map(|user| (StatusCode::CREATED, Json(user)))
}

pub async fn show_user_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserResponse>>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(|users| users.into_iter().map(UserResponse::from).collect::<Vec<_>>())
        .map(Json)
}
