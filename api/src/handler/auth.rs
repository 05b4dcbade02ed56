use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::auth::{AccessTokenResponse, LoginRequest, SignupRequest},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{auth::event::CreateToken, id::UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn signup(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<AccessTokenResponse>)> {
    req.validate(&())?;

    let user = registry.user_repository().create(req.into()).await?;
    let res = issue_token(&registry, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;
    issue_token(&registry, user_id).await.map(Json)
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn issue_token(registry: &AppRegistry, user_id: UserId) -> AppResult<AccessTokenResponse> {
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("ユーザー（{user_id}）が見つかりませんでした。")))?;

    Ok(AccessTokenResponse {
        user_id,
        access_token: access_token.0,
        user: user.into(),
    })
}
