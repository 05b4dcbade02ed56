use crate::{
    extractor::{AppJson, AppPath, AuthorizedUser},
    model::{
        ground::{
            CreateGroundRequest, CreateGroundRequestWithOwner, GroundResponse, GroundsResponse,
            UpdateGroundRequest, UpdateGroundRequestWithIds,
        },
        payment::UpiQrCodeResponse,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::GroundId, payment::PaymentIntent};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_available_grounds(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GroundsResponse>> {
    registry
        .ground_repository()
        .find_available()
        .await
        .map(GroundsResponse::from)
        .map(Json)
}

pub async fn show_owner_grounds(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GroundsResponse>> {
    user.ensure_owner()?;

    registry
        .ground_repository()
        .find_by_owner(user.id())
        .await
        .map(GroundsResponse::from)
        .map(Json)
}

pub async fn show_ground(
    AppPath(ground_id): AppPath<GroundId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GroundResponse>> {
    registry
        .ground_repository()
        .find_by_id(ground_id)
        .await
        .and_then(|g| match g {
            Some(g) => Ok(Json(g.into())),
            None => Err(AppError::EntityNotFound(format!(
                "グラウンド（{ground_id}）が見つかりませんでした。"
            ))),
        })
}

pub async fn register_ground(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateGroundRequest>,
) -> AppResult<(StatusCode, Json<GroundResponse>)> {
    user.ensure_owner()?;
    req.validate(&())?;

    let ground = registry
        .ground_repository()
        .create(CreateGroundRequestWithOwner::new(user.id(), req).into())
        .await?;
    Ok((StatusCode::CREATED, Json(ground.into())))
}

pub async fn update_ground(
    user: AuthorizedUser,
    AppPath(ground_id): AppPath<GroundId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateGroundRequest>,
) -> AppResult<Json<GroundResponse>> {
    req.validate(&())?;

    // 存在確認と所有者の確認はリポジトリ側で行う
    let update_ground = UpdateGroundRequestWithIds::new(ground_id, user.id(), req);
    registry
        .ground_repository()
        .update(update_ground.into())
        .await
        .map(GroundResponse::from)
        .map(Json)
}

// グラウンドの料金でオーナー宛ての支払い QR を作る
pub async fn show_ground_payment_code(
    AppPath(ground_id): AppPath<GroundId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UpiQrCodeResponse>> {
    let ground = registry
        .ground_repository()
        .find_by_id(ground_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("グラウンド（{ground_id}）が見つかりませんでした。"))
        })?;
    let upi_id = ground.owner.upi_id.clone().ok_or_else(|| {
        AppError::EntityNotFound("オーナーの UPI ID が登録されていません".into())
    })?;

    let intent = PaymentIntent::new(
        upi_id,
        ground.owner.owner_name.as_str(),
        ground.price.amount,
        format!("Booking {}", ground.title),
    )
    .with_scheme(registry.payment_scheme());
    let code = registry.payment_code_renderer().render(&intent).await?;
    Ok(Json(UpiQrCodeResponse::new(&intent, code)))
}
