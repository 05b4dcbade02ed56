use crate::{
    extractor::{AppJson, AppPath, AuthorizedUser},
    model::booking::{
        BookingDecisionResponse, BookingResponse, BookingsResponse, CreateBookingRequest,
        CreatedBookingResponse,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::event::{CreateBooking, DecideBooking},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn request_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreatedBookingResponse>)> {
    req.validate(&())?;
    let slot = req.slot()?;

    let event = CreateBooking::new(
        req.ground_id,
        user.id(),
        user.role(),
        req.amount,
        slot,
        req.payment_proof_ref,
    );
    let booking_id = registry.booking_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookingResponse {
            booking_id,
            message: "予約リクエストを受け付けました",
        }),
    ))
}

pub async fn show_booking_history(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_renter(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_owner_queue(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    user.ensure_owner()?;

    registry
        .booking_repository()
        .find_owner_queue(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

// 予約の当事者（利用者とオーナー）のみ参照できる
pub async fn show_booking(
    user: AuthorizedUser,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("予約（{booking_id}）が見つかりませんでした。"))
        })?;

    if booking.renter.user_id != user.id() && booking.owner.user_id != user.id() {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(Json(booking.into()))
}

pub async fn confirm_booking(
    user: AuthorizedUser,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingDecisionResponse>> {
    registry
        .booking_repository()
        .confirm(DecideBooking::new(booking_id, user.id(), user.role()))
        .await?;

    Ok(Json(BookingDecisionResponse {
        booking_id,
        message: "予約を確定しました",
    }))
}

pub async fn reject_booking(
    user: AuthorizedUser,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingDecisionResponse>> {
    registry
        .booking_repository()
        .reject(DecideBooking::new(booking_id, user.id(), user.role()))
        .await?;

    Ok(Json(BookingDecisionResponse {
        booking_id,
        message: "予約を却下しました",
    }))
}
