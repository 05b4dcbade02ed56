use crate::model::{
    booking::{
        event::{CreateBooking, DecideBooking},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約リクエストを pending で作成する。グラウンドの空き状況は変えない
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 予約を confirmed にし、グラウンドを available = false にする
    async fn confirm(&self, event: DecideBooking) -> AppResult<()>;
    // 予約を rejected にし、グラウンドを available = true に戻す
    async fn reject(&self, event: DecideBooking) -> AppResult<()>;
    // オーナー宛ての予約のうち confirmed 以外
    async fn find_owner_queue(&self, owner_id: UserId) -> AppResult<Vec<Booking>>;
    // 利用者の全予約履歴
    async fn find_by_renter(&self, renter_id: UserId) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
}
