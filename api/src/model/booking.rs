use crate::model::user::UserSummaryResponse;
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingGround, TimeSlot},
    id::{BookingId, GroundId},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub ground_id: GroundId,
    // 省略時はグラウンドの料金
    #[garde(range(min = 0))]
    pub amount: Option<i64>,
    #[garde(skip)]
    pub from: DateTime<Utc>,
    #[garde(skip)]
    pub to: DateTime<Utc>,
    #[garde(length(min = 1))]
    pub payment_proof_ref: Option<String>,
}

impl CreateBookingRequest {
    pub fn slot(&self) -> AppResult<TimeSlot> {
        if self.from >= self.to {
            return Err(AppError::UnprocessableEntity(
                "予約の終了時刻は開始時刻より後にしてください".into(),
            ));
        }
        Ok(TimeSlot {
            from: self.from,
            to: self.to,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking_id: BookingId,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecisionResponse {
    pub booking_id: BookingId,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub ground: BookingGroundResponse,
    pub renter: UserSummaryResponse,
    pub owner: UserSummaryResponse,
    pub amount: i64,
    pub timeslot: TimeSlotResponse,
    pub payment_proof_ref: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            ground,
            renter,
            owner,
            amount,
            slot,
            payment_proof,
            status,
            created_at,
        } = value;
        Self {
            id: booking_id,
            ground: ground.into(),
            renter: renter.into(),
            owner: owner.into(),
            amount,
            timeslot: slot.into(),
            payment_proof_ref: payment_proof,
            status: status.to_string(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingGroundResponse {
    pub ground_id: GroundId,
    pub title: String,
    pub address: String,
    pub available: bool,
}

impl From<BookingGround> for BookingGroundResponse {
    fn from(value: BookingGround) -> Self {
        let BookingGround {
            ground_id,
            title,
            address,
            available,
        } = value;
        Self {
            ground_id,
            title,
            address,
            available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimeSlotResponse {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl From<TimeSlot> for TimeSlotResponse {
    fn from(value: TimeSlot) -> Self {
        let TimeSlot { from, to } = value;
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(from: &str, to: &str) -> CreateBookingRequest {
        serde_json::from_value(serde_json::json!({
            "groundId": GroundId::new(),
            "from": from,
            "to": to,
        }))
        .unwrap()
    }

    #[test]
    fn slot_must_end_after_it_starts() {
        let ok = request("2026-11-01T18:00:00Z", "2026-11-01T20:00:00Z");
        assert!(ok.slot().is_ok());
        assert!(ok.amount.is_none());

        let backwards = request("2026-11-01T20:00:00Z", "2026-11-01T18:00:00Z");
        assert!(matches!(
            backwards.slot(),
            Err(AppError::UnprocessableEntity(_))
        ));
    }
}
