use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{workflow::BookingState, Booking, BookingGround, BookingStatus, TimeSlot},
    id::{BookingId, GroundId, UserId},
    user::UserSummary,
};
use shared::error::AppError;
use std::str::FromStr;

// 借り手・オーナーの両方を users と JOIN する
pub const SELECT_BOOKING: &str = r#"
    SELECT
        b.booking_id,
        b.ground_id,
        g.title AS ground_title,
        g.address AS ground_address,
        g.available AS ground_available,
        b.renter_id,
        r.user_name AS renter_name,
        r.email AS renter_email,
        r.phone AS renter_phone,
        b.owner_id,
        o.user_name AS owner_name,
        o.email AS owner_email,
        o.phone AS owner_phone,
        b.amount,
        b.slot_from,
        b.slot_to,
        b.payment_proof,
        b.status,
        b.created_at
    FROM bookings AS b
    INNER JOIN grounds AS g ON b.ground_id = g.ground_id
    INNER JOIN users AS r ON b.renter_id = r.user_id
    INNER JOIN users AS o ON b.owner_id = o.user_id
"#;

fn parse_status(status: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_str(status)
        .map_err(|e| AppError::ConversionEntityError(format!("booking status `{status}`: {e}")))
}

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub ground_id: GroundId,
    pub ground_title: String,
    pub ground_address: String,
    pub ground_available: bool,
    pub renter_id: UserId,
    pub renter_name: String,
    pub renter_email: String,
    pub renter_phone: Option<String>,
    pub owner_id: UserId,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub amount: i64,
    pub slot_from: DateTime<Utc>,
    pub slot_to: DateTime<Utc>,
    pub payment_proof: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            ground_id,
            ground_title,
            ground_address,
            ground_available,
            renter_id,
            renter_name,
            renter_email,
            renter_phone,
            owner_id,
            owner_name,
            owner_email,
            owner_phone,
            amount,
            slot_from,
            slot_to,
            payment_proof,
            status,
            created_at,
        } = value;
        Ok(Booking {
            booking_id,
            ground: BookingGround {
                ground_id,
                title: ground_title,
                address: ground_address,
                available: ground_available,
            },
            renter: UserSummary {
                user_id: renter_id,
                user_name: renter_name,
                email: renter_email,
                phone: renter_phone,
            },
            owner: UserSummary {
                user_id: owner_id,
                user_name: owner_name,
                email: owner_email,
                phone: owner_phone,
            },
            amount,
            slot: TimeSlot {
                from: slot_from,
                to: slot_to,
            },
            payment_proof,
            status: parse_status(&status)?,
            created_at,
        })
    }
}

// 承認・却下の判定に使う状態
#[derive(sqlx::FromRow)]
pub struct BookingStateRow {
    pub booking_id: BookingId,
    pub ground_id: GroundId,
    pub owner_id: UserId,
    pub status: String,
}

impl TryFrom<BookingStateRow> for BookingState {
    type Error = AppError;

    fn try_from(value: BookingStateRow) -> Result<Self, Self::Error> {
        let BookingStateRow {
            booking_id,
            ground_id,
            owner_id,
            status,
        } = value;
        Ok(BookingState {
            booking_id,
            ground_id,
            owner_id,
            status: parse_status(&status)?,
        })
    }
}
