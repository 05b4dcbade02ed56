use crate::model::{
    id::{BookingId, GroundId},
    user::UserSummary,
};
use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

pub mod event;
pub mod workflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub ground: BookingGround,
    pub renter: UserSummary,
    pub owner: UserSummary,
    pub amount: i64,
    pub slot: TimeSlot,
    pub payment_proof: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingGround {
    pub ground_id: GroundId,
    pub title: String,
    pub address: String,
    pub available: bool,
}
