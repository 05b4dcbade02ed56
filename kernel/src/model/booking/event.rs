use crate::model::{
    booking::TimeSlot,
    id::{BookingId, GroundId, UserId},
    role::Role,
};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub ground_id: GroundId,
    pub requested_by: UserId,
    pub requester_role: Role,
    // None の場合はグラウンドの料金を使う
    pub amount: Option<i64>,
    pub slot: TimeSlot,
    pub payment_proof: Option<String>,
}

#[derive(Debug, Clone, Copy, new)]
pub struct DecideBooking {
    pub booking_id: BookingId,
    pub requested_by: UserId,
    pub requester_role: Role,
}
