//! Decision rules of the booking lifecycle.
//!
//! A booking starts `pending` and moves once, to `confirmed` or `rejected`.
//! Confirming takes the ground off the market, rejecting puts it back. The
//! functions here only decide; the store applies a [`Transition`] to the
//! booking row and the ground row inside one transaction.

use crate::model::{
    booking::BookingStatus,
    id::{BookingId, GroundId, UserId},
    role::Role,
};
use shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Reject,
}

impl Decision {
    pub fn target_status(self) -> BookingStatus {
        match self {
            Decision::Confirm => BookingStatus::Confirmed,
            Decision::Reject => BookingStatus::Rejected,
        }
    }

    /// Availability written to the ground once the decision is applied.
    /// Reject restores availability even if another booking was confirmed.
    pub fn ground_available_after(self) -> bool {
        match self {
            Decision::Confirm => false,
            Decision::Reject => true,
        }
    }
}

/// The part of a stored booking the decision rules look at.
#[derive(Debug, Clone, Copy)]
pub struct BookingState {
    pub booking_id: BookingId,
    pub ground_id: GroundId,
    pub owner_id: UserId,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub booking_id: BookingId,
    pub ground_id: GroundId,
    pub status: BookingStatus,
    pub ground_available: bool,
}

pub fn ensure_can_request(requester_role: Role) -> AppResult<()> {
    if requester_role.is_owner() {
        return Err(AppError::ForbiddenRole(
            "オーナーはグラウンドを予約できません".into(),
        ));
    }
    Ok(())
}

pub fn ensure_bookable(ground_id: GroundId, available: bool) -> AppResult<()> {
    if !available {
        return Err(AppError::ListingUnavailable(format!(
            "グラウンド（{ground_id}）は現在予約できません"
        )));
    }
    Ok(())
}

pub fn ensure_owner_role(requester_role: Role) -> AppResult<()> {
    if !requester_role.is_owner() {
        return Err(AppError::ForbiddenRole(
            "この操作はオーナーのみ実行できます".into(),
        ));
    }
    Ok(())
}

pub fn decide(
    decision: Decision,
    requested_by: UserId,
    requester_role: Role,
    booking: &BookingState,
) -> AppResult<Transition> {
    ensure_owner_role(requester_role)?;
    if booking.owner_id != requested_by {
        return Err(AppError::ForbiddenOperation);
    }
    if booking.status.is_terminal() {
        return Err(AppError::BookingAlreadyDecided(format!(
            "予約（{}）はすでに {} です",
            booking.booking_id, booking.status
        )));
    }
    Ok(Transition {
        booking_id: booking.booking_id,
        ground_id: booking.ground_id,
        status: decision.target_status(),
        ground_available: decision.ground_available_after(),
    })
}
