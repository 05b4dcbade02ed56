use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    confirm_booking, reject_booking, request_booking, show_booking, show_booking_history,
    show_owner_queue,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(request_booking))
        .route("/", get(show_booking_history))
        .route("/owner", get(show_owner_queue))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id/confirm", post(confirm_booking))
        .route("/:booking_id/reject", post(reject_booking));

    Router::new().nest("/bookings", bookings_routers)
}
