use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::ground::{
    register_ground, show_available_grounds, show_ground, show_ground_payment_code,
    show_owner_grounds, update_ground,
};

pub fn build_ground_routers() -> Router<AppRegistry> {
    let grounds_routers = Router::new()
        .route("/", get(show_available_grounds))
        .route("/", post(register_ground))
        .route("/owner", get(show_owner_grounds))
        .route("/:ground_id", get(show_ground))
        .route("/:ground_id", patch(update_ground))
        .route("/:ground_id/payment-qrcode", get(show_ground_payment_code));

    Router::new().nest("/grounds", grounds_routers)
}
