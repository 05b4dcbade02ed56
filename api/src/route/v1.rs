use super::{
    auth::build_auth_routers, booking::build_booking_routers, ground::build_ground_routers,
    health::build_health_check_routers, payment::build_payment_routers, user::build_user_router,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_router())
        .merge(build_ground_routers())
        .merge(build_booking_routers())
        .merge(build_payment_routers());
    Router::new().nest("/api/v1", router)
}
