use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::payment::generate_upi_qrcode;

pub fn build_payment_routers() -> Router<AppRegistry> {
    Router::new().route("/payments/upi-qrcode", post(generate_upi_qrcode))
}
