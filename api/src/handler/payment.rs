use crate::{
    extractor::AppJson,
    model::payment::{UpiQrCodeRequest, UpiQrCodeResponse},
};
use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::payment::PaymentIntent;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn generate_upi_qrcode(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpiQrCodeRequest>,
) -> AppResult<Json<UpiQrCodeResponse>> {
    req.validate(&())?;

    let intent = PaymentIntent::from(req).with_scheme(registry.payment_scheme());
    let code = registry.payment_code_renderer().render(&intent).await?;
    Ok(Json(UpiQrCodeResponse::new(&intent, code)))
}
