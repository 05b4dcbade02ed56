use async_trait::async_trait;
use kernel::{
    model::payment::{PaymentCode, PaymentIntent},
    repository::payment::PaymentCodeRenderer,
};
use qrcode::{render::svg, QrCode};
use shared::error::{AppError, AppResult};

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

#[derive(Default)]
pub struct QrCodeRenderer;

#[async_trait]
impl PaymentCodeRenderer for QrCodeRenderer {
    async fn render(&self, intent: &PaymentIntent) -> AppResult<PaymentCode> {
        let data = intent.to_uri();
        tokio::task::spawn_blocking(move || render_svg(&data))
            .await
            .map_err(|e| {
                AppError::RenderingUnavailable(format!("QR レンダリングが中断されました: {e}"))
            })?
    }
}

pub fn render_svg(data: &str) -> AppResult<PaymentCode> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| {
        AppError::RenderingUnavailable(format!("QR コードを生成できませんでした: {e}"))
    })?;
    let image = code
        .render()
        .min_dimensions(240, 240)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(PaymentCode {
        mime_type: SVG_MIME_TYPE,
        bytes: image.into_bytes(),
    })
}
