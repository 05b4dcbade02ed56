use crate::model::payment::{PaymentCode, PaymentIntent};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PaymentCodeRenderer: Send + Sync {
    // 描画バックエンドの失敗は RenderingUnavailable
    async fn render(&self, intent: &PaymentIntent) -> AppResult<PaymentCode>;
}
