use base64::{engine::general_purpose, Engine as _};
use garde::Validate;
use kernel::model::payment::{PaymentCode, PaymentIntent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpiQrCodeRequest {
    #[garde(length(min = 1))]
    pub upi_id: String,
    #[garde(skip)]
    #[serde(default)]
    pub name: String,
    #[garde(range(min = 0))]
    pub amount: i64,
    #[garde(skip)]
    #[serde(default)]
    pub note: String,
}

impl From<UpiQrCodeRequest> for PaymentIntent {
    fn from(value: UpiQrCodeRequest) -> Self {
        let UpiQrCodeRequest {
            upi_id,
            name,
            amount,
            note,
        } = value;
        PaymentIntent::new(upi_id, name, amount, note)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiQrCodeResponse {
    pub data_url: String,
    pub upi_str: String,
}

impl UpiQrCodeResponse {
    pub fn new(intent: &PaymentIntent, code: PaymentCode) -> Self {
        let encoded = general_purpose::STANDARD.encode(&code.bytes);
        Self {
            data_url: format!("data:{};base64,{}", code.mime_type, encoded),
            upi_str: intent.to_uri(),
        }
    }
}
