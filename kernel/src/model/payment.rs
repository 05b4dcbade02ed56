use crate::model::ground::DEFAULT_CURRENCY;
use std::fmt;

pub const DEFAULT_SCHEME: &str = "upi";

/// A manual payment request encoded as a UPI deep link.
///
/// Nothing is verified: the link only tells a payment app whom to pay,
/// how much, and with which note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub scheme: String,
    pub payout_id: String,
    pub payee_name: String,
    pub amount: i64,
    pub note: String,
}

impl PaymentIntent {
    pub fn new(
        payout_id: impl Into<String>,
        payee_name: impl Into<String>,
        amount: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            payout_id: payout_id.into(),
            payee_name: payee_name.into(),
            amount,
            note: note.into(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn to_uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaymentIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://pay?pa={}&pn={}&am={}&cu={}&tn={}",
            self.scheme,
            urlencoding::encode(&self.payout_id),
            urlencoding::encode(&self.payee_name),
            urlencoding::encode(&self.amount.to_string()),
            DEFAULT_CURRENCY,
            urlencoding::encode(&self.note),
        )
    }
}

pub fn build_payment_intent(payout_id: &str, payee_name: &str, amount: i64, note: &str) -> String {
    PaymentIntent::new(payout_id, payee_name, amount, note).to_uri()
}

/// Rendered scannable code of a payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCode {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}
