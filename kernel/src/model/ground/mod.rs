use crate::model::id::{GroundId, UserId};
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};

pub mod event;

pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Clone)]
pub struct Ground {
    pub ground_id: GroundId,
    pub owner: GroundOwner,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub price: GroundPrice,
    pub sport_tags: Vec<String>,
    pub facility_tags: Vec<String>,
    pub location: GroundLocation,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundOwner {
    pub owner_id: UserId,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub upi_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundPrice {
    pub amount: i64,
    pub currency: String,
    pub negotiable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundLocation {
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Ground {
    pub fn ensure_owned_by(&self, user_id: UserId) -> AppResult<()> {
        ensure_owner(self.owner.owner_id, user_id)
    }
}

pub fn ensure_owner(owner_id: UserId, requested_user: UserId) -> AppResult<()> {
    if owner_id == requested_user {
        Ok(())
    } else {
        Err(AppError::ForbiddenOperation)
    }
}

// タグは前後の空白を除き、空文字と重複を取り除く（順序は入力順を保つ）
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
