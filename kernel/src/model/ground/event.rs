use crate::model::id::{GroundId, UserId};

#[derive(Debug)]
pub struct CreateGround {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub price_amount: i64,
    pub negotiable: bool,
    pub sport_tags: Vec<String>,
    pub facility_tags: Vec<String>,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

// None のフィールドは更新しない
#[derive(Debug, Default)]
pub struct UpdateGround {
    pub ground_id: GroundId,
    pub requested_user: UserId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
    pub price_amount: Option<i64>,
    pub negotiable: Option<bool>,
    pub sport_tags: Option<Vec<String>>,
    pub facility_tags: Option<Vec<String>>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub available: Option<bool>,
}
