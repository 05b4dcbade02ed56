use chrono::{DateTime, Utc};
use kernel::model::{
    ground::{Ground, GroundLocation, GroundOwner, GroundPrice},
    id::{GroundId, UserId},
};

// owner の情報は users と JOIN して取得する
pub const SELECT_GROUND: &str = r#"
    SELECT
        g.ground_id,
        g.owner_id,
        u.user_name AS owner_name,
        u.email AS owner_email,
        u.phone AS owner_phone,
        u.upi_id AS owner_upi_id,
        g.title,
        g.description,
        g.thumbnail,
        g.images,
        g.price_amount,
        g.price_currency,
        g.price_negotiable,
        g.sport_tags,
        g.facility_tags,
        g.address,
        g.lat,
        g.lng,
        g.available,
        g.created_at
    FROM grounds AS g
    INNER JOIN users AS u ON g.owner_id = u.user_id
"#;

#[derive(sqlx::FromRow)]
pub struct GroundRow {
    pub ground_id: GroundId,
    pub owner_id: UserId,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub owner_upi_id: Option<String>,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub price_amount: i64,
    pub price_currency: String,
    pub price_negotiable: bool,
    pub sport_tags: Vec<String>,
    pub facility_tags: Vec<String>,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<GroundRow> for Ground {
    fn from(value: GroundRow) -> Self {
        let GroundRow {
            ground_id,
            owner_id,
            owner_name,
            owner_email,
            owner_phone,
            owner_upi_id,
            title,
            description,
            thumbnail,
            images,
            price_amount,
            price_currency,
            price_negotiable,
            sport_tags,
            facility_tags,
            address,
            lat,
            lng,
            available,
            created_at,
        } = value;
        Ground {
            ground_id,
            owner: GroundOwner {
                owner_id,
                owner_name,
                email: owner_email,
                phone: owner_phone,
                upi_id: owner_upi_id,
            },
            title,
            description,
            thumbnail,
            images,
            price: GroundPrice {
                amount: price_amount,
                currency: price_currency,
                negotiable: price_negotiable,
            },
            sport_tags,
            facility_tags,
            location: GroundLocation { address, lat, lng },
            available,
            created_at,
        }
    }
}

// 予約作成時に必要な列だけを読む
#[derive(sqlx::FromRow)]
pub struct GroundAvailabilityRow {
    pub ground_id: GroundId,
    pub owner_id: UserId,
    pub price_amount: i64,
    pub available: bool,
}
