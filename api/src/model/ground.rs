use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    ground::{
        event::{CreateGround, UpdateGround},
        Ground, GroundLocation, GroundOwner, GroundPrice,
    },
    id::{GroundId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroundRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    pub thumbnail: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub images: Vec<String>,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub amount: i64,
    #[garde(skip)]
    #[serde(default)]
    pub negotiable: bool,
    #[garde(skip)]
    #[serde(default)]
    pub sport_tags: Vec<String>,
    #[garde(skip)]
    #[serde(default)]
    pub facility_tags: Vec<String>,
    #[garde(skip)]
    #[serde(default)]
    pub address: String,
    #[garde(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[garde(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}

#[derive(new)]
pub struct CreateGroundRequestWithOwner(UserId, CreateGroundRequest);

impl From<CreateGroundRequestWithOwner> for CreateGround {
    fn from(value: CreateGroundRequestWithOwner) -> Self {
        let CreateGroundRequestWithOwner(
            owner_id,
            CreateGroundRequest {
                title,
                description,
                thumbnail,
                images,
                amount,
                negotiable,
                sport_tags,
                facility_tags,
                address,
                lat,
                lng,
            },
        ) = value;
        CreateGround {
            owner_id,
            title,
            description,
            thumbnail,
            images,
            price_amount: amount,
            negotiable,
            sport_tags,
            facility_tags,
            address,
            lat,
            lng,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroundRequest {
    #[garde(length(min = 1))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub thumbnail: Option<String>,
    #[garde(skip)]
    pub images: Option<Vec<String>>,
    #[garde(range(min = 0))]
    pub amount: Option<i64>,
    #[garde(skip)]
    pub negotiable: Option<bool>,
    #[garde(skip)]
    pub sport_tags: Option<Vec<String>>,
    #[garde(skip)]
    pub facility_tags: Option<Vec<String>>,
    #[garde(skip)]
    pub address: Option<String>,
    #[garde(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[garde(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[garde(skip)]
    pub available: Option<bool>,
}

#[derive(new)]
pub struct UpdateGroundRequestWithIds(GroundId, UserId, UpdateGroundRequest);

impl From<UpdateGroundRequestWithIds> for UpdateGround {
    fn from(value: UpdateGroundRequestWithIds) -> Self {
        let UpdateGroundRequestWithIds(
            ground_id,
            requested_user,
            UpdateGroundRequest {
                title,
                description,
                thumbnail,
                images,
                amount,
                negotiable,
                sport_tags,
                facility_tags,
                address,
                lat,
                lng,
                available,
            },
        ) = value;
        UpdateGround {
            ground_id,
            requested_user,
            title,
            description,
            thumbnail,
            images,
            price_amount: amount,
            negotiable,
            sport_tags,
            facility_tags,
            address,
            lat,
            lng,
            available,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundsResponse {
    pub items: Vec<GroundResponse>,
}

impl From<Vec<Ground>> for GroundsResponse {
    fn from(value: Vec<Ground>) -> Self {
        Self {
            items: value.into_iter().map(GroundResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundResponse {
    pub id: GroundId,
    pub owner: GroundOwnerResponse,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub price: GroundPriceResponse,
    pub sport_tags: Vec<String>,
    pub facility_tags: Vec<String>,
    pub location: GroundLocationResponse,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Ground> for GroundResponse {
    fn from(value: Ground) -> Self {
        let Ground {
            ground_id,
            owner,
            title,
            description,
            thumbnail,
            images,
            price,
            sport_tags,
            facility_tags,
            location,
            available,
            created_at,
        } = value;
        Self {
            id: ground_id,
            owner: owner.into(),
            title,
            description,
            thumbnail,
            images,
            price: price.into(),
            sport_tags,
            facility_tags,
            location: location.into(),
            available,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundOwnerResponse {
    pub owner_id: UserId,
    pub owner_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub upi_id: Option<String>,
}

impl From<GroundOwner> for GroundOwnerResponse {
    fn from(value: GroundOwner) -> Self {
        let GroundOwner {
            owner_id,
            owner_name,
            email,
            phone,
            upi_id,
        } = value;
        Self {
            owner_id,
            owner_name,
            email,
            phone,
            upi_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundPriceResponse {
    pub amount: i64,
    pub currency: String,
    pub negotiable: bool,
}

impl From<GroundPrice> for GroundPriceResponse {
    fn from(value: GroundPrice) -> Self {
        let GroundPrice {
            amount,
            currency,
            negotiable,
        } = value;
        Self {
            amount,
            currency,
            negotiable,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundLocationResponse {
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<GroundLocation> for GroundLocationResponse {
    fn from(value: GroundLocation) -> Self {
        let GroundLocation { address, lat, lng } = value;
        Self { address, lat, lng }
    }
}
