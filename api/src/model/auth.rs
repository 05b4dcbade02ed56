use crate::model::user::{RoleName, UserResponse};
use garde::Validate;
use kernel::model::{id::UserId, user::event::CreateUser};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub role: RoleName,
    #[garde(length(min = 1))]
    pub upi_id: Option<String>,
}

impl From<SignupRequest> for CreateUser {
    fn from(value: SignupRequest) -> Self {
        let SignupRequest {
            name,
            email,
            password,
            phone,
            role,
            upi_id,
        } = value;
        CreateUser {
            user_name: name,
            email,
            phone,
            password,
            role: role.into(),
            upi_id,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub user_id: UserId,
    pub access_token: String,
    pub user: UserResponse,
}
