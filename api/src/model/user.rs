use kernel::model::{
    id::UserId,
    role::Role,
    user::{User, UserSummary},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoleName {
    #[default]
    Renter,
    Owner,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Renter => Self::Renter,
            Role::Owner => Self::Owner,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Renter => Self::Renter,
            RoleName::Owner => Self::Owner,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: RoleName,
    pub upi_id: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            phone,
            role,
            upi_id,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            phone,
            role: RoleName::from(role),
            upi_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(value: UserSummary) -> Self {
        let UserSummary {
            user_id,
            user_name,
            email,
            phone,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            phone,
        }
    }
}
