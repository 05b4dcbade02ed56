use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub upi_id: Option<String>,
}

// 一覧や予約に埋め込む利用者の要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<User> for UserSummary {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            phone,
            ..
        } = value;
        Self {
            user_id,
            user_name,
            email,
            phone,
        }
    }
}
