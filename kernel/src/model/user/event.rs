use crate::model::role::Role;

#[derive(Debug)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
    pub upi_id: Option<String>,
}
