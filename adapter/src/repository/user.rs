use crate::{
    database::{model::user::UserRow, ConnectionPool},
    password::hash_password_blocking,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{event::CreateUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let password_hash = hash_password_blocking(event.password).await?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, phone, password_hash, role, upi_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .bind(&event.upi_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            // email の UNIQUE 制約違反
            sqlx::Error::Database(ref db) if db.is_unique_violation() => AppError::DuplicateContact(
                format!("メールアドレス（{}）はすでに登録されています", event.email),
            ),
            e => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        tracing::info!(user.id = %user_id, user.role = %event.role, "user signed up");

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            phone: event.phone,
            role: event.role,
            upi_id: event.upi_id,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, user_name, email, phone, role, upi_id
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }
}
