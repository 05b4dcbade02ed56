use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidPathParameter(String),
    #[error("{0}")]
    ListingUnavailable(String),
    #[error("{0}")]
    BookingAlreadyDecided(String),
    #[error("{0}")]
    DuplicateContact(String),
    #[error("{0}")]
    ForbiddenRole(String),
    #[error("許可されていない操作です")]
    ForbiddenOperation,
    #[error("認証情報が確認できませんでした")]
    UnauthenticatedError,
    #[error("メールアドレスまたはパスワードが誤っています")]
    InvalidCredentials,
    #[error("{0}")]
    RenderingUnavailable(String),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    PasswordHashError(String),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    /// Stable machine-readable code returned in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnprocessableEntity(_) => "UNPROCESSABLE_ENTITY",
            AppError::EntityNotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_)
            | AppError::InvalidPathParameter(_)
            | AppError::ConvertToUuidError(_) => "VALIDATION_FAILED",
            AppError::ListingUnavailable(_) => "LISTING_UNAVAILABLE",
            AppError::BookingAlreadyDecided(_) => "BOOKING_ALREADY_DECIDED",
            AppError::DuplicateContact(_) => "DUPLICATE_CONTACT",
            AppError::ForbiddenRole(_) => "FORBIDDEN_ROLE",
            AppError::ForbiddenOperation => "FORBIDDEN",
            AppError::UnauthenticatedError => "UNAUTHENTICATED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::RenderingUnavailable(_) => "RENDERING_UNAVAILABLE",
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::PasswordHashError(_)
            | AppError::ConversionEntityError(_) => "INTERNAL",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidPathParameter(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::ListingUnavailable(_)
            | AppError::BookingAlreadyDecided(_)
            | AppError::DuplicateContact(_) => StatusCode::CONFLICT,
            AppError::ForbiddenRole(_) | AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::RenderingUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::PasswordHashError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            match self {
                AppError::RenderingUnavailable(ref m) => m.clone(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        (
            status_code,
            Json(json!({ "code": self.code(), "message": message })),
        )
            .into_response()
    }
}

// axum の抽出失敗もエラーボディの形式をそろえる
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPathParameter(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn domain_errors_have_distinct_codes() {
        let errors = [
            AppError::UnauthenticatedError,
            AppError::ForbiddenRole("owner".into()),
            AppError::ForbiddenOperation,
            AppError::EntityNotFound("ground".into()),
            AppError::ListingUnavailable("ground".into()),
            AppError::DuplicateContact("a@example.com".into()),
            AppError::InvalidCredentials,
            AppError::RenderingUnavailable("qr".into()),
            AppError::BookingAlreadyDecided("booking".into()),
        ];
        let codes: HashSet<_> = errors.iter().map(AppError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::UnauthenticatedError.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::ForbiddenRole("renter".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::ListingUnavailable("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::RenderingUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::NoRowsAffectedError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
