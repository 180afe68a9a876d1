use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    // 予約経路の業務ルール違反はすべてこの一種類に畳み込む
    #[error("{0}")]
    ForbiddenOperation(String),
    // ホテル閲覧経路のみで使う、チケット区分の不一致
    #[error("{0}")]
    UnauthorizedTicket(String),
    // ホテル閲覧経路のみで使う、チケット未決済・未登録
    #[error("{0}")]
    PaymentRequiredError(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("認証情報が正しくありません。")]
    UnauthenticatedError,
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理の実行に失敗しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::UnauthorizedTicket(_) | AppError::UnauthenticatedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::PaymentRequiredError(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}
