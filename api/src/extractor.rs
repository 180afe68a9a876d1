use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use jsonwebtoken::{decode, DecodingKey, Validation};
use kernel::model::id::UserId;
use registry::AppRegistry;
use serde::{Deserialize, Serialize};
use shared::error::AppError;

/// Bearer トークンを検証して取り出した認証済みユーザー。
/// セッションストアの照会は行わず、クレームのユーザー ID をそのまま使う。
pub struct AuthorizedUser {
    user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub exp: usize,
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::UnauthenticatedError)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::UnauthenticatedError)?;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(registry.jwt_secret().as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::UnauthenticatedError)?;

        Ok(Self {
            user_id: token_data.claims.sub,
        })
    }
}
