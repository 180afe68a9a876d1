use crate::model::{enrollment::Enrollment, id::UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    // ユーザー ID に紐づく参加登録を住所付きで取得する
    async fn find_with_address_by_user_id(&self, user_id: UserId)
        -> AppResult<Option<Enrollment>>;
}
