use crate::model::{
    booking::{
        event::{ChangeBookingRoom, CreateBooking},
        Booking, BookingDetails,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザーの現在の予約を取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // ユーザーの現在の予約を、ホテル・部屋のスナップショット付きで取得する
    async fn find_details_by_user_id(&self, user_id: UserId)
        -> AppResult<Option<BookingDetails>>;
    // 予約を作成する。定員と重複予約の検査は実装側でも再検査される。
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 既存予約の部屋を付け替える
    async fn update_room(&self, event: ChangeBookingRoom) -> AppResult<()>;
}
