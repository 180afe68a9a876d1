use crate::model::{
    hotel::{HotelSummary, RoomOccupancy},
    id::{HotelId, UserId},
};
use crate::repository::hotel::HotelRepository;
use crate::service::eligibility::HotelAccess;
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// ホテルカタログの読み取り。部屋の定員をホテル単位の空室情報へ集計する。
#[derive(new, Clone)]
pub struct HotelService {
    access: HotelAccess,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub async fn list_hotels(&self, user_id: UserId) -> AppResult<Vec<HotelSummary>> {
        self.access.check(user_id).await?;

        let hotels = self.hotel_repository.find_all().await?;

        // 集計はホテルごとに独立。空きは部屋単位の (capacity - bookings) の総和。
        Ok(hotels.into_iter().map(HotelSummary::from).collect())
    }

    pub async fn list_rooms(
        &self,
        hotel_id: HotelId,
        user_id: UserId,
    ) -> AppResult<Vec<RoomOccupancy>> {
        self.access.check(user_id).await?;

        let rooms = self
            .hotel_repository
            .find_rooms_by_hotel_id(hotel_id)
            .await?;

        // 存在しないホテルも部屋ゼロのホテルも NotFound として扱う
        if rooms.is_empty() {
            return Err(AppError::EntityNotFound(format!(
                "ホテル（{hotel_id}）の部屋が見つかりませんでした。"
            )));
        }

        Ok(rooms)
    }
}
