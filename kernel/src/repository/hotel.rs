use crate::model::{
    hotel::{HotelWithRooms, RoomOccupancy},
    id::{HotelId, RoomId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    // 全ホテルを、部屋の定員・予約件数付きで取得する
    async fn find_all(&self) -> AppResult<Vec<HotelWithRooms>>;
    // ホテルに属する部屋一覧を予約件数付きで取得する
    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<RoomOccupancy>>;
    // 部屋を現在の予約件数付きで取得する
    async fn find_room_with_occupancy(&self, room_id: RoomId)
        -> AppResult<Option<RoomOccupancy>>;
}
