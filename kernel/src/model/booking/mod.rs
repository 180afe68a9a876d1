use crate::model::{
    hotel::{Hotel, RoomOccupancy},
    id::{BookingId, RoomId, UserId},
};

pub mod event;

// ユーザーと部屋を結ぶ予約。ユーザーは同時に高々 1 件だけ保持できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
}

// 照会経路向けの非正規化スナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking_id: BookingId,
    pub hotel: Hotel,
    pub room: RoomOccupancy,
}
