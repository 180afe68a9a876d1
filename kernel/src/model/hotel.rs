use crate::model::id::{HotelId, RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

// 部屋と、その部屋を現在参照している予約の件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub booked_count: i64,
}

impl RoomOccupancy {
    pub fn is_full(&self) -> bool {
        self.booked_count >= i64::from(self.capacity)
    }
}

#[derive(Debug, Clone)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<RoomOccupancy>,
}

// ホテル単位の空室集計。部屋ごとの空き（capacity - bookings）の総和をとる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelSummary {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub max_room_capacity: i32,
    pub available_vacancies: i64,
}

impl From<HotelWithRooms> for HotelSummary {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        let max_room_capacity = rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
        let available_vacancies = rooms
            .iter()
            .map(|r| i64::from(r.capacity) - r.booked_count)
            .sum();
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            max_room_capacity,
            available_vacancies,
        }
    }
}
