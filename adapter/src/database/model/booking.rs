use kernel::model::{
    booking::{Booking, BookingDetails},
    hotel::{Hotel, RoomOccupancy},
    id::{BookingId, HotelId, RoomId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            room_id,
        } = value;
        Booking {
            id: booking_id,
            user_id,
            room_id,
        }
    }
}

// 照会経路向け。予約・部屋・ホテルを 1 行に非正規化した結果。
#[derive(sqlx::FromRow)]
pub struct BookingDetailsRow {
    pub booking_id: BookingId,
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub booked_count: i64,
}

impl From<BookingDetailsRow> for BookingDetails {
    fn from(value: BookingDetailsRow) -> Self {
        let BookingDetailsRow {
            booking_id,
            hotel_id,
            hotel_name,
            image,
            room_id,
            room_name,
            capacity,
            booked_count,
        } = value;
        BookingDetails {
            booking_id,
            hotel: Hotel {
                id: hotel_id,
                name: hotel_name,
                image,
            },
            room: RoomOccupancy {
                id: room_id,
                name: room_name,
                capacity,
                hotel_id,
                booked_count,
            },
        }
    }
}
