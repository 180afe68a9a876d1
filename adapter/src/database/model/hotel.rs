use kernel::model::{
    hotel::{Hotel, HotelWithRooms, RoomOccupancy},
    id::{HotelId, RoomId},
};

// hotels と rooms の LEFT JOIN 結果。部屋を持たないホテルでは部屋列が NULL。
#[derive(sqlx::FromRow)]
pub struct HotelRoomRow {
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub room_id: Option<RoomId>,
    pub room_name: Option<String>,
    pub capacity: Option<i32>,
    pub booked_count: Option<i64>,
}

// ホテル ID 順に並んだ行をホテル単位へ畳み込む
pub fn rows_into_hotels(rows: Vec<HotelRoomRow>) -> Vec<HotelWithRooms> {
    let mut hotels: Vec<HotelWithRooms> = Vec::new();

    for row in rows {
        let HotelRoomRow {
            hotel_id,
            hotel_name,
            image,
            room_id,
            room_name,
            capacity,
            booked_count,
        } = row;

        if hotels.last().map(|h| h.hotel.id) != Some(hotel_id) {
            hotels.push(HotelWithRooms {
                hotel: Hotel {
                    id: hotel_id,
                    name: hotel_name,
                    image,
                },
                rooms: Vec::new(),
            });
        }

        if let (Some(id), Some(name), Some(capacity), Some(booked_count)) =
            (room_id, room_name, capacity, booked_count)
        {
            if let Some(current) = hotels.last_mut() {
                current.rooms.push(RoomOccupancy {
                    id,
                    name,
                    capacity,
                    hotel_id,
                    booked_count,
                });
            }
        }
    }

    hotels
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub booked_count: i64,
}

impl From<RoomRow> for RoomOccupancy {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            name,
            capacity,
            hotel_id,
            booked_count,
        } = value;
        RoomOccupancy {
            id: room_id,
            name,
            capacity,
            hotel_id,
            booked_count,
        }
    }
}
