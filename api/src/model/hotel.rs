use kernel::model::{
    hotel::{Hotel, HotelSummary, RoomOccupancy},
    id::{HotelId, RoomId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummaryResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub max_room_capacity: i32,
    pub available_vacancies: i64,
}

impl From<HotelSummary> for HotelSummaryResponse {
    fn from(value: HotelSummary) -> Self {
        let HotelSummary {
            id,
            name,
            image,
            max_room_capacity,
            available_vacancies,
        } = value;
        Self {
            id,
            name,
            image,
            max_room_capacity,
            available_vacancies,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel { id, name, image } = value;
        Self { id, name, image }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub bookeds: i64,
}

impl From<RoomOccupancy> for RoomResponse {
    fn from(value: RoomOccupancy) -> Self {
        let RoomOccupancy {
            id,
            name,
            capacity,
            hotel_id,
            booked_count,
        } = value;
        Self {
            id,
            name,
            capacity,
            hotel_id,
            bookeds: booked_count,
        }
    }
}
