use crate::model::hotel::{HotelResponse, RoomResponse};
use garde::Validate;
use kernel::model::{
    booking::BookingDetails,
    id::{BookingId, RoomId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
}

// 部屋の付け替えもボディは作成時と同じ形
pub type ChangeBookingRoomRequest = CreateBookingRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for BookingCreatedResponse {
    fn from(value: BookingId) -> Self {
        Self { booking_id: value }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailsResponse {
    pub booking_id: BookingId,
    pub hotel: HotelResponse,
    pub room: RoomResponse,
}

impl From<BookingDetails> for BookingDetailsResponse {
    fn from(value: BookingDetails) -> Self {
        let BookingDetails {
            booking_id,
            hotel,
            room,
        } = value;
        Self {
            booking_id,
            hotel: hotel.into(),
            room: room.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{
        hotel::{Hotel, RoomOccupancy},
        id::HotelId,
    };

    #[test]
    fn create_booking_request_accepts_camel_case_room_id() {
        let room_id = RoomId::new();
        let body = format!(r#"{{"roomId":"{room_id}"}}"#);

        let req: CreateBookingRequest = serde_json::from_str(&body).unwrap();

        assert_eq!(req.room_id, room_id);
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn create_booking_request_rejects_malformed_room_id() {
        let res = serde_json::from_str::<CreateBookingRequest>(r#"{"roomId":"not-a-uuid"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn booking_details_response_nests_hotel_and_room() {
        let hotel_id = HotelId::new();
        let details = BookingDetails {
            booking_id: BookingId::new(),
            hotel: Hotel {
                id: hotel_id,
                name: "Driven Resort".into(),
                image: "https://example.com/resort.png".into(),
            },
            room: RoomOccupancy {
                id: RoomId::new(),
                name: "101".into(),
                capacity: 2,
                hotel_id,
                booked_count: 1,
            },
        };

        let json = serde_json::to_value(BookingDetailsResponse::from(details)).unwrap();

        assert!(json.get("bookingId").is_some());
        assert_eq!(json["hotel"]["name"], "Driven Resort");
        assert_eq!(json["room"]["bookeds"], 1);
    }
}
