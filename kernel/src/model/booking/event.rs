use crate::model::id::{BookingId, RoomId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub room_id: RoomId,
}

#[derive(Debug, new)]
pub struct ChangeBookingRoom {
    pub booking_id: BookingId,
    pub room_id: RoomId,
}
