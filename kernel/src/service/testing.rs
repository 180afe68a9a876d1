use crate::model::{
    booking::{
        event::{ChangeBookingRoom, CreateBooking},
        Booking, BookingDetails,
    },
    enrollment::Enrollment,
    hotel::{Hotel, HotelWithRooms, RoomOccupancy},
    id::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use crate::repository::{
    booking::BookingRepository, enrollment::EnrollmentRepository, hotel::HotelRepository,
    ticket::TicketRepository,
};
use async_trait::async_trait;
use shared::error::AppResult;
use std::sync::{Arc, Mutex};

struct RoomRecord {
    id: RoomId,
    name: String,
    capacity: i32,
    hotel_id: HotelId,
}

/// リポジトリトレイトのインメモリ実装。サービス層のテスト専用。
#[derive(Default)]
pub struct InMemoryStore {
    enrollments: Mutex<Vec<Enrollment>>,
    tickets: Mutex<Vec<Ticket>>,
    hotels: Mutex<Vec<Hotel>>,
    rooms: Mutex<Vec<RoomRecord>>,
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_enrollment(&self, user_id: UserId) -> EnrollmentId {
        let id = EnrollmentId::new();
        self.enrollments.lock().unwrap().push(Enrollment {
            id,
            user_id,
            name: "Test User".into(),
            cpf: "12345678900".into(),
            phone: "21999999999".into(),
            address: None,
        });
        id
    }

    pub fn add_ticket(
        &self,
        enrollment_id: EnrollmentId,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketId {
        let id = TicketId::new();
        self.tickets.lock().unwrap().push(Ticket {
            id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(),
                name: "Test Ticket".into(),
                price: 25_000,
                is_remote,
                includes_hotel,
            },
        });
        id
    }

    pub fn set_ticket_status(&self, ticket_id: TicketId, status: TicketStatus) {
        let mut tickets = self.tickets.lock().unwrap();
        if let Some(ticket) = tickets.iter_mut().find(|t| t.id == ticket_id) {
            ticket.status = status;
        }
    }

    pub fn add_hotel(&self, name: &str, image: &str) -> HotelId {
        let id = HotelId::new();
        self.hotels.lock().unwrap().push(Hotel {
            id,
            name: name.into(),
            image: image.into(),
        });
        id
    }

    pub fn add_room(&self, hotel_id: HotelId, name: &str, capacity: i32) -> RoomId {
        let id = RoomId::new();
        self.rooms.lock().unwrap().push(RoomRecord {
            id,
            name: name.into(),
            capacity,
            hotel_id,
        });
        id
    }

    pub fn add_booking(&self, user_id: UserId, room_id: RoomId) -> BookingId {
        let id = BookingId::new();
        self.bookings.lock().unwrap().push(Booking {
            id,
            user_id,
            room_id,
        });
        id
    }

    pub fn booking_count(&self, room_id: RoomId) -> i64 {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.room_id == room_id)
            .count() as i64
    }

    pub fn bookings_of_user(&self, user_id: UserId) -> usize {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .count()
    }

    fn occupancy(&self, record: &RoomRecord) -> RoomOccupancy {
        RoomOccupancy {
            id: record.id,
            name: record.name.clone(),
            capacity: record.capacity,
            hotel_id: record.hotel_id,
            booked_count: self.booking_count(record.id),
        }
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketRepository for InMemoryStore {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        Ok(self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl HotelRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<HotelWithRooms>> {
        let hotels = self.hotels.lock().unwrap().clone();
        Ok(hotels
            .into_iter()
            .map(|hotel| {
                let rooms = self
                    .rooms
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|r| r.hotel_id == hotel.id)
                    .map(|r| self.occupancy(r))
                    .collect();
                HotelWithRooms { hotel, rooms }
            })
            .collect())
    }

    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<RoomOccupancy>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .map(|r| self.occupancy(r))
            .collect())
    }

    async fn find_room_with_occupancy(
        &self,
        room_id: RoomId,
    ) -> AppResult<Option<RoomOccupancy>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| self.occupancy(r)))
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn find_details_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<BookingDetails>> {
        let booking = match self.find_by_user_id(user_id).await? {
            Some(b) => b,
            None => return Ok(None),
        };
        let room = self
            .find_room_with_occupancy(booking.room_id)
            .await?
            .expect("booking references an existing room");
        let hotel = self
            .hotels
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == room.hotel_id)
            .cloned()
            .expect("room references an existing hotel");
        Ok(Some(BookingDetails {
            booking_id: booking.id,
            hotel,
            room,
        }))
    }

    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        Ok(self.add_booking(event.user_id, event.room_id))
    }

    async fn update_room(&self, event: ChangeBookingRoom) -> AppResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        if let Some(booking) = bookings.iter_mut().find(|b| b.id == event.booking_id) {
            booking.room_id = event.room_id;
        }
        Ok(())
    }
}
