use crate::database::{
    model::hotel::{rows_into_hotels, HotelRoomRow, RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{HotelWithRooms, RoomOccupancy},
    id::{HotelId, RoomId},
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<HotelWithRooms>> {
        let rows: Vec<HotelRoomRow> = sqlx::query_as(
            r#"
                SELECT
                    h.id AS hotel_id,
                    h.name AS hotel_name,
                    h.image,
                    r.id AS room_id,
                    r.name AS room_name,
                    r.capacity,
                    (SELECT COUNT(*) FROM bookings b WHERE b.room_id = r.id) AS booked_count
                FROM hotels h
                LEFT JOIN rooms r ON r.hotel_id = h.id
                ORDER BY h.id, r.id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows_into_hotels(rows))
    }

    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<RoomOccupancy>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    r.id AS room_id,
                    r.name,
                    r.capacity,
                    r.hotel_id,
                    (SELECT COUNT(*) FROM bookings b WHERE b.room_id = r.id) AS booked_count
                FROM rooms r
                WHERE r.hotel_id = $1
                ORDER BY r.id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(RoomOccupancy::from).collect())
    }

    async fn find_room_with_occupancy(
        &self,
        room_id: RoomId,
    ) -> AppResult<Option<RoomOccupancy>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    r.id AS room_id,
                    r.name,
                    r.capacity,
                    r.hotel_id,
                    (SELECT COUNT(*) FROM bookings b WHERE b.room_id = r.id) AS booked_count
                FROM rooms r
                WHERE r.id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(RoomOccupancy::from))
    }
}
