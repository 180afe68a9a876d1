use crate::database::{
    model::{
        booking::{BookingDetailsRow, BookingRow},
        hotel::RoomRow,
    },
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{ChangeBookingRoom, CreateBooking},
        Booking, BookingDetails,
    },
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // 割り当ての直前に、対象の部屋の存在と空きをトランザクション内で再検査する。
    // サービス層の検査と同じ条件だが、こちらが最後の一席をめぐる競合を塞ぐ。
    async fn check_room_has_space(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
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
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let room = match row {
            None => {
                return Err(AppError::EntityNotFound(format!(
                    "部屋（{room_id}）が見つかりませんでした。"
                )))
            }
            Some(r) => r,
        };

        if room.booked_count >= i64::from(room.capacity) {
            return Err(AppError::ForbiddenOperation(format!(
                "部屋（{room_id}）は満室です。"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.id AS booking_id,
                    b.user_id,
                    b.room_id
                FROM bookings b
                WHERE b.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn find_details_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<BookingDetails>> {
        let row: Option<BookingDetailsRow> = sqlx::query_as(
            r#"
                SELECT
                    b.id AS booking_id,
                    h.id AS hotel_id,
                    h.name AS hotel_name,
                    h.image,
                    r.id AS room_id,
                    r.name AS room_name,
                    r.capacity,
                    (SELECT COUNT(*) FROM bookings b2 WHERE b2.room_id = r.id) AS booked_count
                FROM bookings b
                INNER JOIN rooms r ON r.id = b.room_id
                INNER JOIN hotels h ON h.id = r.hotel_id
                WHERE b.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(BookingDetails::from))
    }

    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        self.check_room_has_space(&mut tx, event.room_id).await?;

        // 1 ユーザー 1 予約の再検査
        let held: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM bookings WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if held > 0 {
            return Err(AppError::ForbiddenOperation(format!(
                "ユーザー（{}）はすでに予約を保持しています。",
                event.user_id
            )));
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings (id, user_id, room_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(booking_id)
        .bind(event.user_id)
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn update_room(&self, event: ChangeBookingRoom) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        self.check_room_has_space(&mut tx, event.room_id).await?;

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $2
                WHERE id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)
    }
}
