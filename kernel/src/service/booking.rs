use crate::model::{
    booking::{
        event::{ChangeBookingRoom, CreateBooking},
        BookingDetails,
    },
    id::{BookingId, RoomId, UserId},
};
use crate::repository::{booking::BookingRepository, hotel::HotelRepository};
use crate::service::eligibility::BookingEligibility;
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// 部屋の割り当てと予約の照会。
///
/// 定員は固定の上限であり、満室の部屋に予約が入ることはない。
/// 検査はここで行い、ストア側（adapter）のトランザクションが同じ条件を
/// 再検査して最後の一席をめぐる競合を塞ぐ。
#[derive(new, Clone)]
pub struct BookingService {
    eligibility: BookingEligibility,
    hotel_repository: Arc<dyn HotelRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    /// 予約照会。資格判定は行わず、予約がなければ NotFound を返す。
    pub async fn get_booking(&self, user_id: UserId) -> AppResult<BookingDetails> {
        self.booking_repository
            .find_details_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "ユーザー（{user_id}）の予約が見つかりませんでした。"
                ))
            })
    }

    pub async fn reserve_room(&self, user_id: UserId, room_id: RoomId) -> AppResult<BookingId> {
        self.eligibility.check(user_id).await?;

        let room = self
            .hotel_repository
            .find_room_with_occupancy(room_id)
            .await?
            .ok_or_else(|| room_not_found(room_id))?;

        if room.is_full() {
            return Err(AppError::ForbiddenOperation(format!(
                "部屋（{room_id}）は満室です。"
            )));
        }

        if self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::ForbiddenOperation(format!(
                "ユーザー（{user_id}）はすでに予約を保持しています。"
            )));
        }

        self.booking_repository
            .create(CreateBooking::new(user_id, room_id))
            .await
    }

    pub async fn change_room(
        &self,
        user_id: UserId,
        room_id: RoomId,
        booking_id: BookingId,
    ) -> AppResult<BookingId> {
        self.eligibility.check(user_id).await?;

        // 自分の現在の予約で、かつパスで指定された予約であることを確認する
        let current = self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .filter(|b| b.id == booking_id)
            .ok_or_else(|| {
                AppError::ForbiddenOperation(format!(
                    "予約（{booking_id}）はユーザー（{user_id}）のものではありません。"
                ))
            })?;

        // 同じ部屋への移動は受け付けない（方針は DESIGN.md に記載）
        if current.room_id == room_id {
            return Err(AppError::ForbiddenOperation(format!(
                "すでに部屋（{room_id}）を予約しています。"
            )));
        }

        let room = self
            .hotel_repository
            .find_room_with_occupancy(room_id)
            .await?
            .ok_or_else(|| room_not_found(room_id))?;

        if room.is_full() {
            return Err(AppError::ForbiddenOperation(format!(
                "部屋（{room_id}）は満室です。"
            )));
        }

        self.booking_repository
            .update_room(ChangeBookingRoom::new(booking_id, room_id))
            .await?;

        Ok(booking_id)
    }
}

fn room_not_found(room_id: RoomId) -> AppError {
    AppError::EntityNotFound(format!("部屋（{room_id}）が見つかりませんでした。"))
}
