use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingCreatedResponse, BookingDetailsResponse, ChangeBookingRoomRequest,
        CreateBookingRequest,
    },
};
use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingDetailsResponse>> {
    registry
        .booking_service()
        .get_booking(user.id())
        .await
        .map(BookingDetailsResponse::from)
        .map(Json)
}

pub async fn reserve_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingCreatedResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .reserve_room(user.id(), req.room_id)
        .await
        .map(BookingCreatedResponse::from)
        .map(Json)
}

pub async fn change_room(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ChangeBookingRoomRequest>,
) -> AppResult<Json<BookingCreatedResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .change_room(user.id(), req.room_id, booking_id)
        .await
        .map(BookingCreatedResponse::from)
        .map(Json)
}
