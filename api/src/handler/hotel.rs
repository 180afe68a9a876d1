use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelSummaryResponse, RoomResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelSummaryResponse>>> {
    registry
        .hotel_service()
        .list_hotels(user.id())
        .await
        .map(|hotels| {
            Json(
                hotels
                    .into_iter()
                    .map(HotelSummaryResponse::from)
                    .collect(),
            )
        })
}

pub async fn show_hotel_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .hotel_service()
        .list_rooms(hotel_id, user.id())
        .await
        .map(|rooms| Json(rooms.into_iter().map(RoomResponse::from).collect()))
}
