use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{change_room, reserve_room, show_booking};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", get(show_booking))
        .route("/", post(reserve_room))
        .route("/:booking_id", put(change_room));

    Router::new().nest("/booking", booking_routers)
}
