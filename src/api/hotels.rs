//! Hotel and room endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{ChainAverage, Hotel, HotelInfo, Room},
    AppState,
};

/// List hotels with their available rooms
#[utoipa::path(
    get,
    path = "/hotel_info",
    tag = "hotels",
    responses(
        (status = 200, description = "Hotels with room availability", body = Vec<HotelInfo>)
    )
)]
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<HotelInfo>>> {
    let hotels = state.services.catalog.hotels().await?;
    Ok(Json(hotels))
}

/// List the rooms of a hotel
#[utoipa::path(
    get,
    path = "/hotel_info/room/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Rooms of the hotel", body = Vec<Room>)
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.catalog.rooms(hotel_id).await?;
    Ok(Json(rooms))
}

/// Average category per chain
#[utoipa::path(
    get,
    path = "/hotel_avg",
    tag = "hotels",
    responses(
        (status = 200, description = "Average rating per chain", body = Vec<ChainAverage>)
    )
)]
pub async fn chain_averages(State(state): State<AppState>) -> AppResult<Json<Vec<ChainAverage>>> {
    let averages = state.services.catalog.chain_averages().await?;
    Ok(Json(averages))
}

/// 5-star hotels of chains with no 1 or 2 star hotel
#[utoipa::path(
    get,
    path = "/five_star",
    tag = "hotels",
    responses(
        (status = 200, description = "Qualifying 5-star hotels", body = Vec<Hotel>)
    )
)]
pub async fn five_star(State(state): State<AppState>) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = state.services.catalog.five_star_hotels().await?;
    Ok(Json(hotels))
}
