//! API handlers for the hotel booking REST endpoints

pub mod bookings;
pub mod customers;
pub mod health;
pub mod hotels;
pub mod openapi;
pub mod rentings;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    routing::{get, post, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON request body; a missing content type or an undecodable body is a 400
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // Browser clients are served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Hotels and rooms
        .route("/hotel_info", get(hotels::list_hotels))
        .route("/hotel_info/room/:hotel_id", get(hotels::list_rooms))
        .route("/hotel_avg", get(hotels::chain_averages))
        .route("/five_star", get(hotels::five_star))
        // Customers
        .route("/customer_info", get(customers::list_customers))
        // Bookings
        .route("/bookings_info", get(bookings::list_bookings))
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/:id", put(bookings::check_in_booking))
        // Rentings
        .route("/rentings_info", get(rentings::list_rentings))
        .route("/rentings", post(rentings::create_renting))
        .route("/rentings/:id", put(rentings::check_out_renting))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
