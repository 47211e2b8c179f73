//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, customers, health, hotels, rentings};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Booking API",
        version = "0.1.0",
        description = "Hotels, rooms, bookings and rentings REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Hotels
        hotels::list_hotels,
        hotels::list_rooms,
        hotels::chain_averages,
        hotels::five_star,
        // Customers
        customers::list_customers,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        bookings::check_in_booking,
        // Rentings
        rentings::list_rentings,
        rentings::create_renting,
        rentings::check_out_renting,
    ),
    components(
        schemas(
            crate::models::hotel::Hotel,
            crate::models::hotel::HotelInfo,
            crate::models::hotel::ChainAverage,
            crate::models::room::Room,
            crate::models::customer::Customer,
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::CreateBooking,
            crate::models::booking::CheckInResponse,
            crate::models::renting::Renting,
            crate::models::renting::CreateRenting,
            crate::models::renting::CheckOutResponse,
            crate::models::status::BookingStatus,
            crate::models::status::RentingStatus,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hotels", description = "Hotels, rooms and chain ratings"),
        (name = "customers", description = "Customer listing"),
        (name = "bookings", description = "Booking creation and check-in"),
        (name = "rentings", description = "Renting creation and check-out")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
