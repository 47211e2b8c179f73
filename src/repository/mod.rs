//! Repository layer for database operations
//!
//! Handlers reach the data through the [`Store`] trait so that the PostgreSQL
//! [`Repository`] can be swapped for the in-memory store (`memory-store`
//! feature) in tests.

pub mod bookings;
pub mod customers;
pub mod hotels;
#[cfg(any(test, feature = "memory-store"))]
pub mod memory;
pub mod rentings;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        Booking, BookingDetails, ChainAverage, CreateBooking, CreateRenting, Customer, Hotel,
        HotelInfo, Renting, Room,
    },
};

/// Everything the services need from persistent storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Check the backing store is reachable
    async fn ping(&self) -> AppResult<()>;

    /// Hotels with the count of their rooms free today
    async fn list_hotels(&self) -> AppResult<Vec<HotelInfo>>;
    async fn list_rooms(&self, hotel_id: i32) -> AppResult<Vec<Room>>;
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;
    async fn list_bookings(&self) -> AppResult<Vec<BookingDetails>>;
    async fn list_rentings(&self) -> AppResult<Vec<Renting>>;
    /// Average category per chain
    async fn chain_averages(&self) -> AppResult<Vec<ChainAverage>>;
    /// 5-star hotels whose chain has no 1 or 2 star hotel
    async fn five_star_hotels(&self) -> AppResult<Vec<Hotel>>;

    /// Insert a booking. With `enforce_availability`, a room-holding booking
    /// that overlaps another hold on the same room is a conflict.
    async fn create_booking(
        &self,
        booking: &CreateBooking,
        enforce_availability: bool,
    ) -> AppResult<Booking>;

    /// Insert a renting. The source booking, if any, does not count against it.
    async fn create_renting(
        &self,
        renting: &CreateRenting,
        enforce_availability: bool,
    ) -> AppResult<Renting>;

    /// Mark a scheduled or active booking active
    async fn check_in_booking(&self, booking_id: i32) -> AppResult<Booking>;

    /// Complete a renting and its source booking together, or neither
    async fn check_out_renting(&self, renting_id: i32) -> AppResult<(Renting, Option<Booking>)>;
}

/// PostgreSQL repository holding the connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_hotels(&self) -> AppResult<Vec<HotelInfo>> {
        self.hotels_list_with_availability().await
    }

    async fn list_rooms(&self, hotel_id: i32) -> AppResult<Vec<Room>> {
        self.rooms_for_hotel(hotel_id).await
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.customers_list().await
    }

    async fn list_bookings(&self) -> AppResult<Vec<BookingDetails>> {
        self.bookings_list_details().await
    }

    async fn list_rentings(&self) -> AppResult<Vec<Renting>> {
        self.rentings_list().await
    }

    async fn chain_averages(&self) -> AppResult<Vec<ChainAverage>> {
        self.hotels_chain_averages().await
    }

    async fn five_star_hotels(&self) -> AppResult<Vec<Hotel>> {
        self.hotels_five_star().await
    }

    async fn create_booking(
        &self,
        booking: &CreateBooking,
        enforce_availability: bool,
    ) -> AppResult<Booking> {
        self.bookings_create(booking, enforce_availability).await
    }

    async fn create_renting(
        &self,
        renting: &CreateRenting,
        enforce_availability: bool,
    ) -> AppResult<Renting> {
        self.rentings_create(renting, enforce_availability).await
    }

    async fn check_in_booking(&self, booking_id: i32) -> AppResult<Booking> {
        self.bookings_check_in(booking_id).await
    }

    async fn check_out_renting(&self, renting_id: i32) -> AppResult<(Renting, Option<Booking>)> {
        self.rentings_check_out(renting_id).await
    }
}
