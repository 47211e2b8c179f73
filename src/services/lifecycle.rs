//! Booking and renting lifecycle: creation, check-in and check-out

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::LifecycleConfig,
    error::AppResult,
    models::{Booking, CreateBooking, CreateRenting, Renting},
    repository::Store,
};

#[derive(Clone)]
pub struct LifecycleService {
    store: Arc<dyn Store>,
    enforce_availability: bool,
}

impl LifecycleService {
    pub fn new(store: Arc<dyn Store>, config: LifecycleConfig) -> Self {
        Self {
            store,
            enforce_availability: config.enforce_availability,
        }
    }

    /// Create a booking for a customer
    pub async fn create_booking(&self, booking: CreateBooking) -> AppResult<Booking> {
        booking.validate()?;
        booking.stay()?;

        let created = self
            .store
            .create_booking(&booking, self.enforce_availability)
            .await?;

        tracing::info!(
            booking_id = created.booking_id,
            hotel_id = created.hotel_id,
            room_number = created.room_number,
            "Booking created"
        );
        Ok(created)
    }

    /// Record a renting, either walk-in or from an existing booking
    pub async fn create_renting(&self, renting: CreateRenting) -> AppResult<Renting> {
        renting.validate()?;
        renting.stay()?;

        let created = self
            .store
            .create_renting(&renting, self.enforce_availability)
            .await?;

        tracing::info!(
            renting_id = created.renting_id,
            booking_id = ?created.booking_id,
            employee_id = created.employee_id,
            "Renting created"
        );
        Ok(created)
    }

    /// Set a booking active
    pub async fn check_in(&self, booking_id: i32) -> AppResult<Booking> {
        let booking = self.store.check_in_booking(booking_id).await?;
        tracing::info!(booking_id, "Booking checked in");
        Ok(booking)
    }

    /// Complete a renting together with its source booking
    pub async fn check_out(&self, renting_id: i32) -> AppResult<(Renting, Option<Booking>)> {
        let (renting, booking) = self.store.check_out_renting(renting_id).await?;
        tracing::info!(
            renting_id,
            booking_id = ?booking.as_ref().map(|b| b.booking_id),
            "Renting checked out"
        );
        Ok((renting, booking))
    }
}
