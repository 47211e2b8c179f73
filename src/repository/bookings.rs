//! Booking domain methods on Repository

use sqlx::PgConnection;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingDetails, CreateBooking, StayRange},
};

impl Repository {
    /// List bookings joined with their customer and hotel
    pub async fn bookings_list_details(&self) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query_as::<_, BookingDetails>(
            r#"
            SELECT b.*, c.full_name, h.chain_name, h.street_number, h.street_name,
                   h.city, h.province_state
            FROM bookings b
            JOIN customers c ON c.customer_id = b.customer_id
            JOIN hotels h ON h.hotel_id = b.hotel_id
            ORDER BY b.booking_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a booking, checking room availability in the same transaction
    pub async fn bookings_create(
        &self,
        booking: &CreateBooking,
        enforce_availability: bool,
    ) -> AppResult<Booking> {
        let stay = booking.stay()?;
        let mut tx = self.pool.begin().await?;

        lock_room(&mut tx, booking.hotel_id, booking.room_number).await?;
        if enforce_availability && booking.status.holds_room() {
            if room_is_held(&mut tx, booking.hotel_id, booking.room_number, stay, None).await? {
                return Err(AppError::Conflict(format!(
                    "Room {} of hotel {} is already taken between {} and {}",
                    booking.room_number, booking.hotel_id, stay.start, stay.end
                )));
            }
        }

        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (status, customer_id, start_date, end_date, room_number, hotel_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(booking.status.as_str())
        .bind(booking.customer_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.room_number)
        .bind(booking.hotel_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Check a booking in
    pub async fn bookings_check_in(&self, booking_id: i32) -> AppResult<Booking> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET status = 'active', updated_at = NOW()
            WHERE booking_id = $1 AND status IN ('scheduled', 'active')
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(booking) = updated {
            return Ok(booking);
        }

        let current: Option<String> =
            sqlx::query_scalar("SELECT status FROM bookings WHERE booking_id = $1")
                .bind(booking_id)
                .fetch_optional(&self.pool)
                .await?;

        match current {
            None => Err(AppError::NotFound(format!("Booking {} not found", booking_id))),
            Some(status) => Err(AppError::Conflict(format!(
                "Booking {} is {} and cannot be checked in",
                booking_id, status
            ))),
        }
    }
}

/// Lock the room row so concurrent availability checks on it serialize
pub(super) async fn lock_room(
    conn: &mut PgConnection,
    hotel_id: i32,
    room_number: i32,
) -> AppResult<()> {
    sqlx::query_scalar::<_, i32>(
        "SELECT room_number FROM rooms WHERE hotel_id = $1 AND room_number = $2 FOR UPDATE",
    )
    .bind(hotel_id)
    .bind(room_number)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!("Room {} of hotel {} not found", room_number, hotel_id))
    })?;
    Ok(())
}

/// Whether a scheduled/active booking or an open renting holds the room
/// during any day of `stay`
pub(super) async fn room_is_held(
    conn: &mut PgConnection,
    hotel_id: i32,
    room_number: i32,
    stay: StayRange,
    ignore_booking: Option<i32>,
) -> AppResult<bool> {
    let held: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM bookings b
            WHERE b.hotel_id = $1 AND b.room_number = $2
              AND b.status IN ('scheduled', 'active')
              AND ($5::int4 IS NULL OR b.booking_id <> $5)
              AND b.start_date < $4
              AND GREATEST(b.end_date, b.start_date + 1) > $3
        ) OR EXISTS (
            SELECT 1 FROM rentings t
            WHERE t.hotel_id = $1 AND t.room_number = $2
              AND t.status = 'open'
              AND t.start_date < $4
              AND GREATEST(t.end_date, t.start_date + 1) > $3
        )
        "#,
    )
    .bind(hotel_id)
    .bind(room_number)
    .bind(stay.start)
    .bind(stay.end_exclusive())
    .bind(ignore_booking)
    .fetch_one(&mut *conn)
    .await?;
    Ok(held)
}
