//! Renting domain methods on Repository

use super::{
    bookings::{lock_room, room_is_held},
    Repository,
};
use crate::{
    error::{AppError, AppResult},
    models::{Booking, CreateRenting, Renting},
};

impl Repository {
    /// List all rentings
    pub async fn rentings_list(&self) -> AppResult<Vec<Renting>> {
        let rows = sqlx::query_as::<_, Renting>("SELECT * FROM rentings ORDER BY renting_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a renting (walk-in, or the conversion of a booking)
    pub async fn rentings_create(
        &self,
        renting: &CreateRenting,
        enforce_availability: bool,
    ) -> AppResult<Renting> {
        let stay = renting.stay()?;
        let mut tx = self.pool.begin().await?;

        lock_room(&mut tx, renting.hotel_id, renting.room_number).await?;
        if enforce_availability && renting.status.holds_room() {
            if room_is_held(
                &mut tx,
                renting.hotel_id,
                renting.room_number,
                stay,
                renting.booking_id,
            )
            .await?
            {
                return Err(AppError::Conflict(format!(
                    "Room {} of hotel {} is already taken between {} and {}",
                    renting.room_number, renting.hotel_id, stay.start, stay.end
                )));
            }
        }

        let row = sqlx::query_as::<_, Renting>(
            r#"
            INSERT INTO rentings (booking_id, employee_id, customer_id, status, start_date, end_date,
                                  room_number, hotel_id, has_booked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(renting.booking_id)
        .bind(renting.employee_id)
        .bind(renting.customer_id)
        .bind(renting.status.as_str())
        .bind(renting.start_date)
        .bind(renting.end_date)
        .bind(renting.room_number)
        .bind(renting.hotel_id)
        .bind(renting.booking_id.is_some())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Complete a renting and its source booking in one transaction.
    ///
    /// Dropping `tx` on any early return rolls back, so a renting is never
    /// left completed while its booking is not.
    pub async fn rentings_check_out(&self, renting_id: i32) -> AppResult<(Renting, Option<Booking>)> {
        let mut tx = self.pool.begin().await?;

        let renting = sqlx::query_as::<_, Renting>(
            r#"
            UPDATE rentings SET status = 'completed', updated_at = NOW()
            WHERE renting_id = $1
            RETURNING *
            "#,
        )
        .bind(renting_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Renting {} not found", renting_id)))?;

        let booking = match renting.booking_id {
            Some(booking_id) => {
                sqlx::query_as::<_, Booking>(
                    r#"
                    UPDATE bookings SET status = 'completed', updated_at = NOW()
                    WHERE booking_id = $1
                    RETURNING *
                    "#,
                )
                .bind(booking_id)
                .fetch_optional(&mut *tx)
                .await?
            }
            None => None,
        };

        tx.commit().await?;
        Ok((renting, booking))
    }
}
