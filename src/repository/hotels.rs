//! Hotel and room queries on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::{ChainAverage, Hotel, HotelInfo, Room},
};

impl Repository {
    /// List hotels with the number of rooms not held by a booking or an open
    /// renting today
    pub async fn hotels_list_with_availability(&self) -> AppResult<Vec<HotelInfo>> {
        let rows = sqlx::query_as::<_, HotelInfo>(
            r#"
            SELECT h.*, COALESCE(a.available_rooms, 0) AS available_rooms
            FROM hotels h
            LEFT JOIN (
                SELECT r.hotel_id, COUNT(*) AS available_rooms
                FROM rooms r
                WHERE NOT EXISTS (
                        SELECT 1 FROM bookings b
                        WHERE b.hotel_id = r.hotel_id
                          AND b.room_number = r.room_number
                          AND b.status IN ('scheduled', 'active')
                          AND b.start_date <= CURRENT_DATE
                          AND GREATEST(b.end_date, b.start_date + 1) > CURRENT_DATE
                    )
                  AND NOT EXISTS (
                        SELECT 1 FROM rentings t
                        WHERE t.hotel_id = r.hotel_id
                          AND t.room_number = r.room_number
                          AND t.status = 'open'
                          AND t.start_date <= CURRENT_DATE
                          AND GREATEST(t.end_date, t.start_date + 1) > CURRENT_DATE
                    )
                GROUP BY r.hotel_id
            ) a ON a.hotel_id = h.hotel_id
            ORDER BY h.hotel_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List all rooms of a hotel
    pub async fn rooms_for_hotel(&self, hotel_id: i32) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE hotel_id = $1 ORDER BY room_number",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Average category per chain
    pub async fn hotels_chain_averages(&self) -> AppResult<Vec<ChainAverage>> {
        let rows = sqlx::query_as::<_, ChainAverage>(
            r#"
            SELECT chain_name, AVG(category)::float8 AS avg_category
            FROM hotels
            GROUP BY chain_name
            ORDER BY chain_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// 5-star hotels of chains that have no 1 or 2 star hotel anywhere
    pub async fn hotels_five_star(&self) -> AppResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT * FROM hotels
            WHERE category = 5
              AND chain_name NOT IN (SELECT chain_name FROM hotels WHERE category = 1)
              AND chain_name NOT IN (SELECT chain_name FROM hotels WHERE category = 2)
            ORDER BY hotel_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
