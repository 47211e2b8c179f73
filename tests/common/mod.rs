//! Shared fixtures for the in-process tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use hotel_booking::{
    models::{Booking, BookingStatus, Customer, Hotel, Renting, RentingStatus, Room},
    repository::memory::MemoryStore,
};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn hotel(hotel_id: i32, chain_name: &str, category: i32) -> Hotel {
    Hotel {
        hotel_id,
        chain_name: chain_name.to_string(),
        street_number: Some(100),
        street_name: Some("Rideau St".to_string()),
        city: Some("Ottawa".to_string()),
        province_state: Some("ON".to_string()),
        postal_code: Some("K1N 5Y1".to_string()),
        category,
    }
}

pub fn room(hotel_id: i32, room_number: i32) -> Room {
    Room {
        hotel_id,
        room_number,
        price: Decimal::new(18950, 2),
        capacity: 2,
        mountain_view: true,
        sea_view: false,
        is_expandable: true,
        amenities: Some("tv, minibar".to_string()),
        damages: None,
    }
}

pub fn customer(customer_id: i32, full_name: &str) -> Customer {
    Customer {
        customer_id,
        full_name: full_name.to_string(),
        customer_email: Some(format!("guest{}@example.com", customer_id)),
        street_number: Some(12),
        street_name: Some("Bank St".to_string()),
        city: Some("Ottawa".to_string()),
        province_state: Some("ON".to_string()),
        postal_code: None,
    }
}

pub fn booking(booking_id: i32, customer_id: i32, room_number: i32, status: BookingStatus) -> Booking {
    let now = Utc::now();
    Booking {
        booking_id,
        customer_id,
        hotel_id: 7,
        room_number,
        start_date: date("2024-03-01"),
        end_date: date("2024-03-04"),
        status,
        created_at: now,
        updated_at: now,
    }
}

pub fn renting(renting_id: i32, booking_id: Option<i32>, room_number: i32) -> Renting {
    let now = Utc::now();
    Renting {
        renting_id,
        booking_id,
        employee_id: 2,
        customer_id: 1,
        hotel_id: 7,
        room_number,
        start_date: date("2024-03-01"),
        end_date: date("2024-03-04"),
        status: RentingStatus::Open,
        has_booked: booking_id.is_some(),
        created_at: now,
        updated_at: now,
    }
}

/// Hotel 7 ("Golden Oasis", 4 stars) with rooms 101-103 and two customers
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_hotel(hotel(7, "Golden Oasis", 4));
    for room_number in [101, 102, 103] {
        store.insert_room(room(7, room_number));
    }
    store.insert_customer(customer(1, "Ada Lovelace"));
    store.insert_customer(customer(2, "Alan Turing"));
    Arc::new(store)
}
