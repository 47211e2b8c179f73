//! In-memory [`Store`] used by tests and local demos.
//!
//! Mirrors the PostgreSQL repository's semantics, including foreign keys on
//! insert and the all-or-nothing checkout. Booking updates can be made to fail
//! on demand to exercise rollback paths.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{
        Booking, BookingDetails, BookingStatus, ChainAverage, CreateBooking, CreateRenting,
        Customer, Hotel, HotelInfo, Renting, RentingStatus, Room, StayRange,
    },
};

#[derive(Debug, Clone, Default)]
struct Tables {
    hotels: BTreeMap<i32, Hotel>,
    rooms: BTreeMap<(i32, i32), Room>,
    customers: BTreeMap<i32, Customer>,
    bookings: BTreeMap<i32, Booking>,
    rentings: BTreeMap<i32, Renting>,
}

impl Tables {
    fn next_booking_id(&self) -> i32 {
        self.bookings.keys().next_back().map_or(1, |id| id + 1)
    }

    fn next_renting_id(&self) -> i32 {
        self.rentings.keys().next_back().map_or(1, |id| id + 1)
    }

    fn room_is_held(
        &self,
        hotel_id: i32,
        room_number: i32,
        stay: &StayRange,
        ignore_booking: Option<i32>,
    ) -> bool {
        let booked = self.bookings.values().any(|b| {
            b.hotel_id == hotel_id
                && b.room_number == room_number
                && b.status.holds_room()
                && Some(b.booking_id) != ignore_booking
                && b.stay().overlaps(stay)
        });
        let rented = self.rentings.values().any(|r| {
            r.hotel_id == hotel_id
                && r.room_number == room_number
                && r.status.holds_room()
                && r.stay().overlaps(stay)
        });
        booked || rented
    }

    fn check_references(&self, customer_id: i32, hotel_id: i32, room_number: i32) -> AppResult<()> {
        if !self.customers.contains_key(&customer_id) {
            return Err(fk_violation("customer_id", customer_id));
        }
        if !self.hotels.contains_key(&hotel_id) {
            return Err(fk_violation("hotel_id", hotel_id));
        }
        if !self.rooms.contains_key(&(hotel_id, room_number)) {
            return Err(fk_violation("room_number", room_number));
        }
        Ok(())
    }

    fn require_room(&self, hotel_id: i32, room_number: i32) -> AppResult<()> {
        if !self.rooms.contains_key(&(hotel_id, room_number)) {
            return Err(AppError::NotFound(format!(
                "Room {} of hotel {} not found",
                room_number, hotel_id
            )));
        }
        Ok(())
    }

    fn reserve_room(
        &self,
        hotel_id: i32,
        room_number: i32,
        stay: &StayRange,
        ignore_booking: Option<i32>,
    ) -> AppResult<()> {
        if self.room_is_held(hotel_id, room_number, stay, ignore_booking) {
            return Err(AppError::Conflict(format!(
                "Room {} of hotel {} is already taken between {} and {}",
                room_number, hotel_id, stay.start, stay.end
            )));
        }
        Ok(())
    }
}

fn fk_violation(column: &str, value: i32) -> AppError {
    AppError::Internal(format!("foreign key violation: {} = {}", column, value))
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_booking_updates: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert_hotel(&self, hotel: Hotel) {
        self.tables().hotels.insert(hotel.hotel_id, hotel);
    }

    pub fn insert_room(&self, room: Room) {
        self.tables().rooms.insert((room.hotel_id, room.room_number), room);
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.tables().customers.insert(customer.customer_id, customer);
    }

    pub fn insert_booking(&self, booking: Booking) {
        self.tables().bookings.insert(booking.booking_id, booking);
    }

    pub fn insert_renting(&self, renting: Renting) {
        self.tables().rentings.insert(renting.renting_id, renting);
    }

    pub fn booking(&self, booking_id: i32) -> Option<Booking> {
        self.tables().bookings.get(&booking_id).cloned()
    }

    pub fn renting(&self, renting_id: i32) -> Option<Renting> {
        self.tables().rentings.get(&renting_id).cloned()
    }

    /// Make every subsequent booking update fail with a server error
    pub fn fail_booking_updates(&self, fail: bool) {
        self.fail_booking_updates.store(fail, Ordering::SeqCst);
    }

    fn booking_update_allowed(&self, booking_id: i32) -> AppResult<()> {
        if self.fail_booking_updates.load(Ordering::SeqCst) {
            return Err(AppError::Internal(format!(
                "update of booking {} failed",
                booking_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn list_hotels(&self) -> AppResult<Vec<HotelInfo>> {
        let today = Utc::now().date_naive();
        let tables = self.tables();
        let today_stay = StayRange {
            start: today,
            end: today,
        };

        Ok(tables
            .hotels
            .values()
            .map(|hotel| {
                let available_rooms = tables
                    .rooms
                    .values()
                    .filter(|r| r.hotel_id == hotel.hotel_id)
                    .filter(|r| !tables.room_is_held(r.hotel_id, r.room_number, &today_stay, None))
                    .count() as i64;
                HotelInfo {
                    hotel: hotel.clone(),
                    available_rooms,
                }
            })
            .collect())
    }

    async fn list_rooms(&self, hotel_id: i32) -> AppResult<Vec<Room>> {
        Ok(self
            .tables()
            .rooms
            .range((hotel_id, i32::MIN)..=(hotel_id, i32::MAX))
            .map(|(_, room)| room.clone())
            .collect())
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.tables().customers.values().cloned().collect())
    }

    async fn list_bookings(&self) -> AppResult<Vec<BookingDetails>> {
        let tables = self.tables();
        Ok(tables
            .bookings
            .values()
            .filter_map(|booking| {
                let customer = tables.customers.get(&booking.customer_id)?;
                let hotel = tables.hotels.get(&booking.hotel_id)?;
                Some(BookingDetails {
                    booking: booking.clone(),
                    full_name: customer.full_name.clone(),
                    chain_name: hotel.chain_name.clone(),
                    street_number: hotel.street_number,
                    street_name: hotel.street_name.clone(),
                    city: hotel.city.clone(),
                    province_state: hotel.province_state.clone(),
                })
            })
            .collect())
    }

    async fn list_rentings(&self) -> AppResult<Vec<Renting>> {
        Ok(self.tables().rentings.values().cloned().collect())
    }

    async fn chain_averages(&self) -> AppResult<Vec<ChainAverage>> {
        let mut chains: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for hotel in self.tables().hotels.values() {
            let entry = chains.entry(hotel.chain_name.clone()).or_default();
            entry.0 += i64::from(hotel.category);
            entry.1 += 1;
        }

        Ok(chains
            .into_iter()
            .map(|(chain_name, (sum, count))| ChainAverage {
                chain_name,
                avg_category: sum as f64 / count as f64,
            })
            .collect())
    }

    async fn five_star_hotels(&self) -> AppResult<Vec<Hotel>> {
        let tables = self.tables();
        let low_rated: BTreeSet<&str> = tables
            .hotels
            .values()
            .filter(|h| h.category == 1 || h.category == 2)
            .map(|h| h.chain_name.as_str())
            .collect();

        Ok(tables
            .hotels
            .values()
            .filter(|h| h.category == 5 && !low_rated.contains(h.chain_name.as_str()))
            .cloned()
            .collect())
    }

    async fn create_booking(
        &self,
        booking: &CreateBooking,
        enforce_availability: bool,
    ) -> AppResult<Booking> {
        let stay = booking.stay()?;
        let mut tables = self.tables();

        tables.require_room(booking.hotel_id, booking.room_number)?;
        if enforce_availability && booking.status.holds_room() {
            tables.reserve_room(booking.hotel_id, booking.room_number, &stay, None)?;
        }
        tables.check_references(booking.customer_id, booking.hotel_id, booking.room_number)?;

        let now = Utc::now();
        let row = Booking {
            booking_id: tables.next_booking_id(),
            customer_id: booking.customer_id,
            hotel_id: booking.hotel_id,
            room_number: booking.room_number,
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            created_at: now,
            updated_at: now,
        };
        tables.bookings.insert(row.booking_id, row.clone());
        Ok(row)
    }

    async fn create_renting(
        &self,
        renting: &CreateRenting,
        enforce_availability: bool,
    ) -> AppResult<Renting> {
        let stay = renting.stay()?;
        let mut tables = self.tables();

        tables.require_room(renting.hotel_id, renting.room_number)?;
        if enforce_availability && renting.status.holds_room() {
            tables.reserve_room(renting.hotel_id, renting.room_number, &stay, renting.booking_id)?;
        }
        tables.check_references(renting.customer_id, renting.hotel_id, renting.room_number)?;
        if let Some(booking_id) = renting.booking_id {
            if !tables.bookings.contains_key(&booking_id) {
                return Err(fk_violation("booking_id", booking_id));
            }
        }

        let now = Utc::now();
        let row = Renting {
            renting_id: tables.next_renting_id(),
            booking_id: renting.booking_id,
            employee_id: renting.employee_id,
            customer_id: renting.customer_id,
            hotel_id: renting.hotel_id,
            room_number: renting.room_number,
            start_date: renting.start_date,
            end_date: renting.end_date,
            status: renting.status,
            has_booked: renting.booking_id.is_some(),
            created_at: now,
            updated_at: now,
        };
        tables.rentings.insert(row.renting_id, row.clone());
        Ok(row)
    }

    async fn check_in_booking(&self, booking_id: i32) -> AppResult<Booking> {
        let mut tables = self.tables();
        let booking = tables
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        if !booking.status.can_check_in() {
            return Err(AppError::Conflict(format!(
                "Booking {} is {} and cannot be checked in",
                booking_id, booking.status
            )));
        }
        self.booking_update_allowed(booking_id)?;

        booking.status = BookingStatus::Active;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn check_out_renting(&self, renting_id: i32) -> AppResult<(Renting, Option<Booking>)> {
        let mut tables = self.tables();
        let now = Utc::now();

        // Stage both rows and write back only once every update has succeeded.
        let mut renting = tables
            .rentings
            .get(&renting_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Renting {} not found", renting_id)))?;
        renting.status = RentingStatus::Completed;
        renting.updated_at = now;

        let booking = match renting.booking_id {
            Some(booking_id) => match tables.bookings.get(&booking_id).cloned() {
                Some(mut booking) => {
                    self.booking_update_allowed(booking_id)?;
                    booking.status = BookingStatus::Completed;
                    booking.updated_at = now;
                    Some(booking)
                }
                None => None,
            },
            None => None,
        };

        tables.rentings.insert(renting.renting_id, renting.clone());
        if let Some(booking) = &booking {
            tables.bookings.insert(booking.booking_id, booking.clone());
        }
        Ok((renting, booking))
    }
}
