//! Read-only projections over hotels, rooms, customers, bookings and rentings

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{BookingDetails, ChainAverage, Customer, Hotel, HotelInfo, Renting, Room},
    repository::Store,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn Store>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Check the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Hotels with their available room count
    pub async fn hotels(&self) -> AppResult<Vec<HotelInfo>> {
        self.store.list_hotels().await
    }

    /// Rooms of one hotel
    pub async fn rooms(&self, hotel_id: i32) -> AppResult<Vec<Room>> {
        self.store.list_rooms(hotel_id).await
    }

    pub async fn customers(&self) -> AppResult<Vec<Customer>> {
        self.store.list_customers().await
    }

    pub async fn bookings(&self) -> AppResult<Vec<BookingDetails>> {
        self.store.list_bookings().await
    }

    pub async fn rentings(&self) -> AppResult<Vec<Renting>> {
        self.store.list_rentings().await
    }

    /// Average star rating per chain
    pub async fn chain_averages(&self) -> AppResult<Vec<ChainAverage>> {
        self.store.chain_averages().await
    }

    /// 5-star hotels from chains without any 1 or 2 star hotel
    pub async fn five_star_hotels(&self) -> AppResult<Vec<Hotel>> {
        self.store.five_star_hotels().await
    }
}
