//! Hotel Booking Service
//!
//! A REST JSON API over hotels, rooms, customers, bookings and rentings, with
//! the booking -> renting -> completed lifecycle, plus a typed client and the
//! view models the customer and employee screens are built on.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state over any store
    pub fn new(config: AppConfig, store: Arc<dyn repository::Store>) -> Self {
        let services = services::Services::new(store, config.lifecycle);
        Self {
            services: Arc::new(services),
        }
    }
}
