//! Typed HTTP client for the hotel booking API

pub mod views;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    config::ClientConfig,
    models::{
        booking::CheckInResponse, renting::CheckOutResponse, Booking, BookingDetails,
        ChainAverage, CreateBooking, CreateRenting, Customer, Hotel, HotelInfo, Renting, Room,
    },
};

pub use views::{CustomerView, EmployeeView};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with the plain-text body the server sent
    #[error("Server returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, message });
        }
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub async fn hotels(&self) -> ClientResult<Vec<HotelInfo>> {
        self.get("/hotel_info").await
    }

    pub async fn rooms(&self, hotel_id: i32) -> ClientResult<Vec<Room>> {
        self.get(&format!("/hotel_info/room/{}", hotel_id)).await
    }

    pub async fn customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("/customer_info").await
    }

    pub async fn bookings(&self) -> ClientResult<Vec<BookingDetails>> {
        self.get("/bookings_info").await
    }

    pub async fn rentings(&self) -> ClientResult<Vec<Renting>> {
        self.get("/rentings_info").await
    }

    pub async fn chain_averages(&self) -> ClientResult<Vec<ChainAverage>> {
        self.get("/hotel_avg").await
    }

    pub async fn five_star(&self) -> ClientResult<Vec<Hotel>> {
        self.get("/five_star").await
    }

    pub async fn create_booking(&self, booking: &CreateBooking) -> ClientResult<Booking> {
        let response = self.http.post(self.url("/bookings")).json(booking).send().await?;
        Self::decode(response).await
    }

    pub async fn create_renting(&self, renting: &CreateRenting) -> ClientResult<Renting> {
        let response = self.http.post(self.url("/rentings")).json(renting).send().await?;
        Self::decode(response).await
    }

    pub async fn check_in(&self, booking_id: i32) -> ClientResult<CheckInResponse> {
        let response = self
            .http
            .put(self.url(&format!("/bookings/{}", booking_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn check_out(&self, renting_id: i32) -> ClientResult<CheckOutResponse> {
        let response = self
            .http
            .put(self.url(&format!("/rentings/{}", renting_id)))
            .send()
            .await?;
        Self::decode(response).await
    }
}
