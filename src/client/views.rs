//! View models behind the customer and employee screens.
//!
//! Each view holds the last response it received. A failed fetch is logged and
//! the previous state stays on display.

use crate::config::ClientConfig;
use crate::models::{
    Booking, BookingDetails, BookingStatus, CreateBooking, CreateRenting, Customer, HotelInfo,
    Renting, Room, StayRange,
};

use super::ApiClient;

/// Customer screen: browse hotels, open one to see its rooms, book a room
pub struct CustomerView {
    client: ApiClient,
    customer_id: i32,
    hotels: Vec<HotelInfo>,
    open_hotel: Option<i32>,
    rooms: Vec<Room>,
}

impl CustomerView {
    pub fn new(client: ApiClient, customer_id: i32) -> Self {
        Self {
            client,
            customer_id,
            hotels: Vec::new(),
            open_hotel: None,
            rooms: Vec::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ApiClient::from_config(config), config.customer_id)
    }

    pub fn hotels(&self) -> &[HotelInfo] {
        &self.hotels
    }

    pub fn open_hotel(&self) -> Option<i32> {
        self.open_hotel
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Fetch the hotel list
    pub async fn load(&mut self) {
        match self.client.hotels().await {
            Ok(hotels) => self.hotels = hotels,
            Err(e) => tracing::error!(error = %e, "Error fetching hotel info"),
        }
    }

    /// Open a hotel and fetch its rooms
    pub async fn select_hotel(&mut self, hotel_id: i32) {
        match self.client.rooms(hotel_id).await {
            Ok(rooms) => {
                self.open_hotel = Some(hotel_id);
                self.rooms = rooms;
            }
            Err(e) => tracing::error!(error = %e, hotel_id, "Error fetching room info"),
        }
    }

    pub fn close_hotel(&mut self) {
        self.open_hotel = None;
        self.rooms.clear();
    }

    /// Book a room for the selected dates as a scheduled booking
    pub async fn book_room(&self, room: &Room, stay: StayRange) -> Option<Booking> {
        let request = CreateBooking {
            status: BookingStatus::Scheduled,
            customer_id: self.customer_id,
            start_date: stay.start,
            end_date: stay.end,
            room_number: room.room_number,
            hotel_id: room.hotel_id,
        };

        match self.client.create_booking(&request).await {
            Ok(booking) => {
                tracing::info!(booking_id = booking.booking_id, "New booking");
                Some(booking)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create booking");
                None
            }
        }
    }
}

/// Employee screen: customers, bookings and rentings, with check-in and check-out
pub struct EmployeeView {
    client: ApiClient,
    customers: Vec<Customer>,
    bookings: Vec<BookingDetails>,
    rentings: Vec<Renting>,
}

impl EmployeeView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            customers: Vec::new(),
            bookings: Vec::new(),
            rentings: Vec::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ApiClient::from_config(config))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn bookings(&self) -> &[BookingDetails] {
        &self.bookings
    }

    pub fn rentings(&self) -> &[Renting] {
        &self.rentings
    }

    /// Fetch all three lists; each one fails on its own
    pub async fn load(&mut self) {
        let (customers, bookings, rentings) = tokio::join!(
            self.client.customers(),
            self.client.bookings(),
            self.client.rentings()
        );

        match customers {
            Ok(customers) => self.customers = customers,
            Err(e) => tracing::error!(error = %e, "Error fetching customers"),
        }
        match bookings {
            Ok(bookings) => self.bookings = bookings,
            Err(e) => tracing::error!(error = %e, "Error fetching bookings"),
        }
        match rentings {
            Ok(rentings) => self.rentings = rentings,
            Err(e) => tracing::error!(error = %e, "Error fetching rentings"),
        }
    }

    async fn reload_bookings(&mut self) {
        match self.client.bookings().await {
            Ok(bookings) => self.bookings = bookings,
            Err(e) => tracing::error!(error = %e, "Error fetching bookings"),
        }
    }

    async fn reload_rentings(&mut self) {
        match self.client.rentings().await {
            Ok(rentings) => self.rentings = rentings,
            Err(e) => tracing::error!(error = %e, "Error fetching rentings"),
        }
    }

    /// Check a booking in. Returns whether the server accepted it.
    pub async fn toggle_booking(&mut self, booking_id: i32) -> bool {
        match self.client.check_in(booking_id).await {
            Ok(_) => {
                self.reload_bookings().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, booking_id, "Failed to check in booking");
                false
            }
        }
    }

    /// Check a renting out; its booking is completed server-side too
    pub async fn toggle_renting(&mut self, renting_id: i32) -> bool {
        match self.client.check_out(renting_id).await {
            Ok(response) => {
                self.reload_rentings().await;
                if response.booking.is_some() {
                    self.reload_bookings().await;
                }
                true
            }
            Err(e) => {
                tracing::error!(error = %e, renting_id, "Failed to check out renting");
                false
            }
        }
    }

    /// Record a customer rental from the front desk form
    pub async fn record_renting(&mut self, renting: &CreateRenting) -> Option<Renting> {
        match self.client.create_renting(renting).await {
            Ok(created) => {
                tracing::info!(renting_id = created.renting_id, "New renting");
                self.reload_rentings().await;
                Some(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create renting");
                None
            }
        }
    }
}
