//! PostgreSQL repository tests
//!
//! Each test gets a fresh database with the migrations applied.
//! Run with: DATABASE_URL=postgres://... cargo test --test repository_tests -- --ignored

use chrono::{Days, NaiveDate, Utc};
use sqlx::{Executor, PgPool};

use hotel_booking::{
    models::{BookingStatus, CreateBooking, CreateRenting, RentingStatus},
    repository::Repository,
    AppError,
};

const SEED: &str = r#"
INSERT INTO hotels (hotel_id, chain_name, city, category) VALUES (7, 'Golden Oasis', 'Ottawa', 4);
INSERT INTO rooms (hotel_id, room_number, price) VALUES (7, 101, 189.50), (7, 102, 189.50), (7, 103, 240.00);
INSERT INTO customers (customer_id, full_name) VALUES (1, 'Ada Lovelace'), (2, 'Alan Turing');
"#;

async fn seeded(pool: &PgPool) -> Repository {
    pool.execute(SEED).await.unwrap();
    Repository::new(pool.clone())
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn booking(room_number: i32, start: NaiveDate, end: NaiveDate) -> CreateBooking {
    CreateBooking {
        status: BookingStatus::Scheduled,
        customer_id: 1,
        start_date: start,
        end_date: end,
        room_number,
        hotel_id: 7,
    }
}

fn renting(booking_id: Option<i32>, room_number: i32, start: NaiveDate, end: NaiveDate) -> CreateRenting {
    CreateRenting {
        booking_id,
        employee_id: 4,
        customer_id: 1,
        status: RentingStatus::Open,
        start_date: start,
        end_date: end,
        room_number,
        hotel_id: 7,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_five_star_excludes_chains_with_low_rated_hotels(pool: PgPool) {
    pool.execute(
        r#"
        INSERT INTO hotels (hotel_id, chain_name, category) VALUES
            (1, 'X', 5), (2, 'X', 5), (3, 'X', 1), (4, 'Y', 5);
        "#,
    )
    .await
    .unwrap();
    let repo = Repository::new(pool);

    let hotels = repo.hotels_five_star().await.unwrap();
    let ids: Vec<i32> = hotels.iter().map(|h| h.hotel_id).collect();
    assert_eq!(ids, vec![4]);

    let averages = repo.hotels_chain_averages().await.unwrap();
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].chain_name, "X");
    assert!((averages[0].avg_category - 11.0 / 3.0).abs() < 1e-9);
    assert!((averages[1].avg_category - 5.0).abs() < 1e-9);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_overlapping_booking_conflicts(pool: PgPool) {
    let repo = seeded(&pool).await;

    repo.bookings_create(&booking(101, date("2024-01-01"), date("2024-01-05")), true)
        .await
        .unwrap();

    let overlapping = repo
        .bookings_create(&booking(101, date("2024-01-04"), date("2024-01-06")), true)
        .await;
    assert!(matches!(overlapping, Err(AppError::Conflict(_))));

    // Checkout day is free again
    repo.bookings_create(&booking(101, date("2024-01-05"), date("2024-01-07")), true)
        .await
        .unwrap();

    // A same-day stay still holds its day
    repo.bookings_create(&booking(102, date("2024-02-10"), date("2024-02-10")), true)
        .await
        .unwrap();
    let same_day = repo
        .bookings_create(&booking(102, date("2024-02-10"), date("2024-02-11")), true)
        .await;
    assert!(matches!(same_day, Err(AppError::Conflict(_))));

    // Cancelled bookings hold nothing
    let mut cancelled = booking(103, date("2024-03-01"), date("2024-03-04"));
    cancelled.status = BookingStatus::Cancelled;
    repo.bookings_create(&cancelled, true).await.unwrap();
    repo.bookings_create(&booking(103, date("2024-03-02"), date("2024-03-03")), true)
        .await
        .unwrap();

    // Without enforcement the overlap is stored as is
    repo.bookings_create(&booking(101, date("2024-01-02"), date("2024-01-03")), false)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_unknown_room_and_customer(pool: PgPool) {
    let repo = seeded(&pool).await;

    for enforce in [true, false] {
        let result = repo
            .bookings_create(&booking(999, date("2024-01-01"), date("2024-01-02")), enforce)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))), "enforce = {}", enforce);
    }

    let mut unknown_customer = booking(101, date("2024-01-01"), date("2024-01-02"));
    unknown_customer.customer_id = 42;
    let result = repo.bookings_create(&unknown_customer, true).await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_check_in_transitions(pool: PgPool) {
    let repo = seeded(&pool).await;

    let scheduled = repo
        .bookings_create(&booking(101, date("2024-04-01"), date("2024-04-03")), true)
        .await
        .unwrap();
    let mut cancelled = booking(102, date("2024-04-01"), date("2024-04-03"));
    cancelled.status = BookingStatus::Cancelled;
    let cancelled = repo.bookings_create(&cancelled, true).await.unwrap();

    let active = repo.bookings_check_in(scheduled.booking_id).await.unwrap();
    assert_eq!(active.status, BookingStatus::Active);
    assert!(active.updated_at >= scheduled.updated_at);

    // Already active: accepted again
    let again = repo.bookings_check_in(scheduled.booking_id).await.unwrap();
    assert_eq!(again.status, BookingStatus::Active);

    let result = repo.bookings_check_in(cancelled.booking_id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = repo.bookings_check_in(9999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let details = repo.bookings_list_details().await.unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].full_name, "Ada Lovelace");
    assert_eq!(details[0].chain_name, "Golden Oasis");
    assert_eq!(details[1].booking.status, BookingStatus::Cancelled);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_check_out_completes_renting_and_booking(pool: PgPool) {
    let repo = seeded(&pool).await;
    let (start, end) = (date("2024-05-01"), date("2024-05-04"));

    let source = repo.bookings_create(&booking(101, start, end), true).await.unwrap();
    repo.bookings_check_in(source.booking_id).await.unwrap();

    // The renting's own booking does not block it
    let from_booking = repo
        .rentings_create(&renting(Some(source.booking_id), 101, start, end), true)
        .await
        .unwrap();
    assert!(from_booking.has_booked);

    let (renting_row, booking_row) = repo.rentings_check_out(from_booking.renting_id).await.unwrap();
    assert_eq!(renting_row.status, RentingStatus::Completed);
    let booking_row = booking_row.unwrap();
    assert_eq!(booking_row.booking_id, source.booking_id);
    assert_eq!(booking_row.status, BookingStatus::Completed);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_walk_in_check_out_leaves_bookings_alone(pool: PgPool) {
    let repo = seeded(&pool).await;
    let (start, end) = (date("2024-06-01"), date("2024-06-02"));

    let other = repo.bookings_create(&booking(102, start, end), true).await.unwrap();
    let walk_in = repo.rentings_create(&renting(None, 101, start, end), true).await.unwrap();
    assert!(!walk_in.has_booked);

    let (renting_row, booking_row) = repo.rentings_check_out(walk_in.renting_id).await.unwrap();
    assert_eq!(renting_row.status, RentingStatus::Completed);
    assert!(booking_row.is_none());

    let details = repo.bookings_list_details().await.unwrap();
    assert_eq!(details[0].booking.booking_id, other.booking_id);
    assert_eq!(details[0].booking.status, BookingStatus::Scheduled);

    let result = repo.rentings_check_out(9999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_failed_cascade_rolls_back_renting(pool: PgPool) {
    let repo = seeded(&pool).await;
    let (start, end) = (date("2024-07-01"), date("2024-07-03"));

    let source = repo.bookings_create(&booking(101, start, end), true).await.unwrap();
    let linked = repo
        .rentings_create(&renting(Some(source.booking_id), 101, start, end), true)
        .await
        .unwrap();

    pool.execute(
        r#"
        CREATE FUNCTION refuse_booking_update() RETURNS trigger AS $$
        BEGIN
            RAISE EXCEPTION 'bookings are read-only';
        END
        $$ LANGUAGE plpgsql;
        CREATE TRIGGER bookings_read_only BEFORE UPDATE ON bookings
            FOR EACH ROW EXECUTE FUNCTION refuse_booking_update();
        "#,
    )
    .await
    .unwrap();

    let result = repo.rentings_check_out(linked.renting_id).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let rentings = repo.rentings_list().await.unwrap();
    assert_eq!(rentings[0].status, RentingStatus::Open);
    let details = repo.bookings_list_details().await.unwrap();
    assert_eq!(details[0].booking.status, BookingStatus::Scheduled);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_available_rooms_counts_rooms_free_today(pool: PgPool) {
    let repo = seeded(&pool).await;
    let today = Utc::now().date_naive();
    let start = today - Days::new(1);
    let end = today + Days::new(2);

    let hotels = repo.hotels_list_with_availability().await.unwrap();
    assert_eq!(hotels[0].available_rooms, 3);

    repo.bookings_create(&booking(101, start, end), true).await.unwrap();
    repo.rentings_create(&renting(None, 102, start, end), true).await.unwrap();

    // Stays well away from today do not count
    repo.bookings_create(&booking(103, date("2020-01-01"), date("2020-01-05")), true)
        .await
        .unwrap();

    let hotels = repo.hotels_list_with_availability().await.unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].hotel.chain_name, "Golden Oasis");
    assert_eq!(hotels[0].available_rooms, 1);

    let rooms = repo.rooms_for_hotel(7).await.unwrap();
    let numbers: Vec<i32> = rooms.iter().map(|r| r.room_number).collect();
    assert_eq!(numbers, vec![101, 102, 103]);
    assert_eq!(rooms[0].price.to_string(), "189.50");
    assert!(repo.rooms_for_hotel(99).await.unwrap().is_empty());
}
