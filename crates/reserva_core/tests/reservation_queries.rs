use chrono::NaiveDate;
use reserva_core::db::open_db_in_memory;
use reserva_core::{
    BookingService, CalendarRepository, DateRange, RepoError, Reservation, ReservationDraft,
    ReservationRepository, ReservationService, SqliteCalendarRepository,
    SqliteReservationRepository,
};
use rusqlite::Connection;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(email: &str, start: NaiveDate, end: NaiveDate) -> ReservationDraft {
    ReservationDraft {
        email: email.to_string(),
        first_name: "Jean".to_string(),
        last_name: "Bartik".to_string(),
        national_id: "A1111111".to_string(),
        start_date: start,
        end_date: end,
        num_guests: 1,
    }
}

fn seeded_conn() -> Connection {
    let conn = open_db_in_memory().unwrap();
    let horizon = DateRange::new(date(2024, 12, 1), date(2024, 12, 31)).unwrap();
    SqliteCalendarRepository::try_new(&conn)
        .unwrap()
        .seed_range(&horizon)
        .unwrap();
    conn
}

fn book(conn: &mut Connection, reservation: &Reservation) {
    BookingService::try_new(conn)
        .unwrap()
        .book(reservation)
        .unwrap();
}

#[test]
fn find_by_id_on_empty_store_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteReservationRepository::try_new(&conn).unwrap();

    let err = repo.find_by_id("123").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "123"));
}

#[test]
fn find_all_returns_the_single_stored_reservation() {
    let mut conn = seeded_conn();
    let reservation = Reservation::new(draft("solo@example.com", date(2024, 12, 5), date(2024, 12, 7)));
    book(&mut conn, &reservation);

    let service = ReservationService::new(SqliteReservationRepository::try_new(&conn).unwrap());
    let all = service.find_all().unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0], reservation);
}

#[test]
fn find_all_order_is_stable_across_calls() {
    let mut conn = seeded_conn();
    for (email, start, end) in [
        ("a@example.com", date(2024, 12, 1), date(2024, 12, 2)),
        ("b@example.com", date(2024, 12, 10), date(2024, 12, 11)),
        ("c@example.com", date(2024, 12, 20), date(2024, 12, 21)),
    ] {
        book(&mut conn, &Reservation::new(draft(email, start, end)));
    }

    let service = ReservationService::new(SqliteReservationRepository::try_new(&conn).unwrap());
    let first_pass: Vec<_> = service.find_all().unwrap().into_iter().map(|r| r.id).collect();
    let second_pass: Vec<_> = service.find_all().unwrap().into_iter().map(|r| r.id).collect();

    assert_eq!(first_pass.len(), 3);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn service_find_by_id_returns_stored_fields_verbatim() {
    let mut conn = seeded_conn();
    let reservation = Reservation::new(draft("exact@example.com", date(2024, 12, 12), date(2024, 12, 14)));
    book(&mut conn, &reservation);

    let service = ReservationService::new(SqliteReservationRepository::try_new(&conn).unwrap());
    let loaded = service.find_by_id(&reservation.id.to_string()).unwrap();

    assert_eq!(loaded.email, "exact@example.com");
    assert_eq!(loaded.start_date, date(2024, 12, 12));
    assert_eq!(loaded.end_date, date(2024, 12, 14));
    assert_eq!(loaded.num_guests, 1);
}

#[test]
fn corrupt_stored_date_is_rejected_not_masked() {
    let conn = seeded_conn();
    conn.execute(
        "INSERT INTO reservations (
            id, email, first_name, last_name, national_id,
            start_date, end_date, num_guests
        ) VALUES (
            '6f9fa8e4-3a88-4b1b-9d6c-0a2a8b6c1111', 'bad@example.com', 'Bad', 'Row', 'B0000000',
            '25-12-2024', '2024-12-26', 1
        );",
        [],
    )
    .unwrap();

    let repo = SqliteReservationRepository::try_new(&conn).unwrap();
    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("start_date")));
}

#[test]
fn find_by_id_with_unknown_uuid_returns_not_found() {
    let conn = seeded_conn();
    let repo = SqliteReservationRepository::try_new(&conn).unwrap();

    let err = repo
        .find_by_id("0a0a0a0a-0a0a-4a0a-8a0a-0a0a0a0a0a0a")
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteReservationRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tables() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        reserva_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqliteReservationRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("reservations"))
    ));
}
