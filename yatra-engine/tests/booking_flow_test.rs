use std::time::Duration;

use chrono::NaiveDate;
use yatra_core::{BookingRequest, City, NewAccount, Phone, TripQuery};
use yatra_engine::{AuthService, BookingService, BusDirectory, EngineError, SimulatedDirectory};
use yatra_store::{FileStorage, MemoryStorage, RecordStore};

fn asha() -> NewAccount {
    NewAccount {
        phone: Phone::new("9876543210").unwrap(),
        first_name: "Asha".to_string(),
        last_name: "Verma".to_string(),
        address: "12 MG Road, Pune".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_search_register_book_cancel_flow() {
    let store = RecordStore::new(MemoryStorage::new());
    let auth = AuthService::new(&store);
    let bookings = BookingService::new(&store);
    let directory = SimulatedDirectory::with_settings(Duration::from_millis(0), 0.0);

    // Search before any login: the directory needs no session
    let query = TripQuery {
        from: City::Mumbai,
        to: City::Pune,
        date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
    };
    let buses = directory.search(&query).await.unwrap();
    assert_eq!(buses.len(), 3);

    // Register, then prove the duplicate is rejected and the original wins
    auth.register(asha()).unwrap();
    let err = auth.register(asha()).unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));

    let session = auth.login(&Phone::new("9876543210").unwrap(), "secret").unwrap();

    // Book two seats on the searched route
    let booked = bookings
        .book(
            &session,
            BookingRequest {
                from: query.from,
                to: query.to,
                date: query.date,
                seats: 2,
            },
        )
        .unwrap();

    let listed = bookings.bookings_for(&session).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, booked.id);
    assert_eq!(listed[0].seats, 2);

    // The check-booking form path sees the same record without a session
    let checked = bookings.lookup("9876543210").unwrap();
    assert_eq!(checked, listed);

    // Cancel, twice; the second is a no-op
    bookings.cancel(&session, booked.id).unwrap();
    bookings.cancel(&session, booked.id).unwrap();
    assert!(bookings.bookings_for(&session).unwrap().is_empty());

    auth.logout(session).unwrap();
    assert!(auth.restore_session().unwrap().is_none());
}

#[test]
fn test_session_survives_restart_on_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let phone = Phone::new("9876543210").unwrap();

    let token = {
        let store = RecordStore::new(FileStorage::open(dir.path()).unwrap());
        let auth = AuthService::new(&store);
        auth.register(asha()).unwrap();
        auth.login(&phone, "secret").unwrap().token
    };

    // A fresh store over the same profile dir restores the session
    let store = RecordStore::new(FileStorage::open(dir.path()).unwrap());
    let auth = AuthService::new(&store);
    let restored = auth.restore_session().unwrap().unwrap();
    assert_eq!(restored.token, token);
    assert_eq!(restored.phone, phone);

    auth.logout(restored).unwrap();
    let store = RecordStore::new(FileStorage::open(dir.path()).unwrap());
    let auth = AuthService::new(&store);
    assert!(auth.restore_session().unwrap().is_none());
}

#[test]
fn test_wrong_password_reads_as_not_found() {
    // Register 9876543210; correct credential succeeds, wrong one reads as
    // not-found rather than a distinct "wrong password" error.
    let store = RecordStore::new(MemoryStorage::new());
    let auth = AuthService::new(&store);

    auth.register(asha()).unwrap();

    let phone = Phone::new("9876543210").unwrap();
    assert!(auth.login(&phone, "secret").is_ok());
    assert!(matches!(
        auth.login(&phone, "not-the-password"),
        Err(EngineError::NotFound(_))
    ));
}
