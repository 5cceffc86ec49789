use super::{EscrowTest, D1, D2, D3, GUEST_BALANCE, NIGHTLY_RATE};
use common::{
    escrow::types::{BookingStatus, EscrowError, BOOKING_SCHEMA_VERSION, MAX_STAY_NIGHTS},
    registry::types::{DateStatus, PropertyKey},
    DAY,
};
use soroban_sdk::{
    log,
    testutils::{Address as _, Events},
    Address, Env, Vec,
};

#[test]
fn test_happy_path_request_and_approve() {
    let test = EscrowTest::setup();
    assert!(test.escrow_client.is_available(&test.property, &D1));

    let booking_id = test.request_night(&test.guest1, D1);
    assert_eq!(booking_id, 1);
    log!(&test.env, "{}", test.env.events().all());

    let booking = test.escrow_client.get_booking(&booking_id);
    assert_eq!(booking.schema, BOOKING_SCHEMA_VERSION);
    assert_eq!(booking.renter, test.guest1);
    assert_eq!(booking.owner, test.host);
    assert_eq!(booking.property, test.property);
    assert_eq!(booking.start_date, D1);
    assert_eq!(booking.end_date, D1 + DAY);
    assert_eq!(booking.nights, 1);
    assert_eq!(booking.amount, NIGHTLY_RATE);
    assert_eq!(booking.status, BookingStatus::Requested);

    // held while the owner decides
    assert!(!test.escrow_client.is_available(&test.property, &D1));
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).status,
        DateStatus::Held
    );
    assert_eq!(
        test.token_client.balance(&test.guest1),
        GUEST_BALANCE - NIGHTLY_RATE
    );
    assert_eq!(test.escrow_balance(), NIGHTLY_RATE);

    test.escrow_client.approve_booking(&test.host, &booking_id);

    log!(&test.env, "Status {}", test.status(booking_id));
    assert_eq!(test.status(booking_id), BookingStatus::Approved);
    assert!(!test.escrow_client.is_available(&test.property, &D1));
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).status,
        DateStatus::Booked
    );
    assert!(test.escrow_client.is_available(&test.property, &D2));
}

#[test]
fn test_multi_night_request_holds_every_night() {
    let test = EscrowTest::setup();
    let booking_id = test.escrow_client.request_booking(
        &test.guest1,
        &test.property,
        &D1,
        &(D3 + DAY),
        &(3 * NIGHTLY_RATE),
    );

    assert_eq!(test.escrow_client.get_booking(&booking_id).nights, 3);
    for date in [D1, D2, D3] {
        assert_eq!(
            test.registry_client.get_date_entry(&test.property, &date).booking_id,
            Some(booking_id)
        );
    }
    assert_eq!(test.registry_client.available_dates(&test.property).len(), 0);
}

#[test]
fn test_overpaying_deposit_is_held_in_full() {
    let test = EscrowTest::setup();
    let booking_id =
        test.escrow_client
            .request_booking(&test.guest1, &test.property, &D2, &D3, &25i128);
    assert_eq!(test.escrow_client.get_booking(&booking_id).amount, 25);
    assert_eq!(test.escrow_balance(), 25);
}

#[test]
fn test_malformed_requests_are_rejected() {
    let test = EscrowTest::setup();

    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.guest1, &test.property, &D2, &D2, &NIGHTLY_RATE),
        Err(Ok(EscrowError::InvalidDateRange))
    );
    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.guest1, &test.property, &D3, &D1, &NIGHTLY_RATE),
        Err(Ok(EscrowError::InvalidDateRange))
    );
    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.guest1, &test.property, &D1, &D2, &0i128),
        Err(Ok(EscrowError::InvalidAmount))
    );

    let too_far = D1 + (MAX_STAY_NIGHTS as u64 + 1) * DAY;
    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.guest1, &test.property, &D1, &too_far, &i128::MAX),
        Err(Ok(EscrowError::StayTooLong))
    );

    assert_eq!(test.escrow_client.booking_count(), 0);
    assert_eq!(test.token_client.balance(&test.guest1), GUEST_BALANCE);
}

#[test]
fn test_deposit_below_quote() {
    let test = EscrowTest::setup();
    let result = test.escrow_client.try_request_booking(
        &test.guest1,
        &test.property,
        &D1,
        &D3,
        &(2 * NIGHTLY_RATE - 1),
    );
    assert_eq!(result, Err(Ok(EscrowError::InsufficientDeposit)));
    assert!(test.escrow_client.is_available(&test.property, &D1));
    assert!(test.escrow_client.is_available(&test.property, &D2));
}

#[test]
fn test_renter_without_funds() {
    let test = EscrowTest::setup();
    let broke = Address::generate(&test.env);
    test.token_admin_client.mint(&broke, &(NIGHTLY_RATE - 1));

    let result = test.escrow_client.try_request_booking(
        &broke,
        &test.property,
        &D1,
        &D2,
        &NIGHTLY_RATE,
    );
    assert_eq!(result, Err(Ok(EscrowError::InsufficientBalance)));
    assert!(test.escrow_client.is_available(&test.property, &D1));
}

#[test]
fn test_unknown_property_and_own_property() {
    let test = EscrowTest::setup();
    let unknown = PropertyKey {
        collection: 77,
        serial: 1,
    };

    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.guest1, &unknown, &D1, &D2, &NIGHTLY_RATE),
        Err(Ok(EscrowError::PropertyNotFound))
    );
    assert_eq!(
        test.escrow_client.try_get_booking(&99u64),
        Err(Ok(EscrowError::BookingNotFound))
    );

    test.token_admin_client.mint(&test.host, &GUEST_BALANCE);
    assert_eq!(
        test.escrow_client
            .try_request_booking(&test.host, &test.property, &D1, &D2, &NIGHTLY_RATE),
        Err(Ok(EscrowError::RenterIsOwner))
    );
}

#[test]
fn test_unlisted_date_is_unavailable() {
    let test = EscrowTest::setup();
    let unlisted = D3 + DAY;
    let result = test.escrow_client.try_request_booking(
        &test.guest1,
        &test.property,
        &unlisted,
        &(unlisted + DAY),
        &NIGHTLY_RATE,
    );
    assert_eq!(result, Err(Ok(EscrowError::DateUnavailable)));
}

#[test]
fn test_withdrawn_date_is_unavailable() {
    let test = EscrowTest::setup();
    test.registry_client
        .withdraw_availability(&test.host, &test.property, &D1);

    let result = test.escrow_client.try_request_booking(
        &test.guest1,
        &test.property,
        &D1,
        &D2,
        &NIGHTLY_RATE,
    );
    assert_eq!(result, Err(Ok(EscrowError::DateUnavailable)));
    assert_eq!(test.token_client.balance(&test.guest1), GUEST_BALANCE);
    assert_eq!(test.escrow_balance(), 0);
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).status,
        DateStatus::Withdrawn
    );
}

#[test]
fn test_last_representable_night() {
    let test = EscrowTest::setup();
    let last = u64::MAX - 100;
    test.registry_client
        .add_availability(&test.host, &test.property, &Vec::from_array(&test.env, [last]));
    assert!(test.escrow_client.is_available(&test.property, &last));

    assert_eq!(
        test.escrow_client
            .required_deposit(&test.property, &last, &(last + 1)),
        NIGHTLY_RATE
    );
    let booking_id = test.escrow_client.request_booking(
        &test.guest1,
        &test.property,
        &last,
        &(last + 1),
        &NIGHTLY_RATE,
    );
    assert_eq!(test.escrow_client.get_booking(&booking_id).nights, 1);
    assert!(!test.escrow_client.is_available(&test.property, &last));

    test.escrow_client.reject_booking(&test.host, &booking_id);
    assert!(test.escrow_client.is_available(&test.property, &last));
    assert_eq!(test.token_client.balance(&test.guest1), GUEST_BALANCE);

    let again = test.escrow_client.request_booking(
        &test.guest2,
        &test.property,
        &last,
        &u64::MAX,
        &NIGHTLY_RATE,
    );
    test.escrow_client.approve_booking(&test.host, &again);
    assert_eq!(test.status(again), BookingStatus::Approved);
}

#[test]
fn test_race_for_same_night() {
    let test = EscrowTest::setup();

    // both requests land in the same ledger; the first one applied wins
    let first = test.request_night(&test.guest1, D2);
    let second = test.escrow_client.try_request_booking(
        &test.guest2,
        &test.property,
        &D2,
        &D3,
        &NIGHTLY_RATE,
    );

    assert_eq!(second, Err(Ok(EscrowError::DateUnavailable)));
    assert_eq!(test.status(first), BookingStatus::Requested);
    assert_eq!(test.escrow_client.booking_count(), 1);
    assert_eq!(test.token_client.balance(&test.guest2), GUEST_BALANCE);
}

#[test]
fn test_failed_range_request_holds_nothing() {
    let test = EscrowTest::setup();
    test.request_night(&test.guest1, D2);

    let result = test.escrow_client.try_request_booking(
        &test.guest2,
        &test.property,
        &D1,
        &(D3 + DAY),
        &(3 * NIGHTLY_RATE),
    );
    assert_eq!(result, Err(Ok(EscrowError::DateUnavailable)));

    assert!(test.escrow_client.is_available(&test.property, &D1));
    assert!(test.escrow_client.is_available(&test.property, &D3));
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).booking_id,
        None
    );
    assert_eq!(test.token_client.balance(&test.guest2), GUEST_BALANCE);
    assert_eq!(test.escrow_balance(), NIGHTLY_RATE);
}

#[test]
fn test_request_indexes_and_quotes() {
    let test = EscrowTest::setup();
    let first = test.request_night(&test.guest1, D1);
    let second = test.request_night(&test.guest2, D2);
    let third = test.request_night(&test.guest1, D3);

    assert_eq!(test.escrow_client.booking_count(), 3);
    assert_eq!(
        test.escrow_client.get_renter_bookings(&test.guest1),
        Vec::from_array(&test.env, [first, third])
    );
    assert_eq!(
        test.escrow_client.get_property_bookings(&test.property),
        Vec::from_array(&test.env, [first, second, third])
    );
    assert_eq!(
        test.escrow_client.list_dates(&test.property),
        Vec::from_array(&test.env, [D1, D2, D3])
    );

    test.pricing_client
        .set_nightly_rate(&test.admin, &test.property, &40i128);
    assert_eq!(
        test.escrow_client
            .required_deposit(&test.property, &D1, &(D1 + 2 * DAY)),
        80
    );
}
