use super::{EscrowTest, D1, D2, D3, GUEST_BALANCE, NIGHTLY_RATE};
use common::{
    escrow::types::{BookingStatus, EscrowError},
    registry::types::DateStatus,
};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_second_approval_is_rejected() {
    let test = EscrowTest::setup();
    let booking_id = test.request_night(&test.guest1, D1);
    test.escrow_client.approve_booking(&test.host, &booking_id);

    let result = test.escrow_client.try_approve_booking(&test.host, &booking_id);
    assert_eq!(result, Err(Ok(EscrowError::InvalidBookingState)));

    let booking = test.escrow_client.get_booking(&booking_id);
    assert_eq!(booking.status, BookingStatus::Approved);
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).status,
        DateStatus::Booked
    );
}

#[test]
fn test_only_owner_approves() {
    let test = EscrowTest::setup();
    let booking_id = test.request_night(&test.guest1, D1);
    let intruder = Address::generate(&test.env);

    assert_eq!(
        test.escrow_client.try_approve_booking(&intruder, &booking_id),
        Err(Ok(EscrowError::NotPropertyOwner))
    );
    // the renter cannot approve their own request either
    assert_eq!(
        test.escrow_client
            .try_approve_booking(&test.guest1, &booking_id),
        Err(Ok(EscrowError::NotPropertyOwner))
    );

    assert_eq!(test.status(booking_id), BookingStatus::Requested);
    assert_eq!(
        test.registry_client.get_date_entry(&test.property, &D1).status,
        DateStatus::Held
    );
}

#[test]
fn test_reject_restores_dates_and_refunds() {
    let test = EscrowTest::setup();
    let booking_id = test.escrow_client.request_booking(
        &test.guest1,
        &test.property,
        &D2,
        &(D3 + common::DAY),
        &(2 * NIGHTLY_RATE),
    );
    assert!(!test.escrow_client.is_available(&test.property, &D3));

    test.escrow_client.reject_booking(&test.host, &booking_id);

    assert_eq!(test.status(booking_id), BookingStatus::Rejected);
    assert!(test.escrow_client.is_available(&test.property, &D2));
    assert!(test.escrow_client.is_available(&test.property, &D3));
    assert_eq!(test.token_client.balance(&test.guest1), GUEST_BALANCE);
    assert_eq!(test.escrow_balance(), 0);

    // the released night can be requested again
    let again = test.request_night(&test.guest2, D3);
    assert_eq!(test.status(again), BookingStatus::Requested);
}

#[test]
fn test_reject_requires_pending_request() {
    let test = EscrowTest::setup();
    let booking_id = test.request_night(&test.guest1, D1);

    assert_eq!(
        test.escrow_client.try_reject_booking(&test.guest2, &booking_id),
        Err(Ok(EscrowError::NotPropertyOwner))
    );

    test.escrow_client.approve_booking(&test.host, &booking_id);
    assert_eq!(
        test.escrow_client.try_reject_booking(&test.host, &booking_id),
        Err(Ok(EscrowError::InvalidBookingState))
    );
    assert_eq!(test.status(booking_id), BookingStatus::Approved);
    assert_eq!(test.escrow_balance(), NIGHTLY_RATE);
}

#[test]
fn test_decisions_on_unknown_booking() {
    let test = EscrowTest::setup();
    assert_eq!(
        test.escrow_client.try_approve_booking(&test.host, &42u64),
        Err(Ok(EscrowError::BookingNotFound))
    );
    assert_eq!(
        test.escrow_client.try_reject_booking(&test.host, &42u64),
        Err(Ok(EscrowError::BookingNotFound))
    );
}

#[test]
fn test_approvals_are_independent_per_booking() {
    let test = EscrowTest::setup();
    let first = test.request_night(&test.guest1, D1);
    let second = test.request_night(&test.guest2, D2);

    test.escrow_client.approve_booking(&test.host, &second);
    test.escrow_client.reject_booking(&test.host, &first);

    assert_eq!(test.status(first), BookingStatus::Rejected);
    assert_eq!(test.status(second), BookingStatus::Approved);
    assert!(test.escrow_client.is_available(&test.property, &D1));
    assert!(!test.escrow_client.is_available(&test.property, &D2));
}
