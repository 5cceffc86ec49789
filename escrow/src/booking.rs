use common::{
    escrow::types::{
        Booking, BookingStatus, EscrowDataKey as DataKey, EscrowError as Error, MAX_STAY_NIGHTS,
        REQUEST_TTL,
    },
    pricing::types::MAX_FEE_BPS,
    registry::types::PropertyKey,
    storage::{read_config, read_record, write_config, write_record},
    DAY,
};
use soroban_sdk::{Address, Env, Vec};

/// Nights of the half-open stay `[start_date, end_date)`, one per `DAY`.
pub fn stay_dates(env: &Env, start_date: u64, end_date: u64) -> Result<Vec<u64>, Error> {
    if start_date >= end_date {
        return Err(Error::InvalidDateRange);
    }
    let span = end_date - start_date;
    if span > MAX_STAY_NIGHTS as u64 * DAY {
        return Err(Error::StayTooLong);
    }

    let mut dates = Vec::new(env);
    let mut date = start_date;
    while date < end_date {
        dates.push_back(date);
        match date.checked_add(DAY) {
            Some(next) => date = next,
            None => break,
        }
    }
    Ok(dates)
}

pub fn next_booking_id(env: &Env) -> u64 {
    let count: u64 = read_config(env, &DataKey::BookingCount).unwrap_or(0);
    let id = count + 1;
    write_config(env, &DataKey::BookingCount, &id);
    id
}

pub fn load_booking(env: &Env, booking_id: u64) -> Result<Booking, Error> {
    read_record(env, &DataKey::Booking(booking_id)).ok_or(Error::BookingNotFound)
}

pub fn save_booking(env: &Env, booking: &Booking) {
    write_record(env, &DataKey::Booking(booking.id), booking);
}

pub fn index_booking(env: &Env, booking: &Booking) {
    push_id(env, &DataKey::RenterBookings(booking.renter.clone()), booking.id);
    push_id(env, &DataKey::PropertyBookings(booking.property.clone()), booking.id);
}

fn push_id(env: &Env, key: &DataKey, booking_id: u64) {
    let mut ids: Vec<u64> = read_record(env, key).unwrap_or_else(|| Vec::new(env));
    ids.push_back(booking_id);
    write_record(env, key, &ids);
}

pub fn renter_bookings(env: &Env, renter: Address) -> Vec<u64> {
    read_record(env, &DataKey::RenterBookings(renter)).unwrap_or_else(|| Vec::new(env))
}

pub fn property_bookings(env: &Env, property: PropertyKey) -> Vec<u64> {
    read_record(env, &DataKey::PropertyBookings(property)).unwrap_or_else(|| Vec::new(env))
}

pub fn request_ttl(env: &Env) -> u64 {
    read_config(env, &REQUEST_TTL).unwrap_or(0)
}

/// A zero TTL means requests never lapse.
pub fn is_expired(env: &Env, booking: &Booking) -> bool {
    let ttl = request_ttl(env);
    ttl > 0
        && booking.status == BookingStatus::Requested
        && env.ledger().timestamp() >= booking.requested_at.saturating_add(ttl)
}

pub fn require_status(booking: &Booking, status: BookingStatus) -> Result<(), Error> {
    if booking.status != status {
        return Err(Error::InvalidBookingState);
    }
    Ok(())
}

pub fn require_owner(booking: &Booking, caller: &Address) -> Result<(), Error> {
    if booking.owner != *caller {
        return Err(Error::NotPropertyOwner);
    }
    Ok(())
}

pub fn require_party(booking: &Booking, caller: &Address) -> Result<(), Error> {
    if booking.owner != *caller && booking.renter != *caller {
        return Err(Error::NotBookingParty);
    }
    Ok(())
}

/// Platform fee on `amount`, rounded down. Split so `amount * fee_bps` never overflows.
pub fn platform_fee(amount: i128, fee_bps: u32) -> i128 {
    let bps = fee_bps.min(MAX_FEE_BPS) as i128;
    let denom = MAX_FEE_BPS as i128;
    (amount / denom) * bps + (amount % denom) * bps / denom
}
