use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

use crate::registry::types::PropertyKey;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    StateNotAlreadySet = 3,
    InvalidDateRange = 4,
    StayTooLong = 5,
    InvalidAmount = 6,
    DateUnavailable = 7,
    InsufficientDeposit = 8,
    InsufficientBalance = 9,
    NotPropertyOwner = 10,
    NotBookingParty = 11,
    RenterIsOwner = 12,
    InvalidBookingState = 13,
    BookingExpired = 14,
    BookingNotExpired = 15,
    BookingNotFound = 16,
    PropertyNotFound = 17,
    RegistryCallFailed = 18,
    PricingCallFailed = 19,
}

/// Bumped whenever the `Booking` layout changes.
pub const BOOKING_SCHEMA_VERSION: u32 = 1;

/// Longest stay a single request can hold.
pub const MAX_STAY_NIGHTS: u32 = 90;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingStatus {
    Requested = 1,
    Approved = 2,
    Rejected = 3,
    Completed = 4,
    Cancelled = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    pub schema: u32,
    pub id: u64,
    pub renter: Address,
    pub owner: Address,
    pub property: PropertyKey,
    pub start_date: u64,
    pub end_date: u64, // exclusive
    pub nights: u32,
    pub amount: i128,
    pub fee_bps: u32,
    pub status: BookingStatus,
    pub requested_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowDataKey {
    BookingCount,
    Booking(u64),
    RenterBookings(Address),
    PropertyBookings(PropertyKey),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const REGISTRY_CONTRACT: Symbol = symbol_short!("REG_CA");
pub const PRICING_CONTRACT: Symbol = symbol_short!("PRICE_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const TREASURY: Symbol = symbol_short!("TREASURY");
pub const REQUEST_TTL: Symbol = symbol_short!("REQ_TTL");
