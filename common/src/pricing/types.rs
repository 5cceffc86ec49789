use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol, Vec};

use crate::registry::types::PropertyKey;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PricingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    StateNotAlreadySet = 3,
    Unauthorized = 4,
    InvalidRate = 5,
    InvalidFee = 6,
    Overflow = 7,
}

/// Basis-point denominator for the platform fee.
pub const MAX_FEE_BPS: u32 = 10_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PricingConfig {
    pub admin: Address,
    pub updaters: Vec<Address>,
    pub default_rate: i128,
    pub fee_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NightlyRate {
    pub rate: i128,
    pub updated_by: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PricingDataKey {
    Rate(PropertyKey),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const CONFIG: Symbol = symbol_short!("CONFIG");
