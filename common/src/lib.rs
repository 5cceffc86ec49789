#![no_std]

pub mod storage;

pub mod registry {
    pub mod interface;
    pub mod types;
}

pub mod escrow {
    pub mod interface;
    pub mod types;
}

pub mod pricing {
    pub mod interface;
    pub mod types;
}

/// Length of one night in ledger seconds. Dates are whole-day timestamps.
pub const DAY: u64 = 86_400;
