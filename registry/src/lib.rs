#![no_std]

mod availability;
pub mod contract;
mod events;
mod utils;

pub use contract::RegistryContract;
