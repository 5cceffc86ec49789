use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Vec};

use super::types::{Booking, EscrowError as Error};
use crate::registry::types::PropertyKey;

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        pricing: Address,
        payment_token: Address,
        treasury: Address,
        request_ttl: u64,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn set_request_ttl(env: Env, request_ttl: u64) -> Result<(), Error>;
    fn request_ttl(env: Env) -> u64;

    fn request_booking(
        env: Env,
        renter: Address,
        property: PropertyKey,
        start_date: u64,
        end_date: u64,
        deposit: i128,
    ) -> Result<u64, Error>;
    fn approve_booking(env: Env, owner: Address, booking_id: u64) -> Result<(), Error>;
    fn reject_booking(env: Env, owner: Address, booking_id: u64) -> Result<(), Error>;
    fn cancel_booking(env: Env, caller: Address, booking_id: u64) -> Result<(), Error>;
    fn expire_booking(env: Env, booking_id: u64) -> Result<(), Error>;
    fn complete_booking(env: Env, caller: Address, booking_id: u64) -> Result<i128, Error>;

    fn get_booking(env: Env, booking_id: u64) -> Result<Booking, Error>;
    fn booking_count(env: Env) -> u64;
    fn get_renter_bookings(env: Env, renter: Address) -> Vec<u64>;
    fn get_property_bookings(env: Env, property: PropertyKey) -> Vec<u64>;
    fn required_deposit(
        env: Env,
        property: PropertyKey,
        start_date: u64,
        end_date: u64,
    ) -> Result<i128, Error>;
    fn is_available(env: Env, property: PropertyKey, date: u64) -> Result<bool, Error>;
    fn list_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error>;
}
