use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol, Vec};
use super::types::{
    AvailabilityEntry, Collection, Property, PropertyKey, RegistryError as Error,
};

#[contractclient(name = "RegistryContractClient")]
pub trait RegistryInterface {
    fn initialize(env: Env, admin: Address, escrow_contract_id: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;

    // property registry
    fn create_collection(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        memo: String,
        max_supply: u64,
    ) -> Result<u32, Error>;
    fn mint_property(
        env: Env,
        creator: Address,
        collection: u32,
        to: Address,
        metadata_uri: String,
        dates: Vec<u64>,
    ) -> Result<u64, Error>;
    fn add_availability(
        env: Env,
        owner: Address,
        property: PropertyKey,
        dates: Vec<u64>,
    ) -> Result<u32, Error>;
    fn withdraw_availability(
        env: Env,
        owner: Address,
        property: PropertyKey,
        date: u64,
    ) -> Result<(), Error>;
    fn transfer_ownership(
        env: Env,
        from: Address,
        to: Address,
        property: PropertyKey,
    ) -> Result<(), Error>;
    fn get_collection(env: Env, collection: u32) -> Result<Collection, Error>;
    fn get_property(env: Env, property: PropertyKey) -> Result<Property, Error>;
    fn get_owner(env: Env, property: PropertyKey) -> Result<Address, Error>;
    fn is_owner(env: Env, property: PropertyKey, address: Address) -> bool;
    fn properties_of(env: Env, owner: Address) -> Vec<PropertyKey>;
    fn get_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error>;

    // availability ledger
    fn is_available(env: Env, property: PropertyKey, date: u64) -> bool;
    fn list_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error>;
    fn available_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error>;
    fn get_date_entry(env: Env, property: PropertyKey, date: u64)
        -> Result<AvailabilityEntry, Error>;
    fn mark_held(env: Env, property: PropertyKey, date: u64, booking_id: u64)
        -> Result<(), Error>;
    fn mark_booked(env: Env, property: PropertyKey, date: u64) -> Result<(), Error>;
    fn release(env: Env, property: PropertyKey, date: u64) -> Result<(), Error>;
    fn hold_dates(
        env: Env,
        property: PropertyKey,
        dates: Vec<u64>,
        booking_id: u64,
    ) -> Result<(), Error>;
    fn book_dates(env: Env, property: PropertyKey, dates: Vec<u64>) -> Result<(), Error>;
    fn release_dates(env: Env, property: PropertyKey, dates: Vec<u64>) -> Result<(), Error>;
}
