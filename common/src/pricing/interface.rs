use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

use super::types::{PricingConfig, PricingError as Error};
use crate::registry::types::PropertyKey;

#[contractclient(name = "PricingContractClient")]
pub trait PricingContractTrait {
    fn initialize(env: Env, admin: Address, default_rate: i128, fee_bps: u32)
        -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;

    fn set_nightly_rate(
        env: Env,
        updater: Address,
        property: PropertyKey,
        rate: i128,
    ) -> Result<(), Error>;
    fn clear_nightly_rate(env: Env, updater: Address, property: PropertyKey)
        -> Result<(), Error>;
    fn set_default_rate(env: Env, admin: Address, rate: i128) -> Result<(), Error>;
    fn set_fee_bps(env: Env, admin: Address, fee_bps: u32) -> Result<(), Error>;
    fn add_updater(env: Env, admin: Address, new_updater: Address) -> Result<(), Error>;
    fn remove_updater(env: Env, admin: Address, updater: Address) -> Result<(), Error>;

    fn get_config(env: Env) -> Result<PricingConfig, Error>;
    fn nightly_rate(env: Env, property: PropertyKey) -> Result<i128, Error>;
    fn quote(env: Env, property: PropertyKey, nights: u32) -> Result<i128, Error>;
    fn fee_bps(env: Env) -> Result<u32, Error>;
}
