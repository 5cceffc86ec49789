use common::{
    escrow::types::{EscrowError as Error, PAYMENT_TOKEN, PRICING_CONTRACT, REGISTRY_CONTRACT},
    pricing::interface::PricingContractClient,
    registry::{
        interface::RegistryContractClient,
        types::{PropertyKey, RegistryError},
    },
    storage::read_config,
};
use soroban_sdk::{token, Address, Env, Vec};

pub fn get_registry_client(env: &Env) -> Result<RegistryContractClient<'_>, Error> {
    let registry_ca: Address = read_config(env, &REGISTRY_CONTRACT).ok_or(Error::NotInitialized)?;
    Ok(RegistryContractClient::new(env, &registry_ca))
}

pub fn get_pricing_client(env: &Env) -> Result<PricingContractClient<'_>, Error> {
    let pricing_ca: Address = read_config(env, &PRICING_CONTRACT).ok_or(Error::NotInitialized)?;
    Ok(PricingContractClient::new(env, &pricing_ca))
}

pub fn get_token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token_ca: Address = read_config(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token_ca))
}

// Registry failures are re-coded so callers only ever see escrow errors.
fn registry_call<T, C, I>(result: Result<Result<T, C>, Result<RegistryError, I>>) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(RegistryError::DateNotAvailable)) => Err(Error::DateUnavailable),
        Err(Ok(RegistryError::PropertyNotFound)) => Err(Error::PropertyNotFound),
        _ => Err(Error::RegistryCallFailed),
    }
}

fn pricing_call<T, C, E>(result: Result<Result<T, C>, E>) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(Error::PricingCallFailed),
    }
}

pub fn owner_of(env: &Env, property: &PropertyKey) -> Result<Address, Error> {
    registry_call(get_registry_client(env)?.try_get_owner(property))
}

pub fn offered_dates(env: &Env, property: &PropertyKey) -> Result<Vec<u64>, Error> {
    registry_call(get_registry_client(env)?.try_list_dates(property))
}

pub fn hold_dates(
    env: &Env,
    property: &PropertyKey,
    dates: &Vec<u64>,
    booking_id: u64,
) -> Result<(), Error> {
    registry_call(get_registry_client(env)?.try_hold_dates(property, dates, &booking_id))
}

pub fn book_dates(env: &Env, property: &PropertyKey, dates: &Vec<u64>) -> Result<(), Error> {
    registry_call(get_registry_client(env)?.try_book_dates(property, dates))
}

pub fn release_dates(env: &Env, property: &PropertyKey, dates: &Vec<u64>) -> Result<(), Error> {
    registry_call(get_registry_client(env)?.try_release_dates(property, dates))
}

/// Deposit required for `nights` at `property` and the platform fee in basis points.
pub fn quote(env: &Env, property: &PropertyKey, nights: u32) -> Result<(i128, u32), Error> {
    let pricing = get_pricing_client(env)?;
    let required = pricing_call(pricing.try_quote(property, &nights))?;
    let fee_bps = pricing_call(pricing.try_fee_bps())?;
    Ok((required, fee_bps))
}
