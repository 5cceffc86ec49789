use common::{
    registry::types::{
        Property, PropertyKey, RegistryDataKey as DataKey, RegistryError as Error, ADMIN,
        ESCROW_CONTRACT,
    },
    storage::{read_config, read_record},
};
use soroban_sdk::{Address, Env};

pub fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin: Address = read_config(env, &ADMIN).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

// Holds, bookings and releases may only come from the escrow contract.
pub fn require_escrow_call(env: &Env) -> Result<(), Error> {
    let escrow: Address = read_config(env, &ESCROW_CONTRACT).ok_or(Error::NotInitialized)?;
    escrow.require_auth();
    Ok(())
}

pub fn load_property(env: &Env, property: &PropertyKey) -> Result<Property, Error> {
    read_record(env, &DataKey::Property(property.clone())).ok_or(Error::PropertyNotFound)
}

pub fn require_owner(env: &Env, owner: &Address, property: &PropertyKey) -> Result<Property, Error> {
    owner.require_auth();
    let record = load_property(env, property)?;
    if record.owner != *owner {
        return Err(Error::NotPropertyOwner);
    }
    Ok(record)
}
