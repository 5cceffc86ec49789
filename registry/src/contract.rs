use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

use crate::{
    availability::{self, Transition},
    events::RegistryEvent,
    utils::{load_property, require_admin, require_escrow_call, require_owner},
};
use common::{
    registry::{
        interface::RegistryInterface,
        types::{
            AvailabilityEntry, Collection, Property, PropertyKey, RegistryDataKey as DataKey,
            RegistryError as Error, ADMIN, ESCROW_CONTRACT,
        },
    },
    storage::{has_config, read_config, read_record, write_config, write_record},
};

#[contract]
pub struct RegistryContract;

#[contractimpl]
impl RegistryInterface for RegistryContract {
    fn initialize(env: Env, admin: Address, escrow_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_config(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        write_config(&env, &ADMIN, &admin);
        write_config(&env, &ESCROW_CONTRACT, &escrow_contract_id);
        write_config(&env, &DataKey::CollectionCount, &0u32);
        RegistryEvent::Initialized(escrow_contract_id).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RegistryEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        require_admin(&env)?;

        if !has_config(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        write_config(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn create_collection(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        memo: String,
        max_supply: u64,
    ) -> Result<u32, Error> {
        creator.require_auth();
        if max_supply == 0 {
            return Err(Error::InvalidSupply);
        }

        let count: u32 =
            read_config(&env, &DataKey::CollectionCount).ok_or(Error::NotInitialized)?;
        let id = count + 1;

        let collection = Collection {
            id,
            creator: creator.clone(),
            name,
            symbol,
            memo,
            max_supply,
            minted: 0,
        };
        write_record(&env, &DataKey::Collection(id), &collection);
        write_config(&env, &DataKey::CollectionCount, &id);

        RegistryEvent::CollectionCreated(id, creator, max_supply).publish(&env);
        Ok(id)
    }

    fn mint_property(
        env: Env,
        creator: Address,
        collection: u32,
        to: Address,
        metadata_uri: String,
        dates: Vec<u64>,
    ) -> Result<u64, Error> {
        creator.require_auth();

        let mut record = Self::get_collection(env.clone(), collection)?;
        if record.creator != creator {
            return Err(Error::NotCollectionCreator);
        }
        if record.minted >= record.max_supply {
            return Err(Error::MaxSupplyReached);
        }

        record.minted += 1;
        let key = PropertyKey {
            collection,
            serial: record.minted,
        };
        let property = Property {
            key: key.clone(),
            owner: to.clone(),
            metadata_uri,
            minted_at: env.ledger().timestamp(),
        };

        write_record(&env, &DataKey::Collection(collection), &record);
        write_record(&env, &DataKey::Property(key.clone()), &property);
        link_owner(&env, &to, &key);
        availability::offer(&env, &key, &dates);

        RegistryEvent::PropertyMinted(key.clone(), to).publish(&env);
        Ok(key.serial)
    }

    fn add_availability(
        env: Env,
        owner: Address,
        property: PropertyKey,
        dates: Vec<u64>,
    ) -> Result<u32, Error> {
        require_owner(&env, &owner, &property)?;
        let added = availability::offer(&env, &property, &dates);
        RegistryEvent::AvailabilityAdded(property, added).publish(&env);
        Ok(added)
    }

    fn withdraw_availability(
        env: Env,
        owner: Address,
        property: PropertyKey,
        date: u64,
    ) -> Result<(), Error> {
        require_owner(&env, &owner, &property)?;
        availability::withdraw(&env, &property, date)?;
        RegistryEvent::AvailabilityWithdrawn(property, date).publish(&env);
        Ok(())
    }

    fn transfer_ownership(
        env: Env,
        from: Address,
        to: Address,
        property: PropertyKey,
    ) -> Result<(), Error> {
        let mut record = require_owner(&env, &from, &property)?;
        record.owner = to.clone();
        write_record(&env, &DataKey::Property(property.clone()), &record);

        unlink_owner(&env, &from, &property);
        link_owner(&env, &to, &property);

        RegistryEvent::OwnershipTransferred(property, from, to).publish(&env);
        Ok(())
    }

    fn get_collection(env: Env, collection: u32) -> Result<Collection, Error> {
        read_record(&env, &DataKey::Collection(collection)).ok_or(Error::CollectionNotFound)
    }

    fn get_property(env: Env, property: PropertyKey) -> Result<Property, Error> {
        load_property(&env, &property)
    }

    fn get_owner(env: Env, property: PropertyKey) -> Result<Address, Error> {
        Ok(load_property(&env, &property)?.owner)
    }

    fn is_owner(env: Env, property: PropertyKey, address: Address) -> bool {
        match load_property(&env, &property) {
            Ok(record) => record.owner == address,
            Err(_) => false,
        }
    }

    fn properties_of(env: Env, owner: Address) -> Vec<PropertyKey> {
        read_record(&env, &DataKey::OwnerProperties(owner)).unwrap_or_else(|| Vec::new(&env))
    }

    fn get_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error> {
        Self::list_dates(env, property)
    }

    fn is_available(env: Env, property: PropertyKey, date: u64) -> bool {
        availability::is_available(&env, &property, date)
    }

    fn list_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error> {
        load_property(&env, &property)?;
        Ok(availability::list(&env, &property))
    }

    fn available_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error> {
        load_property(&env, &property)?;
        Ok(availability::available(&env, &property))
    }

    fn get_date_entry(
        env: Env,
        property: PropertyKey,
        date: u64,
    ) -> Result<AvailabilityEntry, Error> {
        load_property(&env, &property)?;
        availability::read_entry(&env, &property, date).ok_or(Error::DateNotListed)
    }

    fn mark_held(env: Env, property: PropertyKey, date: u64, booking_id: u64) -> Result<(), Error> {
        Self::hold_dates(env.clone(), property, Vec::from_array(&env, [date]), booking_id)
    }

    fn mark_booked(env: Env, property: PropertyKey, date: u64) -> Result<(), Error> {
        Self::book_dates(env.clone(), property, Vec::from_array(&env, [date]))
    }

    fn release(env: Env, property: PropertyKey, date: u64) -> Result<(), Error> {
        Self::release_dates(env.clone(), property, Vec::from_array(&env, [date]))
    }

    fn hold_dates(
        env: Env,
        property: PropertyKey,
        dates: Vec<u64>,
        booking_id: u64,
    ) -> Result<(), Error> {
        require_escrow_call(&env)?;
        load_property(&env, &property)?;
        let count = availability::transition(&env, &property, &dates, Transition::Hold(booking_id))?;
        RegistryEvent::DatesHeld(property, booking_id, count).publish(&env);
        Ok(())
    }

    fn book_dates(env: Env, property: PropertyKey, dates: Vec<u64>) -> Result<(), Error> {
        require_escrow_call(&env)?;
        load_property(&env, &property)?;
        let count = availability::transition(&env, &property, &dates, Transition::Book)?;
        RegistryEvent::DatesBooked(property, count).publish(&env);
        Ok(())
    }

    fn release_dates(env: Env, property: PropertyKey, dates: Vec<u64>) -> Result<(), Error> {
        require_escrow_call(&env)?;
        load_property(&env, &property)?;
        let count = availability::transition(&env, &property, &dates, Transition::Release)?;
        RegistryEvent::DatesReleased(property, count).publish(&env);
        Ok(())
    }
}

fn link_owner(env: &Env, owner: &Address, property: &PropertyKey) {
    let key = DataKey::OwnerProperties(owner.clone());
    let mut owned: Vec<PropertyKey> = read_record(env, &key).unwrap_or_else(|| Vec::new(env));
    if !owned.contains(property) {
        owned.push_back(property.clone());
        write_record(env, &key, &owned);
    }
}

fn unlink_owner(env: &Env, owner: &Address, property: &PropertyKey) {
    let key = DataKey::OwnerProperties(owner.clone());
    let mut owned: Vec<PropertyKey> = read_record(env, &key).unwrap_or_else(|| Vec::new(env));
    if let Some(index) = owned.first_index_of(property) {
        owned.remove(index);
        write_record(env, &key, &owned);
    }
}
