use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    StateNotAlreadySet = 3,
    CollectionNotFound = 4,
    NotCollectionCreator = 5,
    InvalidSupply = 6,
    MaxSupplyReached = 7,
    PropertyNotFound = 8,
    NotPropertyOwner = 9,
    DateNotListed = 10,
    DateNotAvailable = 11,
    InvalidDateState = 12,
}

/// Identity of a property token inside one registry contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyKey {
    pub collection: u32,
    pub serial: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collection {
    pub id: u32,
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    pub memo: String,
    pub max_supply: u64,
    pub minted: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub owner: Address,
    pub metadata_uri: String,
    pub minted_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateStatus {
    Available = 1,
    Held = 2,
    Booked = 3,
    Withdrawn = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AvailabilityEntry {
    pub status: DateStatus,
    pub booking_id: Option<u64>, // set while Held and once Booked
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryDataKey {
    CollectionCount,
    Collection(u32),
    Property(PropertyKey),
    PropertyDates(PropertyKey),    // offerable dates, insertion order
    DateEntry(PropertyKey, u64),   // availability entry per date
    OwnerProperties(Address),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const ESCROW_CONTRACT: Symbol = symbol_short!("ESCROW_CA");
