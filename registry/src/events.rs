use common::registry::types::PropertyKey;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RegistryEvent {
    Initialized(Address),
    Upgraded(u32),
    CollectionCreated(u32, Address, u64),
    PropertyMinted(PropertyKey, Address),
    AvailabilityAdded(PropertyKey, u32),
    AvailabilityWithdrawn(PropertyKey, u64),
    OwnershipTransferred(PropertyKey, Address, Address),
    DatesHeld(PropertyKey, u64, u32),
    DatesBooked(PropertyKey, u32),
    DatesReleased(PropertyKey, u32),
}

impl RegistryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistryEvent::Initialized(..) => stringify!(Initialized),
            RegistryEvent::Upgraded(..) => stringify!(Upgraded),
            RegistryEvent::CollectionCreated(..) => stringify!(CollectionCreated),
            RegistryEvent::PropertyMinted(..) => stringify!(PropertyMinted),
            RegistryEvent::AvailabilityAdded(..) => stringify!(AvailabilityAdded),
            RegistryEvent::AvailabilityWithdrawn(..) => stringify!(AvailabilityWithdrawn),
            RegistryEvent::OwnershipTransferred(..) => stringify!(OwnershipTransferred),
            RegistryEvent::DatesHeld(..) => stringify!(DatesHeld),
            RegistryEvent::DatesBooked(..) => stringify!(DatesBooked),
            RegistryEvent::DatesReleased(..) => stringify!(DatesReleased),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            RegistryEvent::Initialized(escrow) => {
                v.push_back(escrow.into_val(env));
            }
            RegistryEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            RegistryEvent::CollectionCreated(collection, creator, max_supply) => {
                v.push_back(collection.into_val(env));
                v.push_back(creator.into_val(env));
                v.push_back(max_supply.into_val(env));
            }
            RegistryEvent::PropertyMinted(property, owner) => {
                v.push_back(property.into_val(env));
                v.push_back(owner.into_val(env));
            }
            RegistryEvent::AvailabilityAdded(property, added) => {
                v.push_back(property.into_val(env));
                v.push_back(added.into_val(env));
            }
            RegistryEvent::AvailabilityWithdrawn(property, date) => {
                v.push_back(property.into_val(env));
                v.push_back(date.into_val(env));
            }
            RegistryEvent::OwnershipTransferred(property, from, to) => {
                v.push_back(property.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            RegistryEvent::DatesHeld(property, booking_id, count) => {
                v.push_back(property.into_val(env));
                v.push_back(booking_id.into_val(env));
                v.push_back(count.into_val(env));
            }
            RegistryEvent::DatesBooked(property, count)
            | RegistryEvent::DatesReleased(property, count) => {
                v.push_back(property.into_val(env));
                v.push_back(count.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
