//! Per-date availability ledger for registered properties.
//!
//! Every offerable date of a property has one [`AvailabilityEntry`]. Range
//! transitions are validated in full before the first entry is written, so a
//! rejected range leaves every entry as it was.

use common::{
    registry::types::{
        AvailabilityEntry, DateStatus, PropertyKey, RegistryDataKey as DataKey,
        RegistryError as Error,
    },
    storage::{read_record, write_record},
};
use soroban_sdk::{Env, Vec};

/// Target of a range transition, with the state each date must be in first.
#[derive(Clone, Copy)]
pub enum Transition {
    Hold(u64),
    Book,
    Release,
}

impl Transition {
    fn check(&self, entry: Option<AvailabilityEntry>) -> Result<(), Error> {
        match (self, entry) {
            (Transition::Hold(_), Some(e)) if e.status == DateStatus::Available => Ok(()),
            (Transition::Hold(_), _) => Err(Error::DateNotAvailable),
            (_, None) => Err(Error::DateNotListed),
            (_, Some(e)) if e.status == DateStatus::Held => Ok(()),
            _ => Err(Error::InvalidDateState),
        }
    }

    fn apply(&self, entry: AvailabilityEntry) -> AvailabilityEntry {
        match self {
            Transition::Hold(booking_id) => AvailabilityEntry {
                status: DateStatus::Held,
                booking_id: Some(*booking_id),
            },
            Transition::Book => AvailabilityEntry {
                status: DateStatus::Booked,
                booking_id: entry.booking_id,
            },
            Transition::Release => AvailabilityEntry {
                status: DateStatus::Available,
                booking_id: None,
            },
        }
    }
}

fn entry_key(property: &PropertyKey, date: u64) -> DataKey {
    DataKey::DateEntry(property.clone(), date)
}

pub fn read_entry(env: &Env, property: &PropertyKey, date: u64) -> Option<AvailabilityEntry> {
    read_record(env, &entry_key(property, date))
}

fn write_entry(env: &Env, property: &PropertyKey, date: u64, entry: &AvailabilityEntry) {
    write_record(env, &entry_key(property, date), entry);
}

pub fn list(env: &Env, property: &PropertyKey) -> Vec<u64> {
    read_record(env, &DataKey::PropertyDates(property.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn is_available(env: &Env, property: &PropertyKey, date: u64) -> bool {
    matches!(
        read_entry(env, property, date),
        Some(AvailabilityEntry {
            status: DateStatus::Available,
            ..
        })
    )
}

pub fn available(env: &Env, property: &PropertyKey) -> Vec<u64> {
    let mut out = Vec::new(env);
    for date in list(env, property).iter() {
        if is_available(env, property, date) {
            out.push_back(date);
        }
    }
    out
}

/// Offers `dates` for booking. Unseen dates are appended in order, withdrawn
/// dates re-open; anything else is left alone. Returns how many dates became
/// available.
pub fn offer(env: &Env, property: &PropertyKey, dates: &Vec<u64>) -> u32 {
    let mut listed = list(env, property);
    let mut added: u32 = 0;

    for date in dates.iter() {
        match read_entry(env, property, date) {
            None => {
                listed.push_back(date);
            }
            Some(e) if e.status == DateStatus::Withdrawn => {}
            Some(_) => continue,
        }
        write_entry(
            env,
            property,
            date,
            &AvailabilityEntry {
                status: DateStatus::Available,
                booking_id: None,
            },
        );
        added += 1;
    }

    write_record(env, &DataKey::PropertyDates(property.clone()), &listed);
    added
}

pub fn withdraw(env: &Env, property: &PropertyKey, date: u64) -> Result<(), Error> {
    let entry = read_entry(env, property, date).ok_or(Error::DateNotListed)?;
    if entry.status != DateStatus::Available {
        return Err(Error::InvalidDateState);
    }
    write_entry(
        env,
        property,
        date,
        &AvailabilityEntry {
            status: DateStatus::Withdrawn,
            booking_id: None,
        },
    );
    Ok(())
}

/// Applies `transition` to every date or to none of them.
pub fn transition(
    env: &Env,
    property: &PropertyKey,
    dates: &Vec<u64>,
    transition: Transition,
) -> Result<u32, Error> {
    let mut staged: Vec<AvailabilityEntry> = Vec::new(env);

    for (i, date) in dates.iter().enumerate() {
        // a repeated date would pass the check twice against the same stored state
        if dates.first_index_of(date) != Some(i as u32) {
            return Err(match transition {
                Transition::Hold(_) => Error::DateNotAvailable,
                _ => Error::InvalidDateState,
            });
        }
        let entry = read_entry(env, property, date);
        transition.check(entry.clone())?;
        if let Some(e) = entry {
            staged.push_back(transition.apply(e));
        }
    }

    for (date, entry) in dates.iter().zip(staged.iter()) {
        write_entry(env, property, date, &entry);
    }

    Ok(dates.len())
}
