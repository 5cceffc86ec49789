#![no_std]

mod booking;
mod clients;
mod events;

use booking::{
    index_booking, is_expired, load_booking, next_booking_id, platform_fee, property_bookings,
    renter_bookings, require_owner, require_party, require_status, save_booking, stay_dates,
};
use clients::{
    book_dates, get_registry_client, get_token_client, hold_dates, offered_dates, owner_of, quote,
    release_dates,
};
use common::{
    escrow::{
        interface::EscrowContractTrait,
        types::{
            Booking, BookingStatus, EscrowDataKey as DataKey, EscrowError as Error, ADMIN,
            BOOKING_SCHEMA_VERSION, PAYMENT_TOKEN, PRICING_CONTRACT, REGISTRY_CONTRACT,
            REQUEST_TTL, TREASURY,
        },
    },
    registry::types::PropertyKey,
    storage::{has_config, read_config, write_config},
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        pricing: Address,
        payment_token: Address,
        treasury: Address,
        request_ttl: u64,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_config(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        write_config(&env, &ADMIN, &admin);
        write_config(&env, &REGISTRY_CONTRACT, &registry);
        write_config(&env, &PRICING_CONTRACT, &pricing);
        write_config(&env, &PAYMENT_TOKEN, &payment_token);
        write_config(&env, &TREASURY, &treasury);
        write_config(&env, &REQUEST_TTL, &request_ttl);
        write_config(&env, &DataKey::BookingCount, &0u64);

        EscrowEvent::Initialized(registry, pricing, payment_token).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        require_admin(&env)?;

        if !has_config(&env, &state_key) || state_key == REQUEST_TTL {
            return Err(Error::StateNotAlreadySet);
        }

        write_config(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn set_request_ttl(env: Env, request_ttl: u64) -> Result<(), Error> {
        require_admin(&env)?;
        write_config(&env, &REQUEST_TTL, &request_ttl);
        env.events()
            .publish(("state_updated", REQUEST_TTL), request_ttl);
        Ok(())
    }

    fn request_ttl(env: Env) -> u64 {
        booking::request_ttl(&env)
    }

    // Holds every night of the stay and takes the deposit into custody.
    // Either all of it happens or the invocation fails and nothing is written.
    fn request_booking(
        env: Env,
        renter: Address,
        property: PropertyKey,
        start_date: u64,
        end_date: u64,
        deposit: i128,
    ) -> Result<u64, Error> {
        renter.require_auth();

        let dates = stay_dates(&env, start_date, end_date)?;
        if deposit <= 0 {
            return Err(Error::InvalidAmount);
        }

        let owner = owner_of(&env, &property)?;
        if owner == renter {
            return Err(Error::RenterIsOwner);
        }

        let (required, fee_bps) = quote(&env, &property, dates.len())?;
        if deposit < required {
            return Err(Error::InsufficientDeposit);
        }

        let token = get_token_client(&env)?;
        if token.balance(&renter) < deposit {
            return Err(Error::InsufficientBalance);
        }

        let booking_id = next_booking_id(&env);
        hold_dates(&env, &property, &dates, booking_id)?;

        token.transfer(&renter, &env.current_contract_address(), &deposit);

        let now = env.ledger().timestamp();
        let booking = Booking {
            schema: BOOKING_SCHEMA_VERSION,
            id: booking_id,
            renter: renter.clone(),
            owner,
            property: property.clone(),
            start_date,
            end_date,
            nights: dates.len(),
            amount: deposit,
            fee_bps,
            status: BookingStatus::Requested,
            requested_at: now,
            updated_at: now,
        };
        save_booking(&env, &booking);
        index_booking(&env, &booking);

        EscrowEvent::BookingRequested(booking_id, property, renter.clone(), start_date, end_date)
            .publish(&env);
        EscrowEvent::FundsLocked(booking_id, renter, token.address.clone(), deposit).publish(&env);

        Ok(booking_id)
    }

    fn approve_booking(env: Env, owner: Address, booking_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let mut booking = load_booking(&env, booking_id)?;
        require_owner(&booking, &owner)?;
        require_status(&booking, BookingStatus::Requested)?;
        if is_expired(&env, &booking) {
            return Err(Error::BookingExpired);
        }

        let dates = stay_dates(&env, booking.start_date, booking.end_date)?;
        book_dates(&env, &booking.property, &dates)?;

        booking.status = BookingStatus::Approved;
        booking.updated_at = env.ledger().timestamp();
        save_booking(&env, &booking);

        EscrowEvent::BookingApproved(booking_id, owner).publish(&env);
        Ok(())
    }

    fn reject_booking(env: Env, owner: Address, booking_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let booking = load_booking(&env, booking_id)?;
        require_owner(&booking, &owner)?;
        require_status(&booking, BookingStatus::Requested)?;

        unwind_request(&env, booking, BookingStatus::Rejected)?;
        EscrowEvent::BookingRejected(booking_id, owner).publish(&env);
        Ok(())
    }

    fn cancel_booking(env: Env, caller: Address, booking_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let booking = load_booking(&env, booking_id)?;
        require_party(&booking, &caller)?;
        require_status(&booking, BookingStatus::Requested)?;

        unwind_request(&env, booking, BookingStatus::Cancelled)?;
        EscrowEvent::BookingCancelled(booking_id, caller).publish(&env);
        Ok(())
    }

    fn expire_booking(env: Env, booking_id: u64) -> Result<(), Error> {
        let booking = load_booking(&env, booking_id)?;
        require_status(&booking, BookingStatus::Requested)?;
        if !is_expired(&env, &booking) {
            return Err(Error::BookingNotExpired);
        }

        unwind_request(&env, booking, BookingStatus::Cancelled)?;
        EscrowEvent::BookingExpired(booking_id).publish(&env);
        Ok(())
    }

    // Pays the owner out of custody, less the platform fee fixed at request time.
    fn complete_booking(env: Env, caller: Address, booking_id: u64) -> Result<i128, Error> {
        caller.require_auth();

        let mut booking = load_booking(&env, booking_id)?;
        require_party(&booking, &caller)?;
        require_status(&booking, BookingStatus::Approved)?;

        let fee = platform_fee(booking.amount, booking.fee_bps);
        let payout = booking.amount - fee;

        let token = get_token_client(&env)?;
        let escrow = env.current_contract_address();
        if fee > 0 {
            let treasury: Address = read_config(&env, &TREASURY).ok_or(Error::NotInitialized)?;
            token.transfer(&escrow, &treasury, &fee);
        }
        if payout > 0 {
            token.transfer(&escrow, &booking.owner, &payout);
        }

        booking.status = BookingStatus::Completed;
        booking.updated_at = env.ledger().timestamp();
        save_booking(&env, &booking);

        EscrowEvent::BookingCompleted(booking_id, caller).publish(&env);
        EscrowEvent::FundsReleased(booking_id, booking.owner, payout, fee).publish(&env);

        Ok(payout)
    }

    fn get_booking(env: Env, booking_id: u64) -> Result<Booking, Error> {
        load_booking(&env, booking_id)
    }

    fn booking_count(env: Env) -> u64 {
        read_config(&env, &DataKey::BookingCount).unwrap_or(0)
    }

    fn get_renter_bookings(env: Env, renter: Address) -> Vec<u64> {
        renter_bookings(&env, renter)
    }

    fn get_property_bookings(env: Env, property: PropertyKey) -> Vec<u64> {
        property_bookings(&env, property)
    }

    fn required_deposit(
        env: Env,
        property: PropertyKey,
        start_date: u64,
        end_date: u64,
    ) -> Result<i128, Error> {
        let dates = stay_dates(&env, start_date, end_date)?;
        owner_of(&env, &property)?;
        let (required, _) = quote(&env, &property, dates.len())?;
        Ok(required)
    }

    fn is_available(env: Env, property: PropertyKey, date: u64) -> Result<bool, Error> {
        Ok(get_registry_client(&env)?.is_available(&property, &date))
    }

    fn list_dates(env: Env, property: PropertyKey) -> Result<Vec<u64>, Error> {
        offered_dates(&env, &property)
    }
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin: Address = read_config(env, &ADMIN).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

// Releases the held nights, returns the full deposit and closes the request.
fn unwind_request(env: &Env, mut booking: Booking, status: BookingStatus) -> Result<(), Error> {
    let dates = stay_dates(env, booking.start_date, booking.end_date)?;
    release_dates(env, &booking.property, &dates)?;

    let token = get_token_client(env)?;
    token.transfer(&env.current_contract_address(), &booking.renter, &booking.amount);

    booking.status = status;
    booking.updated_at = env.ledger().timestamp();
    save_booking(env, &booking);

    EscrowEvent::Refunded(booking.id, booking.renter, booking.amount).publish(env);
    Ok(())
}
