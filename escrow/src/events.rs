use common::registry::types::PropertyKey;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized(Address, Address, Address),
    Upgraded(u32),
    BookingRequested(u64, PropertyKey, Address, u64, u64),
    FundsLocked(u64, Address, Address, i128),
    BookingApproved(u64, Address),
    BookingRejected(u64, Address),
    BookingCancelled(u64, Address),
    BookingExpired(u64),
    Refunded(u64, Address, i128),
    BookingCompleted(u64, Address),
    FundsReleased(u64, Address, i128, i128),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::BookingRequested(..) => stringify!(BookingRequested),
            EscrowEvent::FundsLocked(..) => stringify!(FundsLocked),
            EscrowEvent::BookingApproved(..) => stringify!(BookingApproved),
            EscrowEvent::BookingRejected(..) => stringify!(BookingRejected),
            EscrowEvent::BookingCancelled(..) => stringify!(BookingCancelled),
            EscrowEvent::BookingExpired(..) => stringify!(BookingExpired),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
            EscrowEvent::BookingCompleted(..) => stringify!(BookingCompleted),
            EscrowEvent::FundsReleased(..) => stringify!(FundsReleased),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::Initialized(registry, pricing, token) => {
                v.push_back(registry.into_val(env));
                v.push_back(pricing.into_val(env));
                v.push_back(token.into_val(env));
            }
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::BookingRequested(booking_id, property, renter, start_date, end_date) => {
                v.push_back(booking_id.into_val(env));
                v.push_back(property.into_val(env));
                v.push_back(renter.into_val(env));
                v.push_back(start_date.into_val(env));
                v.push_back(end_date.into_val(env));
            }
            EscrowEvent::FundsLocked(booking_id, renter, token, amount) => {
                v.push_back(booking_id.into_val(env));
                v.push_back(renter.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::BookingApproved(booking_id, actor)
            | EscrowEvent::BookingRejected(booking_id, actor)
            | EscrowEvent::BookingCancelled(booking_id, actor)
            | EscrowEvent::BookingCompleted(booking_id, actor) => {
                v.push_back(booking_id.into_val(env));
                v.push_back(actor.into_val(env));
            }
            EscrowEvent::BookingExpired(booking_id) => {
                v.push_back(booking_id.into_val(env));
            }
            EscrowEvent::Refunded(booking_id, renter, amount) => {
                v.push_back(booking_id.into_val(env));
                v.push_back(renter.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::FundsReleased(booking_id, owner, payout, fee) => {
                v.push_back(booking_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(payout.into_val(env));
                v.push_back(fee.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
