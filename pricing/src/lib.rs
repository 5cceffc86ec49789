#![no_std]
use common::{
    pricing::{
        interface::PricingContractTrait,
        types::{
            NightlyRate, PricingConfig, PricingDataKey as DataKey, PricingError as Error, ADMIN,
            CONFIG, MAX_FEE_BPS,
        },
    },
    registry::types::PropertyKey,
    storage::{has_config, read_config, read_record, remove_record, write_config, write_record},
};
use soroban_sdk::{contract, contractimpl, vec, Address, BytesN, Env, Symbol};

#[contract]
pub struct PricingContract;

#[contractimpl]
impl PricingContractTrait for PricingContract {
    fn initialize(env: Env, admin: Address, default_rate: i128, fee_bps: u32) -> Result<(), Error> {
        admin.require_auth();
        if has_config(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        if default_rate <= 0 {
            return Err(Error::InvalidRate);
        }
        if fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidFee);
        }

        let config = PricingConfig {
            admin: admin.clone(),
            updaters: vec![&env, admin.clone()],
            default_rate,
            fee_bps,
        };

        write_config(&env, &ADMIN, &admin);
        write_config(&env, &CONFIG, &config);

        env.events().publish(("initialized", admin), (default_rate, fee_bps));

        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin: Address = read_config(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        env.events().publish(("upgraded",), Self::version());
        Ok(())
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = read_config(&env, &ADMIN).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if !has_config(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        write_config(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn set_nightly_rate(
        env: Env,
        updater: Address,
        property: PropertyKey,
        rate: i128,
    ) -> Result<(), Error> {
        updater.require_auth();

        let config = load_config(&env)?;
        if !config.updaters.contains(&updater) {
            return Err(Error::Unauthorized);
        }
        if rate <= 0 {
            return Err(Error::InvalidRate);
        }

        let entry = NightlyRate {
            rate,
            updated_by: updater.clone(),
            timestamp: env.ledger().timestamp(),
        };
        write_record(&env, &DataKey::Rate(property.clone()), &entry);

        env.events().publish(("rate_updated", updater), (property, rate));

        Ok(())
    }

    fn clear_nightly_rate(env: Env, updater: Address, property: PropertyKey) -> Result<(), Error> {
        updater.require_auth();

        let config = load_config(&env)?;
        if !config.updaters.contains(&updater) {
            return Err(Error::Unauthorized);
        }

        remove_record(&env, &DataKey::Rate(property.clone()));
        env.events().publish(("rate_cleared", updater), property);

        Ok(())
    }

    fn set_default_rate(env: Env, admin: Address, rate: i128) -> Result<(), Error> {
        let mut config = require_admin(&env, &admin)?;
        if rate <= 0 {
            return Err(Error::InvalidRate);
        }
        config.default_rate = rate;
        write_config(&env, &CONFIG, &config);
        env.events().publish(("default_rate_updated", admin), rate);
        Ok(())
    }

    fn set_fee_bps(env: Env, admin: Address, fee_bps: u32) -> Result<(), Error> {
        let mut config = require_admin(&env, &admin)?;
        if fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidFee);
        }
        config.fee_bps = fee_bps;
        write_config(&env, &CONFIG, &config);
        env.events().publish(("fee_updated", admin), fee_bps);
        Ok(())
    }

    fn add_updater(env: Env, admin: Address, new_updater: Address) -> Result<(), Error> {
        let mut config = require_admin(&env, &admin)?;

        if !config.updaters.contains(&new_updater) {
            config.updaters.push_back(new_updater.clone());
            write_config(&env, &CONFIG, &config);

            env.events().publish(("updater_added", admin), new_updater);
        }

        Ok(())
    }

    fn remove_updater(env: Env, admin: Address, updater: Address) -> Result<(), Error> {
        let mut config = require_admin(&env, &admin)?;

        if let Some(index) = config.updaters.first_index_of(&updater) {
            config.updaters.remove(index);
            write_config(&env, &CONFIG, &config);

            env.events().publish(("updater_removed", admin), updater);
        }

        Ok(())
    }

    fn get_config(env: Env) -> Result<PricingConfig, Error> {
        load_config(&env)
    }

    fn nightly_rate(env: Env, property: PropertyKey) -> Result<i128, Error> {
        let config = load_config(&env)?;
        let custom: Option<NightlyRate> = read_record(&env, &DataKey::Rate(property));
        Ok(custom.map(|r| r.rate).unwrap_or(config.default_rate))
    }

    fn quote(env: Env, property: PropertyKey, nights: u32) -> Result<i128, Error> {
        let rate = Self::nightly_rate(env, property)?;
        rate.checked_mul(nights as i128).ok_or(Error::Overflow)
    }

    fn fee_bps(env: Env) -> Result<u32, Error> {
        Ok(load_config(&env)?.fee_bps)
    }
}

fn load_config(env: &Env) -> Result<PricingConfig, Error> {
    read_config(env, &CONFIG).ok_or(Error::NotInitialized)
}

fn require_admin(env: &Env, admin: &Address) -> Result<PricingConfig, Error> {
    admin.require_auth();
    let config = load_config(env)?;
    if *admin != config.admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
