use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

/// Roughly one day of ledgers at a 5s close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

// Records are bumped back to the network ceiling once they drift a month below it.
const RECORD_BUMP_MARGIN: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_BUMP_MARGIN: u32 = 7 * DAY_IN_LEDGERS;

pub fn bump_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl.saturating_sub(INSTANCE_BUMP_MARGIN), max_ttl);
}

pub fn bump_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl(key, max_ttl.saturating_sub(RECORD_BUMP_MARGIN), max_ttl);
}

// CONFIGURATION (instance storage)

pub fn read_config<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn write_config<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    bump_instance(env);
}

pub fn has_config<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}

// RECORDS (persistent storage)

pub fn read_record<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

pub fn write_record<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    bump_record(env, key);
}

pub fn remove_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().remove(key)
}
