use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, SaleConfig, SaleState, UserRecord, VestingTier};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Option<SaleState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_schedule(env: &Env) -> Option<Vec<VestingTier>> {
    env.storage().instance().get(&DataKey::Schedule)
}

pub fn set_schedule(env: &Env, schedule: &Vec<VestingTier>) {
    env.storage().instance().set(&DataKey::Schedule, schedule);
}

pub fn get_user(env: &Env, user: &Address) -> Option<UserRecord> {
    env.storage().persistent().get(&DataKey::User(user.clone()))
}

pub fn set_user(env: &Env, user: &Address, record: &UserRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.clone()), record);
}
