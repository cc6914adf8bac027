use soroban_sdk::{Address, Env};

use crate::types::{DataKey, StakeConfig, StakeRecord, StakeState, StakeTerms};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<StakeConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &StakeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_terms(env: &Env) -> Option<StakeTerms> {
    env.storage().instance().get(&DataKey::Terms)
}

pub fn set_terms(env: &Env, terms: &StakeTerms) {
    env.storage().instance().set(&DataKey::Terms, terms);
}

pub fn get_state(env: &Env) -> Option<StakeState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn set_state(env: &Env, state: &StakeState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_user(env: &Env, user: &Address) -> Option<StakeRecord> {
    env.storage().persistent().get(&DataKey::User(user.clone()))
}

pub fn set_user(env: &Env, user: &Address, record: &StakeRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.clone()), record);
}
