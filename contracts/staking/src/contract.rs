use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env};

use crate::storage;
use crate::types::{
    Error, StakeConfig, StakeRecord, StakeState, StakeTerms, REWARD_BASIS,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fixed-term staking with a flat reward after the lock period"
);

fn flat_reward(amount: i128, terms: &StakeTerms) -> i128 {
    amount * terms.percentage as i128 * terms.amount_of_epochs as i128 / REWARD_BASIS
}

fn lock_end(record: &StakeRecord, terms: &StakeTerms) -> u64 {
    record.deposit_time + terms.epoch_duration * terms.amount_of_epochs as u64
}

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Bind the program to its stake and reward assets. One-time; deposits
    /// stay closed until the admin calls `initialize`.
    pub fn create(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyCreated);
        }
        admin.require_auth();

        if stake_token == reward_token {
            return Err(Error::InvalidConfig);
        }

        storage::set_config(
            &env,
            &StakeConfig {
                admin,
                stake_token,
                reward_token,
            },
        );
        storage::set_state(
            &env,
            &StakeState {
                initialized: false,
                tokens_left: 0,
            },
        );

        env.events().publish((symbol_short!("created"),), ());

        Ok(())
    }

    /// Set the program terms and fund the maximum reward liability: the
    /// reward every unit of capacity would earn over the full lock term is
    /// pulled from the admin up front, so later claims can never run dry.
    pub fn initialize(
        env: Env,
        caller: Address,
        total_amount: i128,
        percentage: u32,
        epoch_duration: u64,
        amount_of_epochs: u32,
        start_time: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        if caller != config.admin {
            return Err(Error::NotAdmin);
        }

        let mut state = storage::get_state(&env).ok_or(Error::NotCreated)?;
        if state.initialized {
            return Err(Error::AlreadyInitialized);
        }
        if total_amount <= 0 || percentage == 0 || epoch_duration == 0 || amount_of_epochs == 0 {
            return Err(Error::BadAmount);
        }

        let terms = StakeTerms {
            total_amount,
            percentage,
            epoch_duration,
            amount_of_epochs,
            start_time,
        };
        let liability = flat_reward(total_amount, &terms);

        let reward = token::Client::new(&env, &config.reward_token);
        reward.transfer(&config.admin, &env.current_contract_address(), &liability);

        storage::set_terms(&env, &terms);
        state.initialized = true;
        state.tokens_left = total_amount;
        storage::set_state(&env, &state);

        env.events()
            .publish((symbol_short!("init"),), (total_amount, liability));

        Ok(())
    }

    /// Lock `amount` stake tokens for the fixed term starting now. One
    /// position per address, for the lifetime of the program.
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<(), Error> {
        depositor.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        let terms = storage::get_terms(&env).ok_or(Error::NotInitialized)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotCreated)?;
        if !state.initialized {
            return Err(Error::NotInitialized);
        }

        let now = env.ledger().timestamp();
        if now < terms.start_time {
            return Err(Error::NotYetOpen);
        }
        if amount <= 0 {
            return Err(Error::BadAmount);
        }
        if storage::get_user(&env, &depositor).is_some() {
            return Err(Error::AlreadyStaked);
        }
        if amount > state.tokens_left {
            return Err(Error::CapacityExceeded);
        }

        let stake = token::Client::new(&env, &config.stake_token);
        stake.transfer(&depositor, &env.current_contract_address(), &amount);

        state.tokens_left -= amount;
        storage::set_state(&env, &state);
        storage::set_user(
            &env,
            &depositor,
            &StakeRecord {
                amount,
                deposit_time: now,
                claimed: false,
            },
        );

        env.events()
            .publish((symbol_short!("deposit"), depositor), amount);

        Ok(())
    }

    /// Pay the flat fixed-term reward once the lock has elapsed. The
    /// reward does not grow past the lock term; claiming late pays the
    /// same amount.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, Error> {
        staker.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        let terms = storage::get_terms(&env).ok_or(Error::NotInitialized)?;

        let mut record = storage::get_user(&env, &staker).ok_or(Error::NothingToWithdraw)?;
        if record.amount == 0 {
            return Err(Error::NothingToWithdraw);
        }
        let now = env.ledger().timestamp();
        if now < lock_end(&record, &terms) {
            return Err(Error::TooEarly);
        }
        if record.claimed {
            return Err(Error::AlreadyClaimed);
        }

        let amount = flat_reward(record.amount, &terms);
        record.claimed = true;
        storage::set_user(&env, &staker, &record);

        let reward = token::Client::new(&env, &config.reward_token);
        reward.transfer(&env.current_contract_address(), &staker, &amount);

        env.events()
            .publish((symbol_short!("reward"), staker), amount);

        Ok(amount)
    }

    /// Return the principal of a position whose reward has been claimed,
    /// closing the position for good.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, Error> {
        staker.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;

        let mut record = storage::get_user(&env, &staker).ok_or(Error::NothingToWithdraw)?;
        if record.amount == 0 {
            return Err(Error::NothingToWithdraw);
        }
        if !record.claimed {
            return Err(Error::NotClaimedYet);
        }

        let principal = record.amount;
        record.amount = 0;
        storage::set_user(&env, &staker, &record);

        let stake = token::Client::new(&env, &config.stake_token);
        stake.transfer(&env.current_contract_address(), &staker, &principal);

        env.events()
            .publish((symbol_short!("withdraw"), staker), principal);

        Ok(principal)
    }

    // View functions

    pub fn config(env: Env) -> Option<StakeConfig> {
        storage::get_config(&env)
    }

    pub fn terms(env: Env) -> Option<StakeTerms> {
        storage::get_terms(&env)
    }

    pub fn state(env: Env) -> Option<StakeState> {
        storage::get_state(&env)
    }

    pub fn tokens_left(env: Env) -> i128 {
        storage::get_state(&env).map(|s| s.tokens_left).unwrap_or(0)
    }

    pub fn user_record(env: Env, user: Address) -> Option<StakeRecord> {
        storage::get_user(&env, &user)
    }

    /// The flat reward the user's position pays at the end of its lock
    /// term. Zero for addresses with no position.
    pub fn reward_of(env: Env, user: Address) -> i128 {
        let terms = match storage::get_terms(&env) {
            Some(terms) => terms,
            None => return 0,
        };
        match storage::get_user(&env, &user) {
            Some(record) => flat_reward(record.amount, &terms),
            None => 0,
        }
    }
}
