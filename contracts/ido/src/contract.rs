use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Vec,
};

use crate::storage;
use crate::types::{Error, SaleConfig, SaleState, UserRecord, VestingTier, PRICE_BASIS};
use crate::vesting;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Timed token sale with percentage-tiered vesting unlock"
);

#[contract]
pub struct IdoContract;

#[contractimpl]
impl IdoContract {
    /// Set the sale parameters and the vesting schedule. One-time; the
    /// sale stays dormant until the admin calls `initialize`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        env: Env,
        admin: Address,
        sale_token: Address,
        payment_token: Address,
        start_time: u64,
        end_time: u64,
        price: i128,
        min_amount: i128,
        max_amount: i128,
        schedule: Vec<VestingTier>,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyCreated);
        }
        admin.require_auth();

        if start_time >= end_time {
            return Err(Error::InvalidWindow);
        }
        if price <= 0 || min_amount <= 0 || min_amount > max_amount {
            return Err(Error::BadAmount);
        }
        vesting::validate_schedule(&schedule, end_time)?;

        let config = SaleConfig {
            admin,
            sale_token,
            payment_token,
            start_time,
            end_time,
            price,
            min_amount,
            max_amount,
        };
        storage::set_config(&env, &config);
        storage::set_schedule(&env, &schedule);
        storage::set_state(
            &env,
            &SaleState {
                initialized: false,
                goal: 0,
                total_sale_supply: 0,
                total_payment_accumulated: 0,
                total_sale_sold: 0,
                swept: false,
            },
        );

        env.events()
            .publish((symbol_short!("created"),), (start_time, end_time, price));

        Ok(())
    }

    /// Fund the sale. Pulls enough sale tokens from the admin to cover
    /// `goal` at the configured price and opens the ledger for
    /// contributions within the sale window.
    pub fn initialize(env: Env, caller: Address, goal: i128) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        if caller != config.admin {
            return Err(Error::NotAdmin);
        }

        let mut state = storage::get_state(&env).ok_or(Error::NotCreated)?;
        if state.initialized {
            return Err(Error::AlreadyInitialized);
        }
        if goal <= 0 {
            return Err(Error::BadAmount);
        }

        // Enough sale units to cover the whole goal at the fixed price.
        let supply = goal * PRICE_BASIS / config.price;
        let sale = token::Client::new(&env, &config.sale_token);
        sale.transfer(&config.admin, &env.current_contract_address(), &supply);

        state.initialized = true;
        state.goal = goal;
        state.total_sale_supply = supply;
        state.total_payment_accumulated = 0;
        state.total_sale_sold = 0;
        storage::set_state(&env, &state);

        env.events()
            .publish((symbol_short!("init"),), (goal, supply));

        Ok(())
    }

    /// Buy `sale_units` at the fixed price. All-or-nothing: a purchase
    /// that would push the accumulated payment past the goal is rejected
    /// whole rather than partially filled.
    pub fn contribute(env: Env, buyer: Address, sale_units: i128) -> Result<(), Error> {
        buyer.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotCreated)?;
        if !state.initialized {
            return Err(Error::NotInitialized);
        }

        let now = env.ledger().timestamp();
        if now < config.start_time {
            return Err(Error::NotYetOpen);
        }
        if now >= config.end_time {
            return Err(Error::Closed);
        }

        let mut record = storage::get_user(&env, &buyer).unwrap_or(UserRecord {
            bought: 0,
            withdrawn: 0,
        });
        if sale_units < config.min_amount || record.bought + sale_units > config.max_amount {
            return Err(Error::BadAmount);
        }

        let cost = sale_units * config.price / PRICE_BASIS;
        if state.total_payment_accumulated + cost > state.goal {
            return Err(Error::AmountTooHigh);
        }

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&buyer, &env.current_contract_address(), &cost);

        state.total_payment_accumulated += cost;
        state.total_sale_sold += sale_units;
        storage::set_state(&env, &state);

        record.bought += sale_units;
        storage::set_user(&env, &buyer, &record);

        env.events()
            .publish((symbol_short!("buy"), buyer), (sale_units, cost));

        Ok(())
    }

    /// Release every sale unit the vesting schedule has unlocked for the
    /// caller and not yet paid out. Callable once per unlocked slice; a
    /// repeat call before the next tier has nothing to settle.
    pub fn withdraw_vested(env: Env, buyer: Address) -> Result<i128, Error> {
        buyer.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        let schedule = storage::get_schedule(&env).ok_or(Error::NotCreated)?;

        let now = env.ledger().timestamp();
        let first_unlock = schedule.first().map(|t| t.unlock_time).unwrap_or(u64::MAX);
        if now < first_unlock {
            return Err(Error::TooEarly);
        }

        let mut record = storage::get_user(&env, &buyer).ok_or(Error::NothingToClaim)?;
        let owed = vesting::unlocked_amount(record.bought, &schedule, now) - record.withdrawn;
        if owed <= 0 {
            return Err(Error::NothingToClaim);
        }

        record.withdrawn += owed;
        storage::set_user(&env, &buyer, &record);

        let sale = token::Client::new(&env, &config.sale_token);
        sale.transfer(&env.current_contract_address(), &buyer, &owed);

        env.events().publish((symbol_short!("claim"), buyer), owed);

        Ok(owed)
    }

    /// Move the accumulated payment balance to the admin once the sale
    /// window has closed. The first sweep also returns the never-sold
    /// sale units; repeating the call moves nothing further.
    pub fn sweep_payment(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotCreated)?;
        if caller != config.admin {
            return Err(Error::NotAdmin);
        }
        let mut state = storage::get_state(&env).ok_or(Error::NotCreated)?;
        if !state.initialized {
            return Err(Error::NotInitialized);
        }

        let now = env.ledger().timestamp();
        if now < config.end_time {
            return Err(Error::TooEarly);
        }

        let contract = env.current_contract_address();
        let payment = token::Client::new(&env, &config.payment_token);
        let collected = payment.balance(&contract);
        if collected > 0 {
            payment.transfer(&contract, &config.admin, &collected);
        }

        let mut unsold: i128 = 0;
        if !state.swept {
            unsold = state.total_sale_supply - state.total_sale_sold;
            if unsold > 0 {
                let sale = token::Client::new(&env, &config.sale_token);
                sale.transfer(&contract, &config.admin, &unsold);
            }
            state.swept = true;
            storage::set_state(&env, &state);
        }

        env.events()
            .publish((symbol_short!("sweep"),), (collected, unsold));

        Ok(())
    }

    // View functions

    pub fn config(env: Env) -> Option<SaleConfig> {
        storage::get_config(&env)
    }

    pub fn state(env: Env) -> Option<SaleState> {
        storage::get_state(&env)
    }

    pub fn schedule(env: Env) -> Option<Vec<VestingTier>> {
        storage::get_schedule(&env)
    }

    pub fn vesting_tier(env: Env, index: u32) -> Option<VestingTier> {
        storage::get_schedule(&env).and_then(|s| s.get(index))
    }

    pub fn user_record(env: Env, user: Address) -> Option<UserRecord> {
        storage::get_user(&env, &user)
    }

    /// Sale units the user could withdraw right now. Zero for addresses
    /// that never contributed.
    pub fn claimable_of(env: Env, user: Address) -> i128 {
        let schedule = match storage::get_schedule(&env) {
            Some(schedule) => schedule,
            None => return 0,
        };
        let record = match storage::get_user(&env, &user) {
            Some(record) => record,
            None => return 0,
        };
        let now = env.ledger().timestamp();
        vesting::unlocked_amount(record.bought, &schedule, now) - record.withdrawn
    }
}
