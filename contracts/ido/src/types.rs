use soroban_sdk::{contracterror, contracttype, Address};

/// Basis for vesting percentages: 100_000 = 100%.
pub const PERCENT_BASIS: u32 = 100_000;

/// Basis for the sale price: a price of 100_000 means one payment unit
/// per sale unit.
pub const PRICE_BASIS: i128 = 100_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyCreated = 1,
    NotCreated = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,
    NotAdmin = 5,
    InvalidWindow = 6,
    InvalidSchedule = 7,
    NotYetOpen = 8,
    Closed = 9,
    BadAmount = 10,
    AmountTooHigh = 11,
    TooEarly = 12,
    NothingToClaim = 13,
}

/// One unlock step of the vesting schedule. `unlock_percent` is expressed
/// over `PERCENT_BASIS`; the tiers of a schedule sum to exactly 100%.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingTier {
    pub unlock_time: u64,
    pub unlock_percent: u32,
}

/// Immutable sale parameters, written once by `create`.
///
/// Contributions are accepted during the half-open window
/// `[start_time, end_time)`. `min_amount` bounds a single purchase,
/// `max_amount` bounds a buyer's cumulative total, both in sale units.
#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub admin: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub price: i128,
    pub min_amount: i128,
    pub max_amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleState {
    pub initialized: bool,
    pub goal: i128,
    pub total_sale_supply: i128,
    pub total_payment_accumulated: i128,
    pub total_sale_sold: i128,
    pub swept: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserRecord {
    pub bought: i128,
    pub withdrawn: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    Schedule,
    User(Address),
}
