use soroban_sdk::{contracterror, contracttype, Address};

/// Basis for the reward rate: 10_000 = 100% of principal per lock term.
pub const REWARD_BASIS: i128 = 10_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyCreated = 1,
    NotCreated = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,
    NotAdmin = 5,
    InvalidConfig = 6,
    BadAmount = 7,
    NotYetOpen = 8,
    CapacityExceeded = 9,
    AlreadyStaked = 10,
    TooEarly = 11,
    AlreadyClaimed = 12,
    NotClaimedYet = 13,
    NothingToWithdraw = 14,
}

#[derive(Clone)]
#[contracttype]
pub struct StakeConfig {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

/// Program terms fixed by `initialize`. The lock term of every position is
/// `epoch_duration * amount_of_epochs` from its deposit, and the reward is
/// the flat `percentage` of principal per epoch over the whole term.
#[derive(Clone)]
#[contracttype]
pub struct StakeTerms {
    pub total_amount: i128,
    pub percentage: u32,
    pub epoch_duration: u64,
    pub amount_of_epochs: u32,
    pub start_time: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct StakeState {
    pub initialized: bool,
    pub tokens_left: i128,
}

/// One position per address. A withdrawn position keeps its record with
/// `amount` zeroed; the address cannot open another one.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakeRecord {
    pub amount: i128,
    pub deposit_time: u64,
    pub claimed: bool,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Terms,
    State,
    User(Address),
}
