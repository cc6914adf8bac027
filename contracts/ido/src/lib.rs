#![no_std]

mod contract;
mod storage;
mod types;
mod vesting;


pub use contract::IdoContract;
pub use types::{Error, SaleConfig, SaleState, UserRecord, VestingTier};
