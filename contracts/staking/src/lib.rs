#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::StakingContract;
pub use types::{Error, StakeConfig, StakeRecord, StakeState, StakeTerms};
