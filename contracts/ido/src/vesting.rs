use soroban_sdk::Vec;

use crate::types::{Error, VestingTier, PERCENT_BASIS};

/// Check the schedule invariants: at least one tier, strictly ascending
/// unlock times each beyond the sale's `end_time`, percentages summing to
/// exactly `PERCENT_BASIS`.
pub fn validate_schedule(schedule: &Vec<VestingTier>, end_time: u64) -> Result<(), Error> {
    if schedule.is_empty() {
        return Err(Error::InvalidSchedule);
    }

    let mut total: u32 = 0;
    let mut prev = end_time;
    for tier in schedule.iter() {
        if tier.unlock_time <= prev {
            return Err(Error::InvalidSchedule);
        }
        prev = tier.unlock_time;
        total = total
            .checked_add(tier.unlock_percent)
            .ok_or(Error::InvalidSchedule)?;
    }

    if total != PERCENT_BASIS {
        return Err(Error::InvalidSchedule);
    }
    Ok(())
}

/// Cumulative unlocked percentage as of `now`: the sum of every tier whose
/// unlock time has passed. Zero before the first tier, `PERCENT_BASIS`
/// once the last tier is reached. Monotonic in `now`.
pub fn unlocked_fraction(schedule: &Vec<VestingTier>, now: u64) -> u32 {
    let mut unlocked: u32 = 0;
    for tier in schedule.iter() {
        if tier.unlock_time <= now {
            unlocked += tier.unlock_percent;
        }
    }
    unlocked
}

/// Sale units unlocked for a buyer of `bought` units as of `now`.
///
/// The division truncates toward zero, so the payouts across all tiers
/// never add up to more than `bought`; any remainder stays in custody
/// until a later tier unlocks it.
pub fn unlocked_amount(bought: i128, schedule: &Vec<VestingTier>, now: u64) -> i128 {
    bought * unlocked_fraction(schedule, now) as i128 / PERCENT_BASIS as i128
}
