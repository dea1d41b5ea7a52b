use crate::storage::VestingPool;

/// Amount of a pool unlocked at `now`
///
/// Formula: unlocked(t) = min(total, total × (t - genesis) / duration), 0 before genesis
pub fn unlocked_amount(pool: &VestingPool, now: u64) -> Option<i128> {
    if now <= pool.genesis_time {
        return Some(0);
    }
    if pool.duration_seconds == 0 {
        return Some(pool.total_allocated);
    }

    let elapsed = (now - pool.genesis_time).min(pool.duration_seconds);
    pool.total_allocated
        .checked_mul(elapsed as i128)?
        .checked_div(pool.duration_seconds as i128)
}

/// Unlocked but not yet minted
pub fn releasable_amount(pool: &VestingPool, now: u64) -> Option<i128> {
    let unlocked = unlocked_amount(pool, now)?;
    Some(unlocked.checked_sub(pool.claimed)?.max(0))
}
