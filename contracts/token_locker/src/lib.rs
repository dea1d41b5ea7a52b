#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{LockEntry, SECONDS_PER_YEAR};

use events::{LockedEvent, UnlockedEvent};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};

/// Multi-year lock for any token, one entry per depositor and asset
#[contract]
pub struct TokenLocker;

#[contractimpl]
impl TokenLocker {
    /// Lock `amount` of `asset` for `lock_years`
    ///
    /// The first deposit fixes the unlock time. Later deposits add to the
    /// locked amount and ignore `lock_years`. Returns the unlock time.
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `InvalidLockPeriod`: First deposit with a zero-year lock
    /// - `InsufficientBalance`: Depositor cannot cover amount
    /// - `ArithmeticOverflow`: Unlock time or total does not fit
    pub fn deposit_tokens(
        env: Env,
        depositor: Address,
        asset: Address,
        amount: i128,
        lock_years: u32,
    ) -> Result<u64, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        depositor.require_auth();

        let key = DataKey::Lock(depositor.clone(), asset.clone());
        let mut entry = match env.storage().persistent().get::<_, LockEntry>(&key) {
            Some(entry) => entry,
            None => {
                if lock_years == 0 {
                    return Err(Error::InvalidLockPeriod);
                }
                let unlock_time = (lock_years as u64)
                    .checked_mul(SECONDS_PER_YEAR)
                    .and_then(|period| env.ledger().timestamp().checked_add(period))
                    .ok_or(Error::ArithmeticOverflow)?;
                LockEntry {
                    amount: 0,
                    unlock_time,
                }
            }
        };

        let token = token::Client::new(&env, &asset);
        if token.balance(&depositor) < amount {
            return Err(Error::InsufficientBalance);
        }

        entry.amount = entry
            .amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage().persistent().set(&key, &entry);

        token.transfer(&depositor, &env.current_contract_address(), &amount);

        env.events().publish(
            (Symbol::new(&env, "locked"), depositor.clone(), asset.clone()),
            LockedEvent {
                depositor,
                asset,
                amount,
                total_locked: entry.amount,
                unlock_time: entry.unlock_time,
            },
        );

        Ok(entry.unlock_time)
    }

    /// Withdraw the whole locked amount of `asset` once unlocked
    ///
    /// Returns the amount released. A later deposit starts a fresh lock.
    ///
    /// # Errors
    /// - `NoDepositForToken`: Nothing locked for this asset
    /// - `LockPeriodNotEnded`: Unlock time not reached
    pub fn withdraw_tokens(env: Env, depositor: Address, asset: Address) -> Result<i128, Error> {
        depositor.require_auth();

        let key = DataKey::Lock(depositor.clone(), asset.clone());
        let entry: LockEntry = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::NoDepositForToken)?;

        if env.ledger().timestamp() < entry.unlock_time {
            return Err(Error::LockPeriodNotEnded);
        }

        env.storage().persistent().remove(&key);

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &depositor,
            &entry.amount,
        );

        env.events().publish(
            (Symbol::new(&env, "unlocked"), depositor.clone(), asset.clone()),
            UnlockedEvent {
                depositor,
                asset,
                amount: entry.amount,
            },
        );

        Ok(entry.amount)
    }

    pub fn get_balance_of(env: Env, depositor: Address, asset: Address) -> i128 {
        env.storage()
            .persistent()
            .get::<_, LockEntry>(&DataKey::Lock(depositor, asset))
            .map(|entry| entry.amount)
            .unwrap_or(0)
    }

    /// 0 when nothing is locked
    pub fn get_unlock_time(env: Env, asset: Address, depositor: Address) -> u64 {
        env.storage()
            .persistent()
            .get::<_, LockEntry>(&DataKey::Lock(depositor, asset))
            .map(|entry| entry.unlock_time)
            .unwrap_or(0)
    }
}
