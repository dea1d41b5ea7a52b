#![no_std]

mod accrual;
mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{AccrualState, DECIMALS, DEFAULT_BLOCK_REWARD, UNIT};

use accrual::accrued_amount;
use events::AccruedEvent;
use storage::{DataKey, TokenMetadata};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

/// Non-transferable token earned passively by holding the primary token
#[contract]
pub struct GovernanceToken;

#[contractimpl]
impl GovernanceToken {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the governance token
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAmount`: block_reward must be positive
    pub fn initialize(
        env: Env,
        admin: Address,
        primary_token: Address,
        name: String,
        symbol: String,
        block_reward: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if block_reward <= 0 {
            return Err(Error::InvalidAmount);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .set(&DataKey::PrimaryToken, &primary_token);
        env.storage()
            .instance()
            .set(&DataKey::BlockReward, &block_reward);
        env.storage()
            .instance()
            .set(&DataKey::Metadata, &TokenMetadata { name, symbol });
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);

        Ok(())
    }

    // ============================================
    // ACCRUAL HOOK
    // ============================================

    /// Checkpoint `account` with its primary balance before a balance change
    ///
    /// An account seen for the first time only starts its clock.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `UnauthorizedAccrualCaller`: `caller` is not the primary token
    /// - `InvalidAmount`: Negative primary balance
    /// - `ArithmeticOverflow`: Accrued balance does not fit in i128
    pub fn accrue(
        env: Env,
        caller: Address,
        account: Address,
        primary_balance: i128,
    ) -> Result<(), Error> {
        let primary_token = Self::primary_token(env.clone())?;
        if caller != primary_token {
            return Err(Error::UnauthorizedAccrualCaller);
        }

        caller.require_auth();

        if primary_balance < 0 {
            return Err(Error::InvalidAmount);
        }

        let sequence = env.ledger().sequence();
        let key = DataKey::Account(account.clone());

        let Some(mut state) = env.storage().persistent().get::<_, AccrualState>(&key) else {
            env.storage().persistent().set(
                &key,
                &AccrualState {
                    balance: 0,
                    last_accrual_ledger: sequence,
                },
            );
            return Ok(());
        };

        let ledgers = sequence.saturating_sub(state.last_accrual_ledger);
        let block_reward = Self::block_reward(env.clone())?;
        let accrued = accrued_amount(&env, block_reward, primary_balance, ledgers)
            .ok_or(Error::ArithmeticOverflow)?;

        state.balance = state
            .balance
            .checked_add(accrued)
            .ok_or(Error::ArithmeticOverflow)?;
        state.last_accrual_ledger = sequence;

        let total_supply = Self::total_supply(env.clone())
            .checked_add(accrued)
            .ok_or(Error::ArithmeticOverflow)?;

        env.storage().persistent().set(&key, &state);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &total_supply);

        if accrued > 0 {
            env.events().publish(
                (Symbol::new(&env, "accrue"), account.clone()),
                AccruedEvent {
                    account,
                    amount: accrued,
                    balance: state.balance,
                    ledgers,
                },
            );
        }

        Ok(())
    }

    // ============================================
    // TOKEN INTERFACE (READ-ONLY)
    // ============================================

    /// Checkpointed governance balance
    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get::<_, AccrualState>(&DataKey::Account(id))
            .map(|state| state.balance)
            .unwrap_or(0)
    }

    /// Ledger of the last checkpoint, 0 for unknown accounts
    pub fn last_accrual_ledger(env: Env, id: Address) -> u32 {
        env.storage()
            .persistent()
            .get::<_, AccrualState>(&DataKey::Account(id))
            .map(|state| state.last_accrual_ledger)
            .unwrap_or(0)
    }

    pub fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> Result<(), Error> {
        Err(Error::NotTransferable)
    }

    pub fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), Error> {
        Err(Error::NotTransferable)
    }

    pub fn approve(
        _env: Env,
        _from: Address,
        _spender: Address,
        _amount: i128,
        _expiration_ledger: u32,
    ) -> Result<(), Error> {
        Err(Error::NotTransferable)
    }

    pub fn allowance(_env: Env, _from: Address, _spender: Address) -> i128 {
        0
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn block_reward(env: Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::BlockReward)
            .ok_or(Error::NotInitialized)
    }

    pub fn primary_token(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PrimaryToken)
            .ok_or(Error::NotInitialized)
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(Error::NotInitialized)
    }
}
