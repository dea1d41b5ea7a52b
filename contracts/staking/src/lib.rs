#![no_std]

mod error;
mod events;
mod rewards;
mod storage;

pub use error::Error;
pub use storage::{
    GlobalStake, StakeInfo, StakingConfig, ACTIVATION_THRESHOLD, DEFAULT_REWARDS_PER_SECOND,
    EARLY_STAKE_WINDOW,
};

use events::*;
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol};

#[contract]
pub struct Staking;

#[contractimpl]
impl Staking {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the staking pool
    ///
    /// The contract must hold `reward_budget` of `token` on top of all
    /// staked principal to pay out every reward it emits.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAmount`: rewards_per_second must be positive and the budget cover at least one second
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        rewards_per_second: i128,
        reward_budget: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if rewards_per_second <= 0 || reward_budget < rewards_per_second {
            return Err(Error::InvalidAmount);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Config,
            &StakingConfig {
                token,
                rewards_per_second,
                reward_budget,
                activation_threshold: ACTIVATION_THRESHOLD,
            },
        );
        env.storage().instance().set(
            &DataKey::Global,
            &GlobalStake {
                total_staked: 0,
                reward_per_token: 0,
                reward_remainder: 0,
                last_update: env.ledger().timestamp(),
                activated: false,
                staking_start_time: 0,
                emitted_seconds: 0,
            },
        );
        env.storage().instance().set(&DataKey::Paused, &false);

        Ok(())
    }

    /// Pause deposits (emergency)
    ///
    /// Withdrawals and claims stay open.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn pause(env: Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::Paused, &true);
        env.events().publish((Symbol::new(&env, "paused"),), admin);
        Ok(())
    }

    /// Unpause deposits
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn unpause(env: Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::Paused, &false);
        env.events().publish((Symbol::new(&env, "unpaused"),), admin);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    // ============================================
    // STAKING
    // ============================================

    /// Stake `amount` of the staking token
    ///
    /// The user must have approved the staking contract for `amount`.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `StakingIsPaused`: Deposits are paused
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientAllowance`: Allowance to this contract below amount
    /// - `InsufficientBalance`: Token balance below amount
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        user.require_auth();

        let config = Self::config(&env)?;
        let token = token::Client::new(&env, &config.token);
        let this = env.current_contract_address();

        if token.allowance(&user, &this) < amount {
            return Err(Error::InsufficientAllowance);
        }
        if token.balance(&user) < amount {
            return Err(Error::InsufficientBalance);
        }

        let now = env.ledger().timestamp();
        let mut global = Self::advance_global(&env, &config, now)?;

        let mut info = match Self::stake_of(&env, &user) {
            Some(mut info) => {
                rewards::checkpoint(&env, &mut info, &global, now)
                    .ok_or(Error::ArithmeticOverflow)?;
                info
            }
            None => StakeInfo {
                deposited: 0,
                unclaimed_rewards: 0,
                time_of_last_update: now,
                start_staking: now,
                reward_per_token_paid: global.reward_per_token,
            },
        };

        info.deposited = info
            .deposited
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        global.total_staked = global
            .total_staked
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        if !global.activated && global.total_staked >= config.activation_threshold {
            global.activated = true;
            global.staking_start_time = now;

            log!(&env, "staking rewards activated", global.total_staked);
            env.events().publish(
                (Symbol::new(&env, "activated"),),
                StakingActivatedEvent {
                    start_time: now,
                    total_staked: global.total_staked,
                },
            );
        }

        Self::save_stake(&env, &user, &info);
        env.storage().instance().set(&DataKey::Global, &global);

        token.transfer_from(&this, &user, &this, &amount);

        env.events().publish(
            (Symbol::new(&env, "deposit"), user.clone()),
            DepositEvent {
                user,
                amount,
                total_staked: global.total_staked,
            },
        );

        Ok(())
    }

    /// Unstake `amount`; earned rewards stay claimable
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `WithdrawAmountExceedsBalance`: amount above the user's stake
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        user.require_auth();

        let config = Self::config(&env)?;
        let mut info =
            Self::stake_of(&env, &user).ok_or(Error::WithdrawAmountExceedsBalance)?;
        if amount > info.deposited {
            return Err(Error::WithdrawAmountExceedsBalance);
        }

        let now = env.ledger().timestamp();
        let mut global = Self::advance_global(&env, &config, now)?;
        rewards::checkpoint(&env, &mut info, &global, now).ok_or(Error::ArithmeticOverflow)?;

        info.deposited -= amount;
        global.total_staked -= amount;

        Self::save_stake(&env, &user, &info);
        env.storage().instance().set(&DataKey::Global, &global);

        let token = token::Client::new(&env, &config.token);
        token.transfer(&env.current_contract_address(), &user, &amount);

        env.events().publish(
            (Symbol::new(&env, "withdraw"), user.clone()),
            WithdrawEvent {
                user,
                amount,
                total_staked: global.total_staked,
            },
        );

        Ok(())
    }

    /// Unstake everything and claim all rewards in one call
    ///
    /// Returns `(stake, rewards)` paid out.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `RewardPoolExhausted`: Reward reserve cannot cover the payout
    pub fn withdraw_all(env: Env, user: Address) -> Result<(i128, i128), Error> {
        user.require_auth();

        let config = Self::config(&env)?;
        let Some(mut info) = Self::stake_of(&env, &user) else {
            return Ok((0, 0));
        };

        let now = env.ledger().timestamp();
        let mut global = Self::advance_global(&env, &config, now)?;
        rewards::checkpoint(&env, &mut info, &global, now).ok_or(Error::ArithmeticOverflow)?;

        let stake = info.deposited;
        let reward = info.unclaimed_rewards;

        let token = token::Client::new(&env, &config.token);
        let this = env.current_contract_address();
        Self::check_reward_reserve(&token, &this, global.total_staked, reward)?;

        info.deposited = 0;
        info.unclaimed_rewards = 0;
        global.total_staked -= stake;

        Self::save_stake(&env, &user, &info);
        env.storage().instance().set(&DataKey::Global, &global);

        let payout = stake.checked_add(reward).ok_or(Error::ArithmeticOverflow)?;
        if payout > 0 {
            token.transfer(&this, &user, &payout);
        }

        if stake > 0 {
            env.events().publish(
                (Symbol::new(&env, "withdraw"), user.clone()),
                WithdrawEvent {
                    user: user.clone(),
                    amount: stake,
                    total_staked: global.total_staked,
                },
            );
        }
        if reward > 0 {
            env.events().publish(
                (Symbol::new(&env, "claim_rewards"), user.clone()),
                ClaimRewardsEvent {
                    user,
                    amount: reward,
                },
            );
        }

        Ok((stake, reward))
    }

    /// Pay out all earned rewards, leaving the stake in place
    ///
    /// Returns the amount paid, 0 when nothing was earned.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `RewardPoolExhausted`: Reward reserve cannot cover the payout
    pub fn claim_rewards(env: Env, user: Address) -> Result<i128, Error> {
        user.require_auth();

        let config = Self::config(&env)?;
        let Some(mut info) = Self::stake_of(&env, &user) else {
            return Ok(0);
        };

        let now = env.ledger().timestamp();
        let global = Self::advance_global(&env, &config, now)?;
        rewards::checkpoint(&env, &mut info, &global, now).ok_or(Error::ArithmeticOverflow)?;

        let reward = info.unclaimed_rewards;
        let token = token::Client::new(&env, &config.token);
        let this = env.current_contract_address();

        if reward > 0 {
            Self::check_reward_reserve(&token, &this, global.total_staked, reward)?;
            info.unclaimed_rewards = 0;
        }

        Self::save_stake(&env, &user, &info);
        env.storage().instance().set(&DataKey::Global, &global);

        if reward == 0 {
            return Ok(0);
        }

        token.transfer(&this, &user, &reward);

        env.events().publish(
            (Symbol::new(&env, "claim_rewards"), user.clone()),
            ClaimRewardsEvent {
                user,
                amount: reward,
            },
        );

        Ok(reward)
    }

    // ============================================
    // VIEWS
    // ============================================

    /// Current stake and pending rewards as a checkpoint now would compute them
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn get_deposit_info(env: Env, user: Address) -> Result<(i128, i128), Error> {
        let config = Self::config(&env)?;
        let Some(mut info) = Self::stake_of(&env, &user) else {
            return Ok((0, 0));
        };

        let now = env.ledger().timestamp();
        let global = Self::advance_global(&env, &config, now)?;
        rewards::checkpoint(&env, &mut info, &global, now).ok_or(Error::ArithmeticOverflow)?;

        Ok((info.deposited, info.unclaimed_rewards))
    }

    /// Annualised reward rate for `user` in basis points
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn get_apy(env: Env, user: Address) -> Result<i128, Error> {
        let config = Self::config(&env)?;
        let Some(info) = Self::stake_of(&env, &user) else {
            return Ok(0);
        };

        let global = Self::global(env.clone())?;
        rewards::apy_bps(&env, &config, &global, &info, env.ledger().timestamp())
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn user_stakes(env: Env, user: Address) -> Option<StakeInfo> {
        Self::stake_of(&env, &user)
    }

    pub fn total_staked(env: Env) -> Result<i128, Error> {
        Ok(Self::global(env)?.total_staked)
    }

    pub fn staking_start_time(env: Env) -> Result<u64, Error> {
        Ok(Self::global(env)?.staking_start_time)
    }

    pub fn rewards_per_second(env: Env) -> Result<i128, Error> {
        Ok(Self::config(&env)?.rewards_per_second)
    }

    pub fn activation_threshold(env: Env) -> Result<i128, Error> {
        Ok(Self::config(&env)?.activation_threshold)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(Self::config(&env)?.token)
    }

    pub fn global(env: Env) -> Result<GlobalStake, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Global)
            .ok_or(Error::NotInitialized)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        let paused: bool = env
            .storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false);

        if paused {
            return Err(Error::StakingIsPaused);
        }

        Ok(())
    }

    fn config(env: &Env) -> Result<StakingConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    fn stake_of(env: &Env, user: &Address) -> Option<StakeInfo> {
        env.storage()
            .persistent()
            .get(&DataKey::Stake(user.clone()))
    }

    fn save_stake(env: &Env, user: &Address, info: &StakeInfo) {
        env.storage()
            .persistent()
            .set(&DataKey::Stake(user.clone()), info);
    }

    /// Load the global state and bring its accumulator up to `now` (not persisted)
    fn advance_global(env: &Env, config: &StakingConfig, now: u64) -> Result<GlobalStake, Error> {
        let mut global = Self::global(env.clone())?;
        let emitted_before = global.emitted_seconds;

        rewards::update_global(env, &mut global, config, now).ok_or(Error::ArithmeticOverflow)?;

        let budget_seconds = rewards::emission_seconds(config);
        if emitted_before < budget_seconds && global.emitted_seconds == budget_seconds {
            log!(env, "staking reward budget fully emitted", global.reward_per_token);
        }

        Ok(global)
    }

    /// Rewards are paid only from tokens held above the staked principal
    fn check_reward_reserve(
        token: &token::Client,
        this: &Address,
        total_staked: i128,
        reward: i128,
    ) -> Result<(), Error> {
        let reserve = token.balance(this).saturating_sub(total_staked);
        if reserve < reward {
            return Err(Error::RewardPoolExhausted);
        }
        Ok(())
    }
}
