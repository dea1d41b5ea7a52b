#![no_std]

mod error;
mod events;
mod pricing;
mod storage;
mod vesting;

pub use error::Error;
pub use storage::{
    PaymentAsset, PresaleConfig, PresaleState, VestingPool, VestingPoolKind, DECIMALS,
    LIQUIDITY_SUPPLY, MAX_SUPPLY, PRESALE_SUPPLY, STAKING_SUPPLY, UNIT, VESTING_INITIAL_UNLOCK,
    VESTING_POOL_SUPPLY,
};

use events::*;
use pricing::calculate_presale_cost;
use storage::{
    read_allowance, read_balance, read_total_supply, write_allowance, write_balance,
    write_total_supply, AllowanceValue, DataKey, TokenMetadata, SECONDS_PER_DAY,
    VESTING_DURATION_DAYS,
};
use vesting::{releasable_amount, unlocked_amount};

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, String, Symbol,
};

#[contract]
pub struct ProtocolToken;

#[contractimpl]
impl ProtocolToken {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the token and mint the initial distribution
    ///
    /// Mints the liquidity allocation to `admin` and the initial unlock of both
    /// vesting pools to `treasury`. The remainder of each pool vests linearly
    /// from now.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAmount`: Presale unit prices must be positive
    pub fn initialize(
        env: Env,
        admin: Address,
        treasury: Address,
        name: String,
        symbol: String,
        presale: PresaleConfig,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if presale.stable_unit_price <= 0 || presale.native_unit_price <= 0 {
            return Err(Error::InvalidAmount);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Treasury, &treasury);
        env.storage()
            .instance()
            .set(&DataKey::Metadata, &TokenMetadata { name, symbol });
        env.storage()
            .instance()
            .set(&DataKey::PresaleConfig, &presale);
        env.storage().instance().set(
            &DataKey::PresaleState,
            &PresaleState {
                total_sale_supply: PRESALE_SUPPLY,
                total_sold: 0,
            },
        );

        let genesis_time = env.ledger().timestamp();
        for kind in [VestingPoolKind::Ecosystem, VestingPoolKind::Marketing] {
            env.storage().instance().set(
                &DataKey::Vesting(kind),
                &VestingPool {
                    total_allocated: VESTING_POOL_SUPPLY - VESTING_INITIAL_UNLOCK,
                    duration_seconds: VESTING_DURATION_DAYS * SECONDS_PER_DAY,
                    genesis_time,
                    claimed: 0,
                },
            );
        }

        Self::mint(&env, &admin, LIQUIDITY_SUPPLY)?;
        Self::mint(&env, &treasury, VESTING_INITIAL_UNLOCK * 2)?;

        log!(&env, "initial distribution minted", read_total_supply(&env));

        Ok(())
    }

    /// Register the staking contract and mint its reward allocation
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `StakingAlreadySet`: Allocation was minted before
    pub fn set_staking_contract(env: Env, staking: Address) -> Result<(), Error> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        if env.storage().instance().has(&DataKey::StakingContract) {
            return Err(Error::StakingAlreadySet);
        }

        env.storage()
            .instance()
            .set(&DataKey::StakingContract, &staking);
        Self::mint(&env, &staking, STAKING_SUPPLY)?;

        env.events().publish(
            (Symbol::new(&env, "staking_set"),),
            ContractRegisteredEvent { contract: staking },
        );

        Ok(())
    }

    /// Register the governance token that accrues on every balance change
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_governance_token(env: Env, governance: Address) -> Result<(), Error> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::GovernanceToken, &governance);

        env.events().publish(
            (Symbol::new(&env, "governance_set"),),
            ContractRegisteredEvent {
                contract: governance,
            },
        );

        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn treasury(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Treasury)
            .ok_or(Error::NotInitialized)
    }

    pub fn staking_contract(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::StakingContract)
    }

    pub fn governance_token(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::GovernanceToken)
    }

    // ============================================
    // TOKEN INTERFACE
    // ============================================

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    /// Set the amount `spender` may move on behalf of `from`
    ///
    /// # Errors
    /// - `InvalidAmount`: Negative amount
    /// - `InvalidExpirationLedger`: Non-zero allowance expiring in the past
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(Error::InvalidExpirationLedger);
        }

        write_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "approve"), from.clone(), spender.clone()),
            ApproveEvent {
                from,
                spender,
                amount,
                expiration_ledger,
            },
        );

        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    /// Move `amount` from `from` to `to`
    ///
    /// Zero-value transfers are allowed and checkpoint governance accrual
    /// for both parties.
    ///
    /// # Errors
    /// - `InvalidAmount`: Negative amount
    /// - `InsufficientBalance`: `from` holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        Self::move_balance(&env, &from, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Move `amount` from `from` to `to` using the allowance of `spender`
    ///
    /// # Errors
    /// - `InvalidAmount`: Negative amount
    /// - `InsufficientAllowance`: Allowance below `amount`
    /// - `InsufficientBalance`: `from` holds less than `amount`
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::move_balance(&env, &from, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Destroy `amount` held by `from`
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientBalance`: `from` holds less than `amount`
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        Self::burn_balance(&env, &from, amount)
    }

    /// Destroy `amount` held by `from` using the allowance of `spender`
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `InsufficientAllowance`: Allowance below `amount`
    /// - `InsufficientBalance`: `from` holds less than `amount`
    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::burn_balance(&env, &from, amount)
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
        read_total_supply(&env)
    }

    // ============================================
    // PRESALE
    // ============================================

    /// Cost of buying `amount` whole tokens with `asset` at the current band
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `ArithmeticOverflow`: Cost does not fit in i128
    pub fn get_presale_price(env: Env, amount: i128, asset: PaymentAsset) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let state = Self::presale_state(env.clone())?;
        let config = Self::presale_config(&env)?;
        let (_, unit_price) = Self::payment_terms(&config, asset);

        calculate_presale_cost(amount, state.total_sold, state.total_sale_supply, unit_price)
            .ok_or(Error::ArithmeticOverflow)
    }

    /// Buy `amount` whole tokens with `asset`, paying the treasury
    ///
    /// Returns the cost charged in the payment asset.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: amount must be positive
    /// - `PresaleLimitReached`: Purchase exceeds the remaining presale supply
    /// - `InsufficientBalance`: User cannot pay the cost
    /// - `ArithmeticOverflow`: Cost or credited amount does not fit in i128
    pub fn presale_mint(
        env: Env,
        user: Address,
        amount: i128,
        asset: PaymentAsset,
    ) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        user.require_auth();

        let mut state = Self::presale_state(env.clone())?;
        let config = Self::presale_config(&env)?;
        let treasury = Self::treasury(env.clone())?;

        let new_total_sold = state
            .total_sold
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if new_total_sold > state.total_sale_supply {
            return Err(Error::PresaleLimitReached);
        }

        let (payment_token, unit_price) = Self::payment_terms(&config, asset);
        let cost =
            calculate_presale_cost(amount, state.total_sold, state.total_sale_supply, unit_price)
                .ok_or(Error::ArithmeticOverflow)?;
        let credited = amount.checked_mul(UNIT).ok_or(Error::ArithmeticOverflow)?;

        let payment = token::Client::new(&env, &payment_token);
        if payment.balance(&user) < cost {
            return Err(Error::InsufficientBalance);
        }

        state.total_sold = new_total_sold;
        env.storage()
            .instance()
            .set(&DataKey::PresaleState, &state);

        Self::mint(&env, &user, credited)?;
        payment.transfer(&user, &treasury, &cost);

        env.events().publish(
            (Symbol::new(&env, "presale_mint"), user.clone()),
            PresaleMintEvent {
                user,
                asset,
                amount,
                cost,
                total_sold: new_total_sold,
            },
        );

        Ok(cost)
    }

    pub fn presale_state(env: Env) -> Result<PresaleState, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PresaleState)
            .ok_or(Error::NotInitialized)
    }

    // ============================================
    // VESTING
    // ============================================

    /// Amount of `pool` unlocked so far (minted or not)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn vesting_unlocked(env: Env, pool: VestingPoolKind) -> Result<i128, Error> {
        let vesting = Self::get_vesting_pool(env.clone(), pool)?;
        unlocked_amount(&vesting, env.ledger().timestamp()).ok_or(Error::ArithmeticOverflow)
    }

    /// Mint everything `pool` unlocked since the last call to the treasury
    ///
    /// Returns the minted amount, 0 when nothing new has unlocked.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `MaxSupplyExceeded`: Mint would exceed the supply cap
    pub fn vesting_mint(env: Env, pool: VestingPoolKind) -> Result<i128, Error> {
        let mut vesting = Self::get_vesting_pool(env.clone(), pool)?;
        let treasury = Self::treasury(env.clone())?;

        let now = env.ledger().timestamp();
        let releasable = releasable_amount(&vesting, now).ok_or(Error::ArithmeticOverflow)?;
        if releasable == 0 {
            return Ok(0);
        }

        vesting.claimed = vesting
            .claimed
            .checked_add(releasable)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage()
            .instance()
            .set(&DataKey::Vesting(pool), &vesting);

        Self::mint(&env, &treasury, releasable)?;

        if vesting.claimed == vesting.total_allocated {
            log!(&env, "vesting pool fully released", pool);
        }

        env.events().publish(
            (Symbol::new(&env, "vesting_mint"), pool),
            VestingMintEvent {
                pool,
                recipient: treasury,
                amount: releasable,
                total_claimed: vesting.claimed,
            },
        );

        Ok(releasable)
    }

    pub fn get_vesting_pool(env: Env, pool: VestingPoolKind) -> Result<VestingPool, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Vesting(pool))
            .ok_or(Error::NotInitialized)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn metadata(env: &Env) -> Result<TokenMetadata, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(Error::NotInitialized)
    }

    fn presale_config(env: &Env) -> Result<PresaleConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PresaleConfig)
            .ok_or(Error::NotInitialized)
    }

    fn payment_terms(config: &PresaleConfig, asset: PaymentAsset) -> (Address, i128) {
        match asset {
            PaymentAsset::Stable => (config.stable_token.clone(), config.stable_unit_price),
            PaymentAsset::Native => (config.native_token.clone(), config.native_unit_price),
        }
    }

    /// Report the pre-change balance of `account` to the governance token
    fn checkpoint_governance(env: &Env, account: &Address, balance: i128) {
        let governance: Option<Address> = env.storage().instance().get(&DataKey::GovernanceToken);
        if let Some(governance) = governance {
            env.invoke_contract::<()>(
                &governance,
                &Symbol::new(env, "accrue"),
                vec![
                    env,
                    env.current_contract_address().into_val(env),
                    account.into_val(env),
                    balance.into_val(env),
                ],
            );
        }
    }

    fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        let total_supply = read_total_supply(env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if total_supply > MAX_SUPPLY {
            return Err(Error::MaxSupplyExceeded);
        }

        let balance = read_balance(env, to);
        let new_balance = balance.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;

        Self::checkpoint_governance(env, to, balance);

        write_balance(env, to, new_balance);
        write_total_supply(env, total_supply);

        env.events().publish(
            (Symbol::new(env, "mint"), to.clone()),
            MintEvent {
                to: to.clone(),
                amount,
            },
        );

        Ok(())
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let from_balance = read_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from == to {
            Self::checkpoint_governance(env, from, from_balance);
            return Ok(());
        }

        let to_balance = read_balance(env, to);
        let new_to_balance = to_balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        Self::checkpoint_governance(env, from, from_balance);
        Self::checkpoint_governance(env, to, to_balance);

        write_balance(env, from, from_balance - amount);
        write_balance(env, to, new_to_balance);

        Ok(())
    }

    fn burn_balance(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let balance = read_balance(env, from);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }

        Self::checkpoint_governance(env, from, balance);

        write_balance(env, from, balance - amount);
        write_total_supply(env, read_total_supply(env) - amount);

        env.events().publish(
            (Symbol::new(env, "burn"), from.clone()),
            BurnEvent {
                from: from.clone(),
                amount,
            },
        );

        Ok(())
    }

    fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let allowance = read_allowance(env, from, spender);
        if allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }

        if amount > 0 {
            write_allowance(
                env,
                from,
                spender,
                &AllowanceValue {
                    amount: allowance.amount - amount,
                    expiration_ledger: allowance.expiration_ledger,
                },
            );
        }

        Ok(())
    }
}
