//! Shared fixture that deploys the whole protocol into one test environment.

use governance_token::{GovernanceToken, GovernanceTokenClient, DEFAULT_BLOCK_REWARD};
use protocol_token::{PresaleConfig, ProtocolToken, ProtocolTokenClient, STAKING_SUPPLY};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{self, StellarAssetClient},
    Address, Env, String,
};
use staking::{Staking, StakingClient, DEFAULT_REWARDS_PER_SECOND};
use token_locker::{TokenLocker, TokenLockerClient};

pub const GENESIS: u64 = 1_700_000_000;
pub const START_LEDGER: u32 = 1_000;

pub const STABLE_UNIT_PRICE: i128 = 1_000;
pub const NATIVE_UNIT_PRICE: i128 = 500_000_000_000;

pub struct Protocol {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub token_id: Address,
    pub governance_id: Address,
    pub staking_id: Address,
    pub locker_id: Address,
    pub stable_id: Address,
    pub native_id: Address,
}

impl Protocol {
    /// Deploy and wire every contract
    ///
    /// Governance is registered before the staking allocation is minted, so the
    /// staking contract's clock starts at `START_LEDGER`.
    pub fn deploy() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(GENESIS);
        env.ledger().set_sequence_number(START_LEDGER);

        let admin = Address::generate(&env);
        let treasury = Address::generate(&env);
        let issuer = Address::generate(&env);

        let stable_id = env.register_stellar_asset_contract_v2(issuer.clone()).address();
        let native_id = env.register_stellar_asset_contract_v2(issuer).address();

        let token_id = env.register(ProtocolToken, ());
        let governance_id = env.register(GovernanceToken, ());
        let staking_id = env.register(Staking, ());
        let locker_id = env.register(TokenLocker, ());

        {
            let token = ProtocolTokenClient::new(&env, &token_id);
            token.initialize(
                &admin,
                &treasury,
                &String::from_str(&env, "Protocol Token"),
                &String::from_str(&env, "PTK"),
                &PresaleConfig {
                    stable_token: stable_id.clone(),
                    stable_unit_price: STABLE_UNIT_PRICE,
                    native_token: native_id.clone(),
                    native_unit_price: NATIVE_UNIT_PRICE,
                },
            );

            GovernanceTokenClient::new(&env, &governance_id).initialize(
                &admin,
                &token_id,
                &String::from_str(&env, "Protocol Governance"),
                &String::from_str(&env, "gPTK"),
                &DEFAULT_BLOCK_REWARD,
            );
            token.set_governance_token(&governance_id);

            StakingClient::new(&env, &staking_id).initialize(
                &admin,
                &token_id,
                &DEFAULT_REWARDS_PER_SECOND,
                &STAKING_SUPPLY,
            );
            token.set_staking_contract(&staking_id);
        }

        Protocol {
            env,
            admin,
            treasury,
            token_id,
            governance_id,
            staking_id,
            locker_id,
            stable_id,
            native_id,
        }
    }

    pub fn token(&self) -> ProtocolTokenClient<'_> {
        ProtocolTokenClient::new(&self.env, &self.token_id)
    }

    pub fn governance(&self) -> GovernanceTokenClient<'_> {
        GovernanceTokenClient::new(&self.env, &self.governance_id)
    }

    pub fn staking(&self) -> StakingClient<'_> {
        StakingClient::new(&self.env, &self.staking_id)
    }

    pub fn locker(&self) -> TokenLockerClient<'_> {
        TokenLockerClient::new(&self.env, &self.locker_id)
    }

    pub fn stable(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.stable_id)
    }

    pub fn native(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.native_id)
    }

    /// New account holding `amount` of the protocol token (sent from the liquidity allocation)
    pub fn holder(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        if amount > 0 {
            self.token().transfer(&self.admin, &user, &amount);
        }
        user
    }

    /// Holder that has also approved the staking contract for `amount`
    pub fn staker(&self, amount: i128) -> Address {
        let user = self.holder(amount);
        self.token().approve(
            &user,
            &self.staking_id,
            &amount,
            &(self.env.ledger().sequence() + 1_000),
        );
        user
    }

    pub fn mint_stable(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.stable_id).mint(to, &amount);
    }

    pub fn mint_native(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.native_id).mint(to, &amount);
    }

    pub fn advance_time(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }

    pub fn advance_ledgers(&self, ledgers: u32) {
        self.env.ledger().with_mut(|li| li.sequence_number += ledgers);
    }

    /// Zero-value self transfer, checkpoints governance accrual for `account`
    pub fn poke(&self, account: &Address) {
        self.token().transfer(account, account, &0);
    }
}
