use governance_token::DEFAULT_BLOCK_REWARD;
use integration_tests::Protocol;
use protocol_token::{
    VestingPoolKind, MAX_SUPPLY, UNIT, VESTING_INITIAL_UNLOCK, VESTING_POOL_SUPPLY,
};

const DAY: u64 = 86_400;

#[test]
fn test_vesting_mint_to_treasury() {
    let p = Protocol::deploy();
    let initial = p.token().balance(&p.treasury);
    assert_eq!(initial, VESTING_INITIAL_UNLOCK * 2);

    p.advance_time(360 * DAY);
    let minted = p.token().vesting_mint(&VestingPoolKind::Ecosystem);

    assert_eq!(minted, (VESTING_POOL_SUPPLY - VESTING_INITIAL_UNLOCK) / 2);
    assert_eq!(p.token().balance(&p.treasury), initial + minted);
    assert_eq!(p.token().vesting_mint(&VestingPoolKind::Ecosystem), 0);
}

#[test]
fn test_vesting_mint_checkpoints_treasury_governance() {
    let p = Protocol::deploy();
    let gov = p.governance();

    // First balance event for the treasury starts its clock
    p.advance_time(360 * DAY);
    p.token().vesting_mint(&VestingPoolKind::Ecosystem);
    assert_eq!(gov.balance(&p.treasury), 0);

    let held = p.token().balance(&p.treasury);
    p.advance_ledgers(10);
    p.token().vesting_mint(&VestingPoolKind::Marketing);

    assert_eq!(
        gov.balance(&p.treasury),
        DEFAULT_BLOCK_REWARD * (held / UNIT) * 10
    );
}

#[test]
fn test_supply_reaches_cap_with_every_allocation() {
    let p = Protocol::deploy();

    p.advance_time(720 * DAY);
    p.token().vesting_mint(&VestingPoolKind::Ecosystem);
    p.token().vesting_mint(&VestingPoolKind::Marketing);

    // Liquidity, both vesting pools and staking; presale still open
    assert_eq!(p.token().total_supply(), MAX_SUPPLY * 4 / 5);

    p.advance_time(365 * DAY);
    assert_eq!(p.token().vesting_mint(&VestingPoolKind::Ecosystem), 0);
    assert_eq!(p.token().vesting_mint(&VestingPoolKind::Marketing), 0);
}
