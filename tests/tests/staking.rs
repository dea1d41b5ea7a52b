use integration_tests::{Protocol, GENESIS};
use protocol_token::{STAKING_SUPPLY, UNIT};
use staking::{
    Error as StakingError, ACTIVATION_THRESHOLD, DEFAULT_REWARDS_PER_SECOND, EARLY_STAKE_WINDOW,
};

const DAY: u64 = 86_400;

#[test]
fn test_rewards_paid_from_staking_allocation() {
    let p = Protocol::deploy();
    let alice = p.staker(ACTIVATION_THRESHOLD);

    p.staking().deposit(&alice, &ACTIVATION_THRESHOLD);
    assert_eq!(p.staking().staking_start_time(), GENESIS);

    p.advance_time(DAY);
    let reward = p.staking().claim_rewards(&alice);

    assert_eq!(reward, DEFAULT_REWARDS_PER_SECOND * DAY as i128 * 9 / 10);
    assert_eq!(p.token().balance(&alice), reward);
    assert_eq!(
        p.token().balance(&p.staking_id),
        STAKING_SUPPLY + ACTIVATION_THRESHOLD - reward
    );
}

#[test]
fn test_small_stakers_wait_for_threshold() {
    let p = Protocol::deploy();
    let alice = p.staker(ACTIVATION_THRESHOLD / 2);
    let bob = p.staker(ACTIVATION_THRESHOLD / 2);

    p.staking().deposit(&alice, &(ACTIVATION_THRESHOLD / 2));
    p.advance_time(7 * DAY);
    assert_eq!(p.staking().get_deposit_info(&alice).1, 0);

    p.staking().deposit(&bob, &(ACTIVATION_THRESHOLD / 2));
    assert_eq!(p.staking().staking_start_time(), GENESIS + 7 * DAY);

    // Alice's penalty window started at her own deposit
    p.advance_time(23 * DAY);
    let (_, alice_pending) = p.staking().get_deposit_info(&alice);
    let (_, bob_pending) = p.staking().get_deposit_info(&bob);
    assert_eq!(alice_pending, DEFAULT_REWARDS_PER_SECOND * (23 * DAY) as i128 / 2);
    assert_eq!(bob_pending, alice_pending * 9 / 10);
}

#[test]
fn test_exit_after_penalty_window() {
    let p = Protocol::deploy();
    let alice = p.staker(ACTIVATION_THRESHOLD);

    p.staking().deposit(&alice, &ACTIVATION_THRESHOLD);
    p.advance_time(EARLY_STAKE_WINDOW);

    let (stake, reward) = p.staking().withdraw_all(&alice);
    assert_eq!(stake, ACTIVATION_THRESHOLD);
    assert_eq!(reward, DEFAULT_REWARDS_PER_SECOND * EARLY_STAKE_WINDOW as i128);
    assert_eq!(p.token().balance(&alice), stake + reward);
    assert_eq!(p.staking().total_staked(), 0);
}

#[test]
fn test_deposit_requires_protocol_token_allowance() {
    let p = Protocol::deploy();
    let alice = p.holder(1_000 * UNIT);

    let result = p.staking().try_deposit(&alice, &(1_000 * UNIT));
    assert_eq!(result, Err(Ok(StakingError::InsufficientAllowance)));

    p.token()
        .approve(&alice, &p.staking_id, &(2_000 * UNIT), &2_000);
    let result = p.staking().try_deposit(&alice, &(2_000 * UNIT));
    assert_eq!(result, Err(Ok(StakingError::InsufficientBalance)));

    assert_eq!(p.token().balance(&alice), 1_000 * UNIT);
    assert!(p.staking().user_stakes(&alice).is_none());
}

#[test]
fn test_deposit_spends_allowance() {
    let p = Protocol::deploy();
    let alice = p.staker(100 * UNIT);

    p.staking().deposit(&alice, &(60 * UNIT));
    assert_eq!(p.token().allowance(&alice, &p.staking_id), 40 * UNIT);

    let result = p.staking().try_deposit(&alice, &(41 * UNIT));
    assert_eq!(result, Err(Ok(StakingError::InsufficientAllowance)));
}
