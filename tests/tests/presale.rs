use governance_token::DEFAULT_BLOCK_REWARD;
use integration_tests::{Protocol, NATIVE_UNIT_PRICE, STABLE_UNIT_PRICE, START_LEDGER};
use protocol_token::{Error as TokenError, PaymentAsset, MAX_SUPPLY, PRESALE_SUPPLY, UNIT};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_stable_purchase_pays_treasury() {
    let p = Protocol::deploy();
    let buyer = Address::generate(&p.env);
    p.mint_stable(&buyer, 1_000_000);

    let cost = p.token().presale_mint(&buyer, &500, &PaymentAsset::Stable);

    assert_eq!(cost, 500 * STABLE_UNIT_PRICE);
    assert_eq!(p.stable().balance(&p.treasury), 500_000);
    assert_eq!(p.stable().balance(&buyer), 500_000);
    assert_eq!(p.token().balance(&buyer), 500 * UNIT);
    assert_eq!(p.token().presale_state().total_sold, 500);
}

#[test]
fn test_native_purchase() {
    let p = Protocol::deploy();
    let buyer = Address::generate(&p.env);
    p.mint_native(&buyer, 15 * UNIT);

    assert_eq!(
        p.token().get_presale_price(&30_000_000, &PaymentAsset::Native),
        15 * UNIT
    );

    let cost = p
        .token()
        .presale_mint(&buyer, &30_000_000, &PaymentAsset::Native);
    assert_eq!(cost, 30_000_000 * NATIVE_UNIT_PRICE);
    assert_eq!(p.native().balance(&p.treasury), 15 * UNIT);
    assert_eq!(p.native().balance(&buyer), 0);
    assert_eq!(p.token().balance(&buyer), 30_000_000 * UNIT);
}

#[test]
fn test_presale_buyer_starts_accruing_governance() {
    let p = Protocol::deploy();
    let buyer = Address::generate(&p.env);
    p.mint_stable(&buyer, 1_000_000);

    p.token().presale_mint(&buyer, &1_000, &PaymentAsset::Stable);
    assert_eq!(p.governance().last_accrual_ledger(&buyer), START_LEDGER);

    p.advance_ledgers(50);
    p.poke(&buyer);
    assert_eq!(
        p.governance().balance(&buyer),
        DEFAULT_BLOCK_REWARD * 1_000 * 50
    );
}

#[test]
fn test_price_triples_after_twenty_percent_sold() {
    let p = Protocol::deploy();
    let whale = Address::generate(&p.env);
    let first_band = PRESALE_SUPPLY / 5;
    p.mint_stable(&whale, first_band * STABLE_UNIT_PRICE);

    p.token()
        .presale_mint(&whale, &first_band, &PaymentAsset::Stable);

    assert_eq!(
        p.token().get_presale_price(&1, &PaymentAsset::Stable),
        3 * STABLE_UNIT_PRICE
    );
    assert_eq!(
        p.token().get_presale_price(&1, &PaymentAsset::Native),
        3 * NATIVE_UNIT_PRICE
    );
}

#[test]
fn test_sold_out_presale() {
    let p = Protocol::deploy();
    let whale = Address::generate(&p.env);
    let late = Address::generate(&p.env);
    p.mint_stable(&whale, PRESALE_SUPPLY * STABLE_UNIT_PRICE);
    p.mint_stable(&late, 1_000_000);

    // The whole batch is priced at the band it started in
    let cost = p
        .token()
        .presale_mint(&whale, &PRESALE_SUPPLY, &PaymentAsset::Stable);
    assert_eq!(cost, PRESALE_SUPPLY * STABLE_UNIT_PRICE);

    let result = p.token().try_presale_mint(&late, &1, &PaymentAsset::Stable);
    assert_eq!(result, Err(Ok(TokenError::PresaleLimitReached)));
    assert_eq!(p.stable().balance(&late), 1_000_000);

    // Liquidity, initial unlocks, staking and presale
    assert_eq!(p.token().total_supply(), MAX_SUPPLY * 68 / 100);
}

#[test]
fn test_unpaid_purchase_changes_nothing() {
    let p = Protocol::deploy();
    let buyer = Address::generate(&p.env);

    let result = p.token().try_presale_mint(&buyer, &10, &PaymentAsset::Native);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(p.token().balance(&buyer), 0);
    assert_eq!(p.token().presale_state().total_sold, 0);
    assert_eq!(p.governance().last_accrual_ledger(&buyer), 0);
}
