use crate::storage::{BASIS_POINTS, PRICE_BANDS};

/// Share of the presale supply already sold, in basis points (rounded down)
pub fn sold_share_bps(total_sold: i128, total_sale_supply: i128) -> Option<i128> {
    total_sold
        .checked_mul(BASIS_POINTS)?
        .checked_div(total_sale_supply)
}

/// Price multiplier of the band in effect for the given sold share
pub fn band_multiplier(sold_bps: i128) -> i128 {
    let mut multiplier = PRICE_BANDS[0].1;
    for (start_bps, band) in PRICE_BANDS.iter() {
        if sold_bps >= *start_bps {
            multiplier = *band;
        }
    }
    multiplier
}

/// Calculate the cost of a presale purchase
///
/// Formula: cost = amount × unit_price × band_multiplier(sold share before purchase)
///
/// Example:
/// - 500 tokens at 0.001 USDC, nothing sold yet: 500 × 1_000 × 1 = 500_000 (0.5 USDC)
/// - 500 tokens after 20% sold: 500 × 1_000 × 3 = 1_500_000 (1.5 USDC)
pub fn calculate_presale_cost(
    amount: i128,
    total_sold: i128,
    total_sale_supply: i128,
    unit_price: i128,
) -> Option<i128> {
    let multiplier = band_multiplier(sold_share_bps(total_sold, total_sale_supply)?);
    amount.checked_mul(unit_price)?.checked_mul(multiplier)
}
