//! Price bounds and treasury fee arithmetic.
//!
//! Offer prices are denominated in the payment token's smallest unit. The
//! bounds and the fee rate are deployment constants; the settlement split is
//! always `price = net_to_seller + tax(price)`.

/// Lowest listable price (10^13 stroops of the payment token).
pub const MIN_PRICE: i128 = 10_000_000_000_000;

/// Highest listable price (10^26).
pub const MAX_PRICE: i128 = 100_000_000_000_000_000_000_000_000;

/// Treasury cut in parts per million (5%).
pub const TAX_PERCENT: i128 = 50_000;

/// Parts-per-million denominator for the fee rate.
pub const FEE_DENOMINATOR: i128 = 1_000_000;

/// Whether a price is listable. Both bounds are inclusive.
pub fn is_valid_price(price: i128) -> bool {
    price >= MIN_PRICE && price <= MAX_PRICE
}

/// Treasury cut of a settlement amount, rounded down.
///
/// `amount * TAX_PERCENT` stays far below `i128::MAX` for any amount up to
/// `MAX_PRICE`, so the multiplication cannot overflow.
pub fn tax(amount: i128) -> i128 {
    amount * TAX_PERCENT / FEE_DENOMINATOR
}
