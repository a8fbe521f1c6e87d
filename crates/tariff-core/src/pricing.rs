//! # Pricing Module
//!
//! Derivation of a tariff's final price.
//!
//! ## The Rule
//! ```text
//! final_price = price - price * discount / 100
//!             = price * (1 - discount / 100)
//! ```
//!
//! The value is computed once, when a tariff is created, and stored. Nothing
//! rounds it here; rounding to two decimals happens only in [`crate::view`].

/// Absolute tolerance used when checking a stored final price against the rule.
pub const FINAL_PRICE_TOLERANCE: f64 = 1e-6;

/// Computes the final price of `price` after a `discount` percent reduction.
///
/// ## Example
/// ```rust
/// use tariff_core::pricing::compute_final_price;
///
/// assert_eq!(compute_final_price(500.0, 10.0), 450.0);
/// assert_eq!(compute_final_price(1000.0, 20.0), 800.0);
/// ```
#[inline]
pub fn compute_final_price(price: f64, discount: f64) -> f64 {
    price * (1.0 - discount / 100.0)
}

/// Whether `final_price` agrees with the rule for `price` and `discount`.
pub fn is_consistent(price: f64, discount: f64, final_price: f64) -> bool {
    (compute_final_price(price, discount) - final_price).abs() <= FINAL_PRICE_TOLERANCE
}
