//! Order-summary formulas.
//!
//! The cart page and the checkout page intentionally compute different
//! totals: the cart applies the free-shipping threshold and no tax, while
//! checkout treats shipping as always free and applies a flat 10% tax. The
//! two formulas are exposed under separate names so integrators choose per
//! call site; this crate does not dictate a single total.

use rust_decimal::Decimal;

use sundrift_core::Price;

use crate::cart::{CartLedger, free_shipping_threshold, shipping_cost};

/// Flat tax rate applied by the checkout summary (10%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// The cart-page summary: threshold shipping, no tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Exact sum of line totals.
    pub subtotal: Decimal,
    /// Zero strictly above the free-shipping threshold, flat fee otherwise.
    pub shipping: Decimal,
    /// `subtotal + shipping`.
    pub total: Decimal,
    /// How much more the customer must add to reach free shipping, shown
    /// only while `subtotal` is strictly below the threshold.
    pub remaining_for_free_shipping: Option<Decimal>,
}

impl CartSummary {
    /// Compute the cart-page summary for the current ledger state.
    #[must_use]
    pub fn compute(cart: &CartLedger) -> Self {
        let subtotal = cart.subtotal();
        let shipping = shipping_cost(subtotal);
        let threshold = free_shipping_threshold();
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            remaining_for_free_shipping: (subtotal < threshold).then_some(threshold - subtotal),
        }
    }

    /// Total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        Price::usd(self.total).display()
    }
}

/// The checkout-page summary: shipping always free, 10% tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Exact sum of line totals.
    pub subtotal: Decimal,
    /// `subtotal * 10%`.
    pub tax: Decimal,
    /// `subtotal + tax`; shipping is never charged at checkout.
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Compute the checkout-page summary for the current ledger state.
    #[must_use]
    pub fn compute(cart: &CartLedger) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal * tax_rate();
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        Price::usd(self.total).display()
    }
}
