//! Derived cart totals: subtotal, box fees and delivery fee.
use crate::constants::{BOX_FEE_PER_UNIT, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD, SURCHARGE_CATEGORY};
use crate::line::CartLine;
use serde::{Deserialize, Serialize};

/// Fee schedule applied by [`derive_totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub free_delivery_threshold: u64,
    pub delivery_fee: u64,
    pub box_fee_per_unit: u64,
}

impl PricingPolicy {
    /// The cafe's published fees.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            free_delivery_threshold: FREE_DELIVERY_THRESHOLD,
            delivery_fee: DELIVERY_FEE,
            box_fee_per_unit: BOX_FEE_PER_UNIT,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Aggregates recomputed from the cart lines after every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub line_count: u64,
    pub subtotal: u64,
    pub surcharge_total: u64,
    pub delivery_fee: u64,
    pub is_free_delivery: bool,
    pub grand_total: u64,
    /// How much more must be ordered before delivery becomes free.
    pub remaining_for_free_delivery: u64,
}

/// Whether a line is charged the pizza box fee.
#[must_use]
pub fn is_pizza_line(line: &CartLine) -> bool {
    contains_ignore_case(&line.name, SURCHARGE_CATEGORY)
        || line
            .category_tag
            .as_deref()
            .is_some_and(|category| contains_ignore_case(category, SURCHARGE_CATEGORY))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Reduce the cart lines to their totals.
///
/// An empty cart owes nothing: the delivery fee only applies once something
/// is being delivered.
#[must_use]
pub fn derive_totals(lines: &[CartLine], policy: &PricingPolicy) -> CartTotals {
    let line_count = lines.iter().map(|line| u64::from(line.quantity)).sum();
    let subtotal: u64 = lines.iter().map(CartLine::line_total).sum();
    let surcharge_total = lines
        .iter()
        .filter(|line| is_pizza_line(line))
        .map(|line| policy.box_fee_per_unit * u64::from(line.quantity))
        .sum();

    let is_free_delivery = subtotal >= policy.free_delivery_threshold;
    let delivery_fee = if is_free_delivery || line_count == 0 {
        0
    } else {
        policy.delivery_fee
    };

    CartTotals {
        line_count,
        subtotal,
        surcharge_total,
        delivery_fee,
        is_free_delivery,
        grand_total: subtotal + delivery_fee + surcharge_total,
        remaining_for_free_delivery: policy.free_delivery_threshold.saturating_sub(subtotal),
    }
}
