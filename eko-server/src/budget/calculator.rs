//! Ticket Price Calculator
//!
//! Pure pricing: item quantities × the site's unit prices.
//! Uses rust_decimal for precise accumulation, stores as f64.

use std::collections::HashMap;

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Total cost of a ticket: Σ unit price × quantity over the submitted
/// items. Keys missing from the price table are zero-priced, never
/// rejected. Infallible; an empty item map costs 0.
pub fn ticket_total(pricing: &HashMap<String, f64>, items: &HashMap<String, u32>) -> f64 {
    let total = items
        .iter()
        .map(|(key, qty)| {
            let unit = pricing.get(key).copied().unwrap_or(0.0);
            to_decimal(unit) * Decimal::from(*qty)
        })
        .sum::<Decimal>();
    to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn items(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_empty_items_cost_zero() {
        let p = pricing(&[("jacket", 10.0)]);
        assert_eq!(ticket_total(&p, &HashMap::new()), 0.0);
    }

    #[test]
    fn test_simple_sum() {
        let p = pricing(&[("jacket", 10.0), ("shirt", 2.5)]);
        let i = items(&[("jacket", 4), ("shirt", 2)]);
        assert_eq!(ticket_total(&p, &i), 45.0);
    }

    #[test]
    fn test_unknown_keys_are_zero_priced() {
        let p = pricing(&[("jacket", 10.0)]);
        let i = items(&[("jacket", 1), ("socks", 99)]);
        assert_eq!(ticket_total(&p, &i), 10.0);
    }

    #[test]
    fn test_zero_quantities_ignored() {
        let p = pricing(&[("jacket", 10.0)]);
        let i = items(&[("jacket", 0)]);
        assert_eq!(ticket_total(&p, &i), 0.0);
    }

    #[test]
    fn test_precision_small_unit_prices() {
        // 3 × 0.10 must be exactly 0.30, not 0.30000000000000004
        let p = pricing(&[("tie", 0.10)]);
        let i = items(&[("tie", 3)]);
        assert_eq!(ticket_total(&p, &i), 0.30);
    }

    #[test]
    fn test_rounding_half_up() {
        // 3 × 1.115 = 3.345 → 3.35 (half-up at 2dp)
        let p = pricing(&[("misc", 1.115)]);
        let i = items(&[("misc", 3)]);
        assert_eq!(ticket_total(&p, &i), 3.35);
    }
}
