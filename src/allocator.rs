//! Budget allocator
//!
//! Pure arithmetic over a snapshot of category limits. Keeps the set of
//! per-category limits consistent with the global budget/savings split while
//! guaranteeing the Bills category never falls below 30% of the total budget
//! pool. Invoked at exactly two points: once when budgets are loaded from
//! storage, and whenever the user changes the split percentage.
//!
//! Each limit is rounded to the nearest whole unit independently, so the
//! redistributed total can drift from the target by a few units. That drift
//! is deliberate; there is no largest-remainder correction.

use crate::models::{is_bills, BudgetCategory};

/// Minimum share of the total budget pool reserved for Bills
pub const BILLS_FLOOR_RATIO: f64 = 0.30;

/// Apply the Bills floor to freshly loaded limits.
///
/// Computes the total of all limits, raises Bills to at least 30% of that
/// total, and redistributes what remains across the other categories in
/// proportion to their prior share of the non-Bills total. Category order is
/// preserved. When no Bills line exists the floor amount is simply withheld;
/// no Bills line is invented.
pub fn initialize_with_floor(limits: &[BudgetCategory]) -> Vec<BudgetCategory> {
    let total: f64 = limits.iter().map(|b| b.limit).sum();
    let bills_limit = limits
        .iter()
        .find(|b| is_bills(&b.category))
        .map(|b| b.limit);

    let min_bills = total * BILLS_FLOOR_RATIO;
    let new_bills = match bills_limit {
        Some(limit) => limit.max(min_bills),
        None => min_bills,
    };

    let remaining = (total - new_bills).max(0.0);
    let other_total: f64 = limits
        .iter()
        .filter(|b| !is_bills(&b.category))
        .map(|b| b.limit)
        .sum();

    limits
        .iter()
        .map(|b| {
            if is_bills(&b.category) {
                BudgetCategory::new(b.category.clone(), new_bills.round())
            } else {
                let ratio = if other_total > 0.0 {
                    b.limit / other_total
                } else {
                    0.0
                };
                BudgetCategory::new(b.category.clone(), (remaining * ratio).round())
            }
        })
        .collect()
}

/// Rescale all limits to a new budget percentage.
///
/// The scale factor is `new_budget_percent / old_budget_percent`; an old
/// percentage of zero is treated as 100 so the factor stays finite. The
/// Bills floor is then enforced against the scaled total, comparing against
/// the scaled Bills limit, and the remainder is split over the other
/// categories by their prior share. Range and step constraints on the target
/// percentage belong to the caller.
pub fn rescale_to_percent(
    limits: &[BudgetCategory],
    old_budget_percent: u8,
    new_budget_percent: u8,
) -> Vec<BudgetCategory> {
    let old_percent = if old_budget_percent == 0 {
        100
    } else {
        old_budget_percent
    };
    let scale = f64::from(new_budget_percent) / f64::from(old_percent);

    let total_old: f64 = limits.iter().map(|b| b.limit).sum();
    let new_total = total_old * scale;

    let bills_limit = limits
        .iter()
        .find(|b| is_bills(&b.category))
        .map(|b| b.limit);

    let min_bills = new_total * BILLS_FLOOR_RATIO;
    let new_bills = match bills_limit {
        Some(limit) => (limit * scale).max(min_bills),
        None => min_bills,
    };

    let remaining = (new_total - new_bills).max(0.0);
    // Prior-share ratios are scale-invariant, so the unscaled totals serve
    let others_old_total: f64 = limits
        .iter()
        .filter(|b| !is_bills(&b.category))
        .map(|b| b.limit)
        .sum();

    limits
        .iter()
        .map(|b| {
            if is_bills(&b.category) {
                BudgetCategory::new(b.category.clone(), new_bills.round())
            } else {
                let ratio = if others_old_total > 0.0 {
                    b.limit / others_old_total
                } else {
                    0.0
                };
                BudgetCategory::new(b.category.clone(), (remaining * ratio).round())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(entries: &[(&str, f64)]) -> Vec<BudgetCategory> {
        entries
            .iter()
            .map(|(c, l)| BudgetCategory::new(*c, *l))
            .collect()
    }

    fn limit_of(budgets: &[BudgetCategory], category: &str) -> f64 {
        budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.limit)
            .unwrap()
    }

    fn total(budgets: &[BudgetCategory]) -> f64 {
        budgets.iter().map(|b| b.limit).sum()
    }

    #[test]
    fn test_floor_leaves_compliant_limits_unchanged() {
        // Bills 6000 of total 13000 already exceeds the 3900 floor; the
        // remaining 7000 equals the prior non-Bills sum, so nothing moves.
        let input = limits(&[("Food", 5000.0), ("Bills", 6000.0), ("Other", 2000.0)]);
        let result = initialize_with_floor(&input);

        assert_eq!(limit_of(&result, "Bills"), 6000.0);
        assert_eq!(limit_of(&result, "Food"), 5000.0);
        assert_eq!(limit_of(&result, "Other"), 2000.0);
    }

    #[test]
    fn test_floor_raises_deficient_bills() {
        // Total 10000, floor 3000; Bills at 1000 gets raised and the others
        // shrink proportionally (9000 prior -> 7000 remaining).
        let input = limits(&[("Food", 6000.0), ("Bills", 1000.0), ("Other", 3000.0)]);
        let result = initialize_with_floor(&input);

        assert_eq!(limit_of(&result, "Bills"), 3000.0);
        assert_eq!(limit_of(&result, "Food"), (7000.0 * 6000.0 / 9000.0_f64).round());
        assert_eq!(limit_of(&result, "Other"), (7000.0 * 3000.0 / 9000.0_f64).round());
    }

    #[test]
    fn test_floor_property_holds_for_arbitrary_limits() {
        let cases = [
            vec![("Food", 1.0), ("Bills", 0.0), ("Other", 1.0)],
            vec![("Food", 123.0), ("Bills", 7.0), ("Shopping", 999.0), ("Other", 55.0)],
            vec![("Bills", 10.0), ("Food", 10000.0)],
            vec![("Food", 0.0), ("Bills", 0.0)],
        ];

        for case in cases {
            let input = limits(&case);
            let before_total = total(&input);
            let result = initialize_with_floor(&input);
            let n = result.len() as f64;

            // Bills >= 30% of the total, within per-category rounding drift
            assert!(
                limit_of(&result, "Bills") >= (BILLS_FLOOR_RATIO * before_total).round() - (n - 1.0),
                "floor violated for {:?}",
                case
            );
            // Total preserved up to rounding drift
            assert!(
                (total(&result) - before_total).abs() <= n,
                "total drifted for {:?}",
                case
            );
        }
    }

    #[test]
    fn test_floor_with_missing_bills_withholds_share() {
        // No Bills line: 30% of the total is withheld and the rest scales
        // down, exactly as the original behaves.
        let input = limits(&[("Food", 6000.0), ("Other", 4000.0)]);
        let result = initialize_with_floor(&input);

        assert_eq!(result.len(), 2);
        assert_eq!(limit_of(&result, "Food"), (7000.0 * 0.6_f64).round());
        assert_eq!(limit_of(&result, "Other"), (7000.0 * 0.4_f64).round());
    }

    #[test]
    fn test_floor_with_zero_totals_yields_zero_not_nan() {
        let input = limits(&[("Food", 0.0), ("Bills", 0.0), ("Other", 0.0)]);
        let result = initialize_with_floor(&input);
        for b in &result {
            assert_eq!(b.limit, 0.0);
        }
    }

    #[test]
    fn test_rescale_scenario_60_to_30() {
        // Worked scenario: 13000 total halves to 6500; scaled Bills 3000
        // clears the 1950 floor; 3500 splits over Food/Other 5:2.
        let input = limits(&[("Food", 5000.0), ("Bills", 6000.0), ("Other", 2000.0)]);
        let result = rescale_to_percent(&input, 60, 30);

        assert_eq!(limit_of(&result, "Bills"), 3000.0);
        assert_eq!(limit_of(&result, "Food"), 2500.0);
        assert_eq!(limit_of(&result, "Other"), 1000.0);
    }

    #[test]
    fn test_rescale_total_scales_within_rounding_tolerance() {
        let input = limits(&[
            ("Food", 5000.0),
            ("Transport", 3000.0),
            ("Bills", 6000.0),
            ("Other", 2000.0),
        ]);
        let before = total(&input);

        for (old, new) in [(60u8, 90u8), (60, 10), (50, 55), (90, 15)] {
            let result = rescale_to_percent(&input, old, new);
            let expected = before * f64::from(new) / f64::from(old);
            let n = result.len() as f64;
            assert!(
                (total(&result) - expected).abs() <= n,
                "rescale {}->{} drifted beyond tolerance",
                old,
                new
            );
        }
    }

    #[test]
    fn test_rescale_same_percent_is_idempotent() {
        // The first call may re-apply the floor; the second is a no-op.
        let input = limits(&[("Food", 9000.0), ("Bills", 500.0), ("Other", 500.0)]);
        let first = rescale_to_percent(&input, 60, 60);
        let second = rescale_to_percent(&first, 60, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rescale_zero_old_percent_treated_as_100() {
        let input = limits(&[("Food", 5000.0), ("Bills", 6000.0), ("Other", 2000.0)]);
        let from_zero = rescale_to_percent(&input, 0, 50);
        let from_hundred = rescale_to_percent(&input, 100, 50);

        assert_eq!(from_zero, from_hundred);
        for b in &from_zero {
            assert!(b.limit.is_finite());
        }
    }

    #[test]
    fn test_rescale_enforces_floor_on_scaled_total() {
        // Bills 1000 of 10000; at any scale the floor binds: scaled Bills
        // would be 10% of the new total, below the 30% floor.
        let input = limits(&[("Food", 9000.0), ("Bills", 1000.0)]);
        let result = rescale_to_percent(&input, 60, 30);

        let new_total = 5000.0;
        assert_eq!(limit_of(&result, "Bills"), (new_total * 0.3_f64).round());
        assert_eq!(limit_of(&result, "Food"), (new_total * 0.7_f64).round());
    }

    #[test]
    fn test_rescale_preserves_category_order() {
        let input = limits(&[("Food", 5000.0), ("Bills", 6000.0), ("Other", 2000.0)]);
        let result = rescale_to_percent(&input, 60, 80);
        let order: Vec<&str> = result.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(order, vec!["Food", "Bills", "Other"]);
    }
}
