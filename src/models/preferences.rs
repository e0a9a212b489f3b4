//! Budget/savings split preferences
//!
//! Total income is partitioned into a spendable "budget" pool and a
//! "savings" pool by percentage. The two percentages always sum to 100.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How total income is split between the budget and savings pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPreferences {
    /// Percentage of income allocated for spending
    pub budget_percent: u8,

    /// Percentage of income earmarked as savings
    pub savings_percent: u8,
}

impl BudgetPreferences {
    /// Build a split from the budget percentage; savings is the complement
    pub fn with_budget_percent(budget_percent: u8) -> Self {
        Self {
            budget_percent,
            savings_percent: 100u8.saturating_sub(budget_percent),
        }
    }

    /// Validate that the two percentages partition 100%
    pub fn validate(&self) -> Result<(), PreferencesValidationError> {
        let sum = u16::from(self.budget_percent) + u16::from(self.savings_percent);
        if sum != 100 {
            return Err(PreferencesValidationError::SplitNotComplementary {
                budget_percent: self.budget_percent,
                savings_percent: self.savings_percent,
            });
        }
        Ok(())
    }
}

impl Default for BudgetPreferences {
    fn default() -> Self {
        Self {
            budget_percent: 60,
            savings_percent: 40,
        }
    }
}

impl fmt::Display for BudgetPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% budget / {}% savings",
            self.budget_percent, self.savings_percent
        )
    }
}

/// Validation errors for budget preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesValidationError {
    SplitNotComplementary {
        budget_percent: u8,
        savings_percent: u8,
    },
}

impl fmt::Display for PreferencesValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitNotComplementary {
                budget_percent,
                savings_percent,
            } => write!(
                f,
                "Budget and savings percentages must sum to 100, got {} + {}",
                budget_percent, savings_percent
            ),
        }
    }
}

impl std::error::Error for PreferencesValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let prefs = BudgetPreferences::default();
        assert_eq!(prefs.budget_percent, 60);
        assert_eq!(prefs.savings_percent, 40);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_with_budget_percent() {
        let prefs = BudgetPreferences::with_budget_percent(30);
        assert_eq!(prefs.budget_percent, 30);
        assert_eq!(prefs.savings_percent, 70);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_split() {
        let prefs = BudgetPreferences {
            budget_percent: 60,
            savings_percent: 50,
        };
        assert!(matches!(
            prefs.validate(),
            Err(PreferencesValidationError::SplitNotComplementary { .. })
        ));
    }

    #[test]
    fn test_serialization_shape() {
        let prefs = BudgetPreferences::default();
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"budgetPercent":60,"savingsPercent":40}"#);

        let loaded: BudgetPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, prefs);
    }
}
