//! Preferences service
//!
//! Currency selection and the budget/savings split. The currency affects
//! display only; stored amounts never change when it does.

use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{BudgetPreferences, CurrencyOption};
use crate::storage::Storage;

/// Service for user preferences
pub struct PreferencesService<'a> {
    storage: &'a Storage,
}

impl<'a> PreferencesService<'a> {
    /// Create a new preferences service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The active currency, resolved for display. Unknown stored codes fall
    /// back to INR rather than failing.
    pub fn currency(&self) -> ExpenseWiseResult<&'static CurrencyOption> {
        let code = self.storage.currency.get()?;
        Ok(CurrencyOption::resolve(&code))
    }

    /// Select a new display currency
    pub fn set_currency(&self, code: &str) -> ExpenseWiseResult<&'static CurrencyOption> {
        let option = CurrencyOption::find(code)
            .ok_or_else(|| ExpenseWiseError::currency_not_found(code))?;

        self.storage.currency.set(option.code)?;
        self.storage.persist_currency();
        Ok(option)
    }

    /// The current budget/savings split
    pub fn budget_preferences(&self) -> ExpenseWiseResult<BudgetPreferences> {
        self.storage.preferences.get()
    }

    /// Store a split directly, without rescaling budgets.
    /// `BudgetService::apply_budget_split` is the path that keeps limits in
    /// step with the split.
    pub fn set_budget_preferences(
        &self,
        prefs: BudgetPreferences,
    ) -> ExpenseWiseResult<BudgetPreferences> {
        prefs
            .validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        self.storage.preferences.set(prefs)?;
        self.storage.persist_preferences();
        Ok(prefs)
    }
}
