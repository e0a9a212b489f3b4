//! Budget service
//!
//! Business logic for category budgets: the overview (limit vs. spending),
//! the manual per-category limit override, and applying a new budget/savings
//! split via the allocator.

use std::collections::HashMap;

use crate::allocator;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{BudgetCategory, BudgetPreferences};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// One category's limit against its recorded spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudgetStatus {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    /// Spending as a percentage of the limit, capped at 100; zero when the
    /// limit is zero
    pub percent_used: f64,
}

/// Budget overview across all categories
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
    /// Unspent budget, clamped at zero when overspent
    pub remaining: f64,
    pub categories: Vec<CategoryBudgetStatus>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All budget lines in stored order
    pub fn budgets(&self) -> ExpenseWiseResult<Vec<BudgetCategory>> {
        self.storage.budgets.all()
    }

    /// Total expense amount per category
    pub fn spending_by_category(&self) -> ExpenseWiseResult<HashMap<String, f64>> {
        let transactions = self.storage.transactions.all()?;
        let mut spending: HashMap<String, f64> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *spending.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        Ok(spending)
    }

    /// Overwrite one category's limit.
    ///
    /// Deliberately skips redistribution and floor enforcement: a manual
    /// edit may leave Bills below its 30% floor until the next rescale.
    pub fn set_category_limit(
        &self,
        category: &str,
        limit: f64,
    ) -> ExpenseWiseResult<BudgetCategory> {
        let line = BudgetCategory::new(category, limit);
        line.validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        if !self.storage.budgets.set_limit(category, limit)? {
            return Err(ExpenseWiseError::category_not_found(category));
        }

        self.storage.persist_budgets();
        Ok(line)
    }

    /// Rescale all limits to a new budget percentage and store the matching
    /// preferences (savings is the complement).
    ///
    /// Range and step constraints on the percentage are the caller's job.
    pub fn apply_budget_split(
        &self,
        new_budget_percent: u8,
    ) -> ExpenseWiseResult<Vec<BudgetCategory>> {
        let prefs = self.storage.preferences.get()?;
        let budgets = self.storage.budgets.all()?;

        let rescaled =
            allocator::rescale_to_percent(&budgets, prefs.budget_percent, new_budget_percent);
        self.storage.budgets.replace_all(rescaled.clone())?;
        self.storage.persist_budgets();

        self.storage
            .preferences
            .set(BudgetPreferences::with_budget_percent(new_budget_percent))?;
        self.storage.persist_preferences();

        Ok(rescaled)
    }

    /// Build the budget overview: per-category status plus totals
    pub fn overview(&self) -> ExpenseWiseResult<BudgetOverview> {
        let budgets = self.storage.budgets.all()?;
        let spending = self.spending_by_category()?;

        let mut total_budget = 0.0;
        let mut categories = Vec::with_capacity(budgets.len());
        for budget in &budgets {
            let spent = spending.get(&budget.category).copied().unwrap_or(0.0);
            let percent_used = if budget.limit > 0.0 {
                (spent / budget.limit * 100.0).min(100.0)
            } else {
                0.0
            };

            total_budget += budget.limit;
            categories.push(CategoryBudgetStatus {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                percent_used,
            });
        }

        let total_spent: f64 = spending.values().sum();

        Ok(BudgetOverview {
            total_budget,
            total_spent,
            remaining: (total_budget - total_spent).max(0.0),
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpenseWisePaths;
    use crate::models::TransactionType;
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_set_category_limit_only_touches_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let before = service.budgets().unwrap();
        service.set_category_limit("Food", 1234.0).unwrap();
        let after = service.budgets().unwrap();

        for (b, a) in before.iter().zip(after.iter()) {
            if a.category == "Food" {
                assert_eq!(a.limit, 1234.0);
            } else {
                assert_eq!(a.limit, b.limit);
            }
        }
    }

    #[test]
    fn test_set_category_limit_may_break_floor() {
        // The escape hatch: a manual edit can push Bills under 30% and the
        // service leaves it there until the next rescale.
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_category_limit("Bills", 1.0).unwrap();
        assert_eq!(
            storage.budgets.get("Bills").unwrap().unwrap().limit,
            1.0
        );
    }

    #[test]
    fn test_set_category_limit_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.set_category_limit("Food", -5.0).unwrap_err().is_validation());
        assert!(service
            .set_category_limit("Rocketry", 100.0)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_apply_budget_split_updates_budgets_and_preferences() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let before_total: f64 = service.budgets().unwrap().iter().map(|b| b.limit).sum();
        let rescaled = service.apply_budget_split(30).unwrap();
        let after_total: f64 = rescaled.iter().map(|b| b.limit).sum();

        // 60 -> 30 halves the pool, up to rounding drift
        let expected = before_total * 0.5;
        assert!((after_total - expected).abs() <= rescaled.len() as f64);

        let prefs = storage.preferences.get().unwrap();
        assert_eq!(prefs.budget_percent, 30);
        assert_eq!(prefs.savings_percent, 70);
    }

    #[test]
    fn test_apply_budget_split_twice_is_stable() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let first = service.apply_budget_split(45).unwrap();
        let second = service.apply_budget_split(45).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overview() {
        let (_temp_dir, storage) = create_test_storage();
        let transactions = TransactionService::new(&storage);
        let service = BudgetService::new(&storage);

        transactions
            .add("Groceries", 500.0, TransactionType::Expense, "Food", date())
            .unwrap();
        transactions
            .add("More groceries", 400.0, TransactionType::Expense, "Food", date())
            .unwrap();
        // Income does not count as spending
        transactions
            .add("Paycheck", 9999.0, TransactionType::Income, "Salary", date())
            .unwrap();

        let overview = service.overview().unwrap();
        assert_eq!(overview.total_spent, 900.0);
        assert_eq!(overview.remaining, overview.total_budget - 900.0);

        let food = overview
            .categories
            .iter()
            .find(|c| c.category == "Food")
            .unwrap();
        assert_eq!(food.spent, 900.0);
        assert!(food.percent_used > 0.0);

        let bills = overview
            .categories
            .iter()
            .find(|c| c.category == "Bills")
            .unwrap();
        assert_eq!(bills.spent, 0.0);
        assert_eq!(bills.percent_used, 0.0);
    }

    #[test]
    fn test_overview_percent_capped_and_zero_limit_guarded() {
        let (_temp_dir, storage) = create_test_storage();
        let transactions = TransactionService::new(&storage);
        let service = BudgetService::new(&storage);

        service.set_category_limit("Food", 100.0).unwrap();
        transactions
            .add("Feast", 250.0, TransactionType::Expense, "Food", date())
            .unwrap();

        service.set_category_limit("Transport", 0.0).unwrap();
        transactions
            .add("Taxi", 80.0, TransactionType::Expense, "Transport", date())
            .unwrap();

        let overview = service.overview().unwrap();
        let food = overview
            .categories
            .iter()
            .find(|c| c.category == "Food")
            .unwrap();
        assert_eq!(food.percent_used, 100.0);

        let transport = overview
            .categories
            .iter()
            .find(|c| c.category == "Transport")
            .unwrap();
        assert_eq!(transport.percent_used, 0.0);
    }
}
