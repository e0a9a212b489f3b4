//! Monthly flow report
//!
//! Income and expense totals per calendar month for the trailing window
//! ending at the reference date, oldest month first.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::ExpenseWiseResult;
use crate::storage::Storage;

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    /// Abbreviated month name ("Jan")
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyFlow {
    /// Income minus expenses for the month
    pub fn savings(&self) -> f64 {
        self.income - self.expenses
    }
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let (next_year, next_month) = if start.month() == 12 {
        (start.year() + 1, 1)
    } else {
        (start.year(), start.month() + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(date);
    (start, end)
}

/// The month `back` months before the one containing `date`
fn shift_month(date: NaiveDate, back: u32) -> (i32, u32) {
    let months = date.year() * 12 + date.month() as i32 - 1 - back as i32;
    (months.div_euclid(12), (months.rem_euclid(12) + 1) as u32)
}

/// Compute income/expense flows for the last `months` months, oldest first.
/// The window always includes the month containing `today`.
pub fn monthly_flows(
    storage: &Storage,
    today: NaiveDate,
    months: u32,
) -> ExpenseWiseResult<Vec<MonthlyFlow>> {
    let transactions = storage.transactions.all()?;
    let mut flows = Vec::with_capacity(months as usize);

    for back in (0..months).rev() {
        let (year, month) = shift_month(today, back);
        let anchor = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today);
        let (start, end) = month_bounds(anchor);

        let mut flow = MonthlyFlow {
            label: anchor.format("%b").to_string(),
            year,
            month,
            income: 0.0,
            expenses: 0.0,
        };

        for txn in transactions.iter().filter(|t| t.date >= start && t.date <= end) {
            if txn.is_income() {
                flow.income += txn.amount;
            } else {
                flow.expenses += txn.amount;
            }
        }

        flows.push(flow);
    }

    Ok(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpenseWisePaths;
    use crate::models::TransactionType;
    use crate::services::TransactionService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(d(2025, 6, 15)),
            (d(2025, 6, 1), d(2025, 6, 30))
        );
        assert_eq!(
            month_bounds(d(2025, 12, 3)),
            (d(2025, 12, 1), d(2025, 12, 31))
        );
        assert_eq!(month_bounds(d(2024, 2, 29)), (d(2024, 2, 1), d(2024, 2, 29)));
    }

    #[test]
    fn test_shift_month_crosses_year_boundary() {
        assert_eq!(shift_month(d(2025, 3, 15), 0), (2025, 3));
        assert_eq!(shift_month(d(2025, 3, 15), 2), (2025, 1));
        assert_eq!(shift_month(d(2025, 3, 15), 3), (2024, 12));
        assert_eq!(shift_month(d(2025, 1, 1), 13), (2023, 12));
    }

    #[test]
    fn test_flows_cover_trailing_window_oldest_first() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .add("Paycheck", 50000.0, TransactionType::Income, "Salary", d(2025, 6, 1))
            .unwrap();
        service
            .add("Groceries", 1200.0, TransactionType::Expense, "Food", d(2025, 5, 20))
            .unwrap();
        // Outside the 6-month window
        service
            .add("Ancient", 9999.0, TransactionType::Expense, "Other", d(2024, 11, 1))
            .unwrap();

        let flows = monthly_flows(&storage, d(2025, 6, 15), 6).unwrap();
        assert_eq!(flows.len(), 6);
        assert_eq!((flows[0].year, flows[0].month), (2025, 1));
        assert_eq!((flows[5].year, flows[5].month), (2025, 6));
        assert_eq!(flows[5].label, "Jun");

        assert_eq!(flows[5].income, 50000.0);
        assert_eq!(flows[4].expenses, 1200.0);
        assert_eq!(flows[4].savings(), -1200.0);

        let total_expenses: f64 = flows.iter().map(|f| f.expenses).sum();
        assert_eq!(total_expenses, 1200.0);
    }
}
