//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CurrencyOption, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a list of transactions as a table
pub fn render_transactions(transactions: &[Transaction], currency: &CurrencyOption) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id.short(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            kind: txn.kind.to_string(),
            amount: format!("{}{}", txn.kind.sign(), currency.format_amount(txn.amount)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Render one transaction in full
pub fn render_transaction_details(txn: &Transaction, currency: &CurrencyOption) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}{}\n",
        txn.kind.sign(),
        currency.format_amount(txn.amount)
    ));
    output
}
