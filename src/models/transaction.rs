//! Transaction model
//!
//! A transaction is an income or expense entry with a description, positive
//! amount, category, and calendar date. Transactions are edited by full
//! replacement keyed on their id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category;
use super::ids::TransactionId;

/// Maximum length of a transaction description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Sign prefix used when rendering amounts
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description (1-100 characters)
    pub description: String,

    /// Amount, always positive; the type carries the direction
    pub amount: f64,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category, drawn from the fixed list for the transaction type
    pub category: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(len));
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        let allowed = category::categories_for(self.kind);
        if !allowed.contains(&self.category.as_str()) {
            return Err(TransactionValidationError::UnknownCategory {
                category: self.category.clone(),
                kind: self.kind,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    NonPositiveAmount(f64),
    UnknownCategory {
        category: String,
        kind: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description is {} characters, maximum is {}",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::UnknownCategory { category, kind } => write!(
                f,
                "'{}' is not a valid {} category (expected one of: {})",
                category,
                kind,
                category::categories_for(*kind).join(", ")
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
