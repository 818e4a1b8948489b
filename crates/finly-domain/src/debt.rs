//! Domain models for personal debts and their payment history.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Money owed to or by the user, settled through recorded partial payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub amount_paid: f64,
    pub kind: DebtKind,
    pub counterparty: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub payments: Vec<DebtPayment>,
    #[serde(default)]
    pub status: DebtStatus,
}

impl Debt {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: DebtKind,
        counterparty: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            amount_paid: 0.0,
            kind,
            counterparty: counterparty.into(),
            date,
            due_date: None,
            notes: None,
            payments: Vec::new(),
            status: DebtStatus::Pending,
        }
    }

    /// Amount still owed after the recorded payments.
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.amount_paid).max(0.0)
    }

    /// Registers a partial payment and refreshes the settlement status.
    pub fn record_payment(&mut self, payment: DebtPayment) {
        self.amount_paid += payment.amount;
        self.payments.push(payment);
        self.status = if self.amount_paid >= self.amount {
            DebtStatus::Settled
        } else if self.amount_paid > 0.0 {
            DebtStatus::Partial
        } else {
            DebtStatus::Pending
        };
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, DebtStatus::Settled)
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Debt {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Debt {
    fn display_label(&self) -> String {
        format!("{} ({}) [{}]", self.description, self.counterparty, self.status)
    }
}

/// One partial payment applied to a debt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtPayment {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DebtPayment {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes money owed to the user from money the user owes.
pub enum DebtKind {
    Receivable,
    Payable,
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DebtKind::Receivable => "Receivable",
            DebtKind::Payable => "Payable",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Settlement state derived from the recorded payments.
#[derive(Default)]
pub enum DebtStatus {
    #[default]
    Pending,
    Partial,
    Settled,
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DebtStatus::Pending => "Pending",
            DebtStatus::Partial => "Partial",
            DebtStatus::Settled => "Settled",
        };
        f.write_str(label)
    }
}
