//! Domain model for credit cards and their billing-cycle configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A credit card with its spending limit and billing-cycle days.
///
/// `statement_close_day` and `due_day` may be absent on cards created before
/// billing-cycle tracking existed; installment scheduling applies documented
/// fallbacks for those cards instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub bank: String,
    pub credit_limit: f64,
    /// Day of month (1-31) the statement closes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_close_day: Option<u32>,
    /// Day of month (1-31) payment for a closed statement is due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(default)]
    pub used_balance: f64,
}

impl Card {
    pub fn new(name: impl Into<String>, bank: impl Into<String>, credit_limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bank: bank.into(),
            credit_limit,
            statement_close_day: None,
            due_day: None,
            used_balance: 0.0,
        }
    }

    pub fn with_billing_cycle(mut self, statement_close_day: u32, due_day: u32) -> Self {
        self.statement_close_day = Some(statement_close_day);
        self.due_day = Some(due_day);
        self
    }

    pub fn available_balance(&self) -> f64 {
        self.credit_limit - self.used_balance
    }
}

impl Identifiable for Card {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Card {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Card {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.bank)
    }
}
