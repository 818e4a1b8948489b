//! Domain model for income entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single income entry attributed to a named source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub source: String,
}

impl Income {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            source: source.into(),
        }
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Income {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.source)
    }
}
