//! Domain model for expenses, including purchases paid in credit installments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// An expense record. Credit purchases may be split into monthly
/// installments governed by the referenced card's billing cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category_id: Uuid,
    pub payment_method: PaymentMethod,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Uuid>,
    #[serde(default = "Purchase::default_installment_count")]
    pub installment_count: u32,
    #[serde(default)]
    pub installments_paid: u32,
    #[serde(default)]
    pub status: PurchaseStatus,
}

impl Purchase {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category_id: Uuid,
        payment_method: PaymentMethod,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category_id,
            payment_method,
            purchase_date,
            card_id: None,
            installment_count: Self::default_installment_count(),
            installments_paid: 0,
            status: PurchaseStatus::Pending,
        }
    }

    /// Charges the purchase to a card, split into `installments` payments.
    pub fn on_card(mut self, card_id: Uuid, installments: u32) -> Self {
        self.card_id = Some(card_id);
        self.installment_count = installments;
        self
    }

    /// Returns `true` when the purchase is a credit purchase with an
    /// installment plan tied to a card.
    pub fn is_credit_installment(&self) -> bool {
        self.payment_method == PaymentMethod::Credit
            && self.installment_count > 0
            && self.card_id.is_some()
    }

    /// Equal-split amount of a single installment.
    pub fn installment_amount(&self) -> f64 {
        self.amount / self.installment_count.max(1) as f64
    }

    pub fn is_fully_paid(&self) -> bool {
        self.installments_paid >= self.installment_count
    }

    pub fn remaining_installments(&self) -> u32 {
        self.installment_count.saturating_sub(self.installments_paid)
    }

    pub fn default_installment_count() -> u32 {
        1
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Purchase {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Purchase {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.description, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the payment lifecycle state of a purchase.
#[derive(Default)]
pub enum PurchaseStatus {
    #[default]
    Pending,
    Paid,
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PurchaseStatus::Pending => "Pending",
            PurchaseStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn legacy_records_without_installment_fields_get_defaults() {
        let json = format!(
            r#"{{
                "id": "{}",
                "description": "Nafta",
                "amount": 20.5,
                "category_id": "{}",
                "payment_method": "Cash",
                "purchase_date": "2024-01-05"
            }}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        let purchase: Purchase = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(purchase.installment_count, 1);
        assert_eq!(purchase.installments_paid, 0);
        assert_eq!(purchase.status, PurchaseStatus::Pending);
        assert!(purchase.card_id.is_none());
    }

    #[test]
    fn installment_amount_guards_a_zero_count() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut purchase =
            Purchase::new("Silla", 300.0, Uuid::new_v4(), PaymentMethod::Credit, date);
        purchase.installment_count = 0;

        assert_eq!(purchase.installment_amount(), 300.0);
        assert!(purchase.is_fully_paid());
    }

    #[test]
    fn credit_installment_predicate_requires_card_and_installments() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let base = Purchase::new("Mesa", 500.0, Uuid::new_v4(), PaymentMethod::Credit, date);
        assert!(!base.is_credit_installment());

        let on_card = base.on_card(Uuid::new_v4(), 3);
        assert!(on_card.is_credit_installment());

        let mut cash = on_card;
        cash.payment_method = PaymentMethod::Debit;
        assert!(!cash.is_credit_installment());
    }
}
