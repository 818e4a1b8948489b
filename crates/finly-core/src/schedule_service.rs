//! Installment scheduling for credit purchases.
//!
//! Expands a purchase paid in monthly installments into dated occurrences
//! governed by the card's billing cycle, and aggregates those occurrences
//! into the period- and card-scoped views used for reporting.

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use finly_domain::{
    common::{set_day_clamped, shift_month},
    Card, Period, Purchase, PurchaseStatus,
};

use crate::CoreError;

/// Due day applied when a card has no configured payment due day.
pub const DEFAULT_DUE_DAY: u32 = 10;

/// One scheduled partial payment of a credit purchase.
///
/// Derived on demand from a purchase and its card; never persisted. The
/// paid flag is a function of the purchase's running paid count, not
/// per-installment state.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentOccurrence {
    pub purchase_id: Uuid,
    pub card_id: Uuid,
    pub installment_index: u32,
    pub due_date: NaiveDate,
    pub amount_due: f64,
    pub is_paid: bool,
}

/// Occurrences charged to a single card within a period, plus the total
/// still owed on them.
#[derive(Debug, Clone, PartialEq)]
pub struct CardInstallmentSummary {
    pub card_id: Uuid,
    pub occurrences: Vec<InstallmentOccurrence>,
    pub total_unpaid: f64,
}

/// Pure scheduling helpers over purchases and card billing cycles.
pub struct ScheduleService;

impl ScheduleService {
    /// Computes the due date of installment `index` for a purchase made on
    /// `purchase_date` against `card`.
    ///
    /// The statement date is the purchase date moved to the card's close
    /// day; a purchase made strictly after that day rolls into the next
    /// cycle. Cards without a configured close day skip the rollover
    /// adjustment entirely, and a missing due day falls back to
    /// [`DEFAULT_DUE_DAY`]. Day-of-month values are clamped to the length
    /// of the target month.
    pub fn due_date(purchase_date: NaiveDate, card: &Card, index: u32) -> NaiveDate {
        let statement = match card.statement_close_day {
            Some(close_day) => {
                let closed = set_day_clamped(purchase_date, close_day);
                if closed < purchase_date {
                    shift_month(closed, 1)
                } else {
                    closed
                }
            }
            None => purchase_date,
        };
        let statement = shift_month(statement, index as i32);
        set_day_clamped(statement, card.due_day.unwrap_or(DEFAULT_DUE_DAY))
    }

    /// Expands a purchase into its full installment sequence.
    ///
    /// Returns exactly `installment_count` occurrences; an installment
    /// count of zero expands to an empty sequence.
    pub fn expand(purchase: &Purchase, card: &Card) -> Vec<InstallmentOccurrence> {
        let amount_due = purchase.installment_amount();
        (0..purchase.installment_count)
            .map(|index| InstallmentOccurrence {
                purchase_id: purchase.id,
                card_id: card.id,
                installment_index: index,
                due_date: Self::due_date(purchase.purchase_date, card, index),
                amount_due,
                is_paid: index < purchase.installments_paid,
            })
            .collect()
    }

    /// Expands every credit installment purchase in `purchases`.
    ///
    /// Purchases referencing a card that is not in `cards` contribute no
    /// occurrences; the anomaly is logged and the rest of the expansion
    /// proceeds.
    pub fn expand_all(purchases: &[Purchase], cards: &[Card]) -> Vec<InstallmentOccurrence> {
        let mut occurrences = Vec::new();
        for purchase in purchases.iter().filter(|p| p.is_credit_installment()) {
            let card = purchase
                .card_id
                .and_then(|card_id| cards.iter().find(|c| c.id == card_id));
            match card {
                Some(card) => occurrences.extend(Self::expand(purchase, card)),
                None => warn!(
                    "purchase {} references an unknown card; skipping its installments",
                    purchase.id
                ),
            }
        }
        occurrences
    }

    /// Keeps the occurrences whose due date falls inside `period`.
    pub fn filter_by_period(
        occurrences: &[InstallmentOccurrence],
        period: Period,
    ) -> Vec<InstallmentOccurrence> {
        occurrences
            .iter()
            .filter(|occurrence| period.contains(occurrence.due_date))
            .cloned()
            .collect()
    }

    /// Unpaid occurrences strictly after `as_of`, sorted by due date.
    pub fn upcoming_unpaid(
        occurrences: &[InstallmentOccurrence],
        as_of: NaiveDate,
    ) -> Vec<InstallmentOccurrence> {
        let mut upcoming: Vec<InstallmentOccurrence> = occurrences
            .iter()
            .filter(|occurrence| occurrence.due_date > as_of && !occurrence.is_paid)
            .cloned()
            .collect();
        upcoming.sort_by_key(|occurrence| occurrence.due_date);
        upcoming
    }

    /// Groups the period's occurrences by card, with each card's unpaid
    /// total. Cards with no matching occurrences are omitted.
    pub fn aggregate_by_card(
        purchases: &[Purchase],
        cards: &[Card],
        period: Period,
    ) -> Vec<CardInstallmentSummary> {
        let mut summaries = Vec::new();
        for card in cards {
            let mut expanded = Vec::new();
            for purchase in purchases
                .iter()
                .filter(|p| p.is_credit_installment() && p.card_id == Some(card.id))
            {
                expanded.extend(Self::expand(purchase, card));
            }
            let occurrences = Self::filter_by_period(&expanded, period);
            if occurrences.is_empty() {
                continue;
            }
            let total_unpaid = occurrences
                .iter()
                .filter(|occurrence| !occurrence.is_paid)
                .map(|occurrence| occurrence.amount_due)
                .sum();
            summaries.push(CardInstallmentSummary {
                card_id: card.id,
                occurrences,
                total_unpaid,
            });
        }
        summaries
    }

    /// Records one more paid installment on the purchase, flipping its
    /// status to paid once the last installment is covered.
    ///
    /// Rejects the call when the purchase is already fully paid; callers
    /// are responsible for persisting the update and refreshing derived
    /// card balances.
    pub fn mark_installment_paid(purchase: &mut Purchase) -> Result<(), CoreError> {
        if purchase.is_fully_paid() {
            return Err(CoreError::InvalidOperation(format!(
                "purchase {} is already fully paid",
                purchase.id
            )));
        }
        purchase.installments_paid += 1;
        if purchase.is_fully_paid() {
            purchase.status = PurchaseStatus::Paid;
        }
        Ok(())
    }
}
