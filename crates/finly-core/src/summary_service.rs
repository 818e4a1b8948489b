//! Period reporting that combines purchases, incomes, debts, and
//! installment schedules into dashboard totals.

use std::collections::HashMap;

use uuid::Uuid;

use finly_domain::{Card, Debt, DebtKind, Income, Period, Purchase};

use crate::schedule_service::ScheduleService;

/// Aggregated totals for one reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: HashMap<Uuid, f64>,
    /// Unpaid installment amounts falling due inside the period.
    pub pending_installments: f64,
    /// Already-paid installment amounts that fell due inside the period.
    pub paid_installments: f64,
    pub receivable_outstanding: f64,
    pub payable_outstanding: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the dashboard summary for `period`.
    ///
    /// Purchases whose card cannot be resolved simply contribute no
    /// installment amounts; the summary itself never fails.
    pub fn for_period(
        purchases: &[Purchase],
        incomes: &[Income],
        debts: &[Debt],
        cards: &[Card],
        period: Period,
    ) -> PeriodSummary {
        let total_expenses = purchases
            .iter()
            .filter(|purchase| period.contains(purchase.purchase_date))
            .map(|purchase| purchase.amount)
            .sum::<f64>();

        let mut expenses_by_category = HashMap::new();
        for purchase in purchases
            .iter()
            .filter(|purchase| period.contains(purchase.purchase_date))
        {
            *expenses_by_category
                .entry(purchase.category_id)
                .or_insert(0.0) += purchase.amount;
        }

        let total_income = incomes
            .iter()
            .filter(|income| period.contains(income.date))
            .map(|income| income.amount)
            .sum::<f64>();

        let occurrences = ScheduleService::expand_all(purchases, cards);
        let in_period = ScheduleService::filter_by_period(&occurrences, period);
        let pending_installments = in_period
            .iter()
            .filter(|occurrence| !occurrence.is_paid)
            .map(|occurrence| occurrence.amount_due)
            .sum::<f64>();
        let paid_installments = in_period
            .iter()
            .filter(|occurrence| occurrence.is_paid)
            .map(|occurrence| occurrence.amount_due)
            .sum::<f64>();

        let receivable_outstanding = Self::outstanding_of_kind(debts, DebtKind::Receivable);
        let payable_outstanding = Self::outstanding_of_kind(debts, DebtKind::Payable);

        PeriodSummary {
            period,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expenses_by_category,
            pending_installments,
            paid_installments,
            receivable_outstanding,
            payable_outstanding,
        }
    }

    fn outstanding_of_kind(debts: &[Debt], kind: DebtKind) -> f64 {
        debts
            .iter()
            .filter(|debt| debt.kind == kind)
            .map(|debt| debt.outstanding())
            .sum()
    }
}
