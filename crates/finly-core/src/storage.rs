use std::collections::HashSet;

use finly_domain::{Card, Category, Debt, Income, Purchase};

use crate::CoreError;

/// Abstraction over persistence backends for the finance collections.
///
/// Services never touch storage directly; they operate on values loaded
/// through this trait and handed back for saving by the caller.
pub trait FinanceStore: Send + Sync {
    fn load_purchases(&self) -> Result<Vec<Purchase>, CoreError>;
    fn save_purchases(&self, purchases: &[Purchase]) -> Result<(), CoreError>;
    fn load_cards(&self) -> Result<Vec<Card>, CoreError>;
    fn save_cards(&self, cards: &[Card]) -> Result<(), CoreError>;
    fn load_incomes(&self) -> Result<Vec<Income>, CoreError>;
    fn save_incomes(&self, incomes: &[Income]) -> Result<(), CoreError>;
    fn load_categories(&self) -> Result<Vec<Category>, CoreError>;
    fn save_categories(&self, categories: &[Category]) -> Result<(), CoreError>;
    fn load_debts(&self) -> Result<Vec<Debt>, CoreError>;
    fn save_debts(&self, debts: &[Debt]) -> Result<(), CoreError>;
}

/// Detects dangling references and other anomalies in loaded collections.
pub fn data_warnings(purchases: &[Purchase], cards: &[Card], categories: &[Category]) -> Vec<String> {
    let card_ids: HashSet<_> = cards.iter().map(|card| card.id).collect();
    let category_ids: HashSet<_> = categories.iter().map(|category| category.id).collect();
    let mut warnings = Vec::new();

    for purchase in purchases {
        if let Some(card_id) = purchase.card_id {
            if !card_ids.contains(&card_id) {
                warnings.push(format!(
                    "purchase {} references unknown card {}",
                    purchase.id, card_id
                ));
            }
        }
        if !category_ids.contains(&purchase.category_id) {
            warnings.push(format!(
                "purchase {} references missing category {}",
                purchase.id, purchase.category_id
            ));
        }
        if purchase.installments_paid > purchase.installment_count {
            warnings.push(format!(
                "purchase {} records more installments paid than scheduled",
                purchase.id
            ));
        }
    }
    warnings
}
