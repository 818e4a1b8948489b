//! Card balance maintenance and purchase validation.

use finly_domain::{Card, PaymentMethod, Purchase};

use crate::CoreError;

pub struct CardService;

impl CardService {
    /// Checks that a credit purchase fits within its card's available
    /// balance. Purchases paid by other means always pass.
    pub fn validate_purchase(purchase: &Purchase, cards: &[Card]) -> Result<(), CoreError> {
        if purchase.payment_method != PaymentMethod::Credit {
            return Ok(());
        }
        let Some(card_id) = purchase.card_id else {
            return Ok(());
        };
        let card = cards
            .iter()
            .find(|card| card.id == card_id)
            .ok_or(CoreError::CardNotFound(card_id))?;
        if purchase.amount > card.available_balance() {
            return Err(CoreError::Validation(format!(
                "purchase of {:.2} exceeds the available balance of {:.2} on card {}",
                purchase.amount,
                card.available_balance(),
                card.name
            )));
        }
        Ok(())
    }

    /// Recomputes each card's used balance from the purchases charged to
    /// it. Call after purchases change or installments are marked paid.
    pub fn refresh_balances(cards: &mut [Card], purchases: &[Purchase]) {
        for card in cards.iter_mut() {
            card.used_balance = purchases
                .iter()
                .filter(|purchase| purchase.card_id == Some(card.id))
                .map(|purchase| purchase.amount)
                .sum();
        }
    }
}
