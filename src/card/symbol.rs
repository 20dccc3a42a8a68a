use log::{debug, warn};

use crate::card::errors::CardError;

/// A card value in the range 1..=13.
pub type Card = u8;

/// An ordered hand of four cards, as entered or drawn.
pub type Hand = [Card; 4];

pub const MIN_CARD: Card = 1;
pub const MAX_CARD: Card = 13;

/// Canonical display symbol for a card value: A, 2-10, J, Q, K.
pub fn card_symbol(value: Card) -> String {
    match value {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => value.to_string(),
    }
}

/// # Errors
///
/// Returns an error if the token is neither a face symbol (A, J, Q, K,
/// case-insensitive) nor a numeral in 1..=13.
pub fn parse_card_symbol(text: &str) -> Result<Card, CardError> {
    let token = text.trim();
    debug!("Parsing card symbol: '{}'", token);

    match token.to_ascii_uppercase().as_str() {
        "A" => return Ok(1),
        "J" => return Ok(11),
        "Q" => return Ok(12),
        "K" => return Ok(13),
        _ => {}
    }

    let value = token.parse::<i64>().map_err(|_| {
        warn!("Token is not a card symbol: '{}'", token);
        CardError::InvalidSymbol(token.to_string())
    })?;

    if !(i64::from(MIN_CARD)..=i64::from(MAX_CARD)).contains(&value) {
        warn!("Card value out of range: {}", value);
        return Err(CardError::OutOfRange(value));
    }

    Ok(value as Card)
}

/// Parse four card tokens into a hand, preserving entry order.
///
/// # Errors
///
/// Returns an error when the token count is not exactly four or when any
/// token is not a valid card.
pub fn parse_hand(tokens: &[String]) -> Result<Hand, CardError> {
    if tokens.len() != 4 {
        return Err(CardError::WrongCardCount(tokens.len()));
    }

    let mut hand: Hand = [0; 4];
    for (slot, token) in hand.iter_mut().zip(tokens) {
        *slot = parse_card_symbol(token)?;
    }
    Ok(hand)
}
