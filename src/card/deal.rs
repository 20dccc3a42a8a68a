use log::debug;
use rand::Rng;

use crate::card::symbol::{Hand, MAX_CARD, MIN_CARD};

/// Draw four cards from the given source of randomness.
///
/// Values are drawn independently, as from an infinite deck. The generator
/// is passed in by the caller, so a seeded source yields reproducible hands.
pub fn draw_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let mut hand: Hand = [0; 4];
    for slot in &mut hand {
        *slot = rng.gen_range(MIN_CARD..=MAX_CARD);
    }
    debug!("Drew hand {:?}", hand);
    hand
}
