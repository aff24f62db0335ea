//! Weighted next-card selection
//!
//! Every draw recomputes weights from the current mastery scores: a card
//! with score `u` gets weight `(max_score - u) + 1`, so the least
//! understood card is favored while fully mastered cards keep a nonzero
//! chance. Draws are with replacement; earlier draws influence later ones
//! only through mastery mutations made in between.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::models::Card;

/// Pick the index of one card with probability proportional to its
/// inverse-mastery weight. Returns `None` only for an empty slice.
pub fn pick_weighted<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Option<usize> {
    let max_understood = cards.iter().map(Card::understood).max()?;
    let weights = cards
        .iter()
        .map(|card| u32::from(max_understood - card.understood()) + 1);

    // Every weight is >= 1, so the distribution is always valid here
    let dist = WeightedIndex::new(weights).ok()?;
    Some(dist.sample(rng))
}
