//! An ordered collection of cards: CRUD, weighted selection, and the
//! record view used by persistence

use thiserror::Error;

use crate::models::{Card, CardRecord};
use crate::selection;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("collection has no cards")]
    EmptyCollection,

    #[error("card not found in collection")]
    CardNotFound,

    #[error("malformed card record: {0}")]
    MalformedRecord(String),
}

/// An ordered group of cards; the unit of persistence.
///
/// Insertion order is display order. The collection carries no name of its
/// own; names live in the store's key space, derived from file stems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    cards: Vec<Card>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from persisted records, validating each one
    pub fn from_records<I>(records: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = CardRecord>,
    {
        let cards = records
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Lazy view of the cards as wire records, in display order.
    /// Restartable: call again for a fresh pass over the current state.
    pub fn records(&self) -> impl Iterator<Item = CardRecord> + '_ {
        self.cards.iter().map(CardRecord::from)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Mutable access by index. Safe to hand out: `Card`'s own API keeps
    /// the mastery score in bounds.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Append a new card with the default mastery score
    pub fn add_card(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.cards.push(Card::new(question, answer));
    }

    /// Remove the first card structurally equal to `card`.
    /// The sequence is untouched when no match is found.
    pub fn remove_card(&mut self, card: &Card) -> Result<Card, CollectionError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(CollectionError::CardNotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Remove the card at `index`
    pub fn remove_card_at(&mut self, index: usize) -> Result<Card, CollectionError> {
        if index >= self.cards.len() {
            return Err(CollectionError::CardNotFound);
        }
        Ok(self.cards.remove(index))
    }

    /// Draw the index of the next quiz card, biased toward low mastery.
    ///
    /// Weights are recomputed from the current mastery scores on every
    /// call and the draw is with replacement, so consecutive calls can
    /// return the same card.
    pub fn select_next(&self) -> Result<usize, CollectionError> {
        self.select_next_with(&mut rand::thread_rng())
    }

    /// Same draw as [`Collection::select_next`], with a caller-supplied RNG
    pub fn select_next_with<R: rand::Rng>(&self, rng: &mut R) -> Result<usize, CollectionError> {
        selection::pick_weighted(&self.cards, rng).ok_or(CollectionError::EmptyCollection)
    }

    /// Convenience wrapper returning the drawn card itself
    pub fn select_next_card(&self) -> Result<&Card, CollectionError> {
        let index = self.select_next()?;
        Ok(&self.cards[index])
    }
}
