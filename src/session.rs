//! Quiz session flow: show a card, record the outcome, draw the next

use crate::collection::{Collection, CollectionError};
use crate::models::Card;

/// Tracks which card a quiz is currently showing.
///
/// The session holds only an index into the collection, never a card
/// reference, so mutation and removal ordering stay unambiguous: every
/// operation re-resolves the index against the collection it is given.
#[derive(Debug)]
pub struct QuizSession {
    current: usize,
}

impl QuizSession {
    /// Start a session by drawing the first card
    pub fn start(collection: &Collection) -> Result<Self, CollectionError> {
        Ok(Self {
            current: collection.select_next()?,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_card<'a>(&self, collection: &'a Collection) -> Option<&'a Card> {
        collection.card(self.current)
    }

    /// The learner got the card right: raise its mastery, then draw the next
    pub fn mark_understood(&mut self, collection: &mut Collection) -> Result<(), CollectionError> {
        self.record(collection, Card::increase_mastery)
    }

    /// The learner got the card wrong: lower its mastery, then draw the next
    pub fn mark_not_understood(
        &mut self,
        collection: &mut Collection,
    ) -> Result<(), CollectionError> {
        self.record(collection, Card::decrease_mastery)
    }

    fn record(
        &mut self,
        collection: &mut Collection,
        adjust: fn(&mut Card),
    ) -> Result<(), CollectionError> {
        if let Some(card) = collection.card_mut(self.current) {
            adjust(card);
        }
        self.current = collection.select_next()?;
        Ok(())
    }
}
