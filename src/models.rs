//! Data models for flashcards

use serde::{Deserialize, Serialize};

use crate::collection::CollectionError;

/// Lowest mastery score a card can hold
pub const MASTERY_MIN: u8 = 0;

/// Highest mastery score a card can hold
pub const MASTERY_MAX: u8 = 10;

fn default_understood() -> u8 {
    5
}

/// A single question/answer fact with a bounded mastery score
///
/// `understood` stays within `MASTERY_MIN..=MASTERY_MAX`; the bump
/// operations clamp at the bounds instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    question: String,
    answer: String,
    understood: u8,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            understood: default_understood(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Current mastery score; lower means the card needs more practice
    pub fn understood(&self) -> u8 {
        self.understood
    }

    /// Raise mastery by one, clamped at `MASTERY_MAX`
    pub fn increase_mastery(&mut self) {
        if self.understood < MASTERY_MAX {
            self.understood += 1;
        }
    }

    /// Lower mastery by one, clamped at `MASTERY_MIN`
    pub fn decrease_mastery(&mut self) {
        if self.understood > MASTERY_MIN {
            self.understood -= 1;
        }
    }
}

/// Wire shape of one card inside a collection file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_understood")]
    pub understood: u8,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            question: card.question.clone(),
            answer: card.answer.clone(),
            understood: card.understood,
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CollectionError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        if record.understood > MASTERY_MAX {
            return Err(CollectionError::MalformedRecord(format!(
                "understood {} is outside {}..={} for card {:?}",
                record.understood, MASTERY_MIN, MASTERY_MAX, record.question
            )));
        }

        Ok(Self {
            question: record.question,
            answer: record.answer,
            understood: record.understood,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_has_default_mastery() {
        let card = Card::new("What is 2 + 2?", "4");
        assert_eq!(card.understood(), 5);
        assert_eq!(card.question(), "What is 2 + 2?");
        assert_eq!(card.answer(), "4");
    }

    #[test]
    fn test_mastery_clamps_at_max() {
        let mut card = Card::new("q", "a");
        for _ in 0..20 {
            card.increase_mastery();
        }
        assert_eq!(card.understood(), MASTERY_MAX);

        card.increase_mastery();
        assert_eq!(card.understood(), MASTERY_MAX);
    }

    #[test]
    fn test_mastery_clamps_at_min() {
        let mut card = Card::new("q", "a");
        for _ in 0..20 {
            card.decrease_mastery();
        }
        assert_eq!(card.understood(), MASTERY_MIN);

        card.decrease_mastery();
        assert_eq!(card.understood(), MASTERY_MIN);
    }

    #[test]
    fn test_mastery_stays_in_bounds_under_mixed_bumps() {
        let mut card = Card::new("q", "a");
        for i in 0..100 {
            if i % 3 == 0 {
                card.decrease_mastery();
            } else {
                card.increase_mastery();
            }
            assert!(card.understood() <= MASTERY_MAX);
        }
    }

    #[test]
    fn test_record_understood_defaults_to_five() {
        let record: CardRecord =
            serde_json::from_str(r#"{"question": "Q", "answer": "A"}"#).unwrap();
        assert_eq!(record.understood, 5);

        let card = Card::try_from(record).unwrap();
        assert_eq!(card.understood(), 5);
    }

    #[test]
    fn test_record_rejects_out_of_range_mastery() {
        let record = CardRecord {
            question: "Q".to_string(),
            answer: "A".to_string(),
            understood: 11,
        };
        let result = Card::try_from(record);
        assert!(matches!(result, Err(CollectionError::MalformedRecord(_))));
    }
}
