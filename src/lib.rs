//! Flashcard study core
//!
//! This crate provides:
//! - Card and collection data model with bounded mastery scores
//! - Weighted next-card selection favoring less-understood cards
//! - Quiz session flow (mark understood / not understood, draw next)
//! - JSON persistence, one file per collection in a configurable directory
//!
//! Presentation (windows, dialogs, input handling) lives outside this
//! crate and drives it through the types re-exported here.

pub mod collection;
pub mod models;
pub mod selection;
pub mod session;
pub mod store;

pub use collection::{Collection, CollectionError};
pub use models::{Card, CardRecord, MASTERY_MAX, MASTERY_MIN};
pub use session::QuizSession;
pub use store::{CollectionStore, StoreError};
