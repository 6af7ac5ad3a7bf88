//! Conversation list
//!
//! - `ConversationStore` - ordered, read-only conversation summaries with search/filter
//! - `SeedSource` - external collaborator supplying summaries and seed transcripts

mod seed;
mod store;

pub use seed::{FixtureSeeds, SeedSource};
pub use store::ConversationStore;
