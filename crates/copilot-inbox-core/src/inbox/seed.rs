//! Seed data for conversations and their initial transcripts

use crate::types::{ConversationId, ConversationSummary, NewMessage, PresenceStatus};

/// Supplies the initial conversation list and each thread's initial transcript
pub trait SeedSource: Send + Sync {
    /// Conversation summaries in display order
    fn conversations(&self) -> Vec<ConversationSummary>;

    /// Initial transcript for a conversation
    fn transcript(&self, conversation_id: ConversationId) -> Vec<NewMessage>;
}

/// Built-in demo fixtures
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSeeds;

impl SeedSource for FixtureSeeds {
    fn conversations(&self) -> Vec<ConversationSummary> {
        vec![
            ConversationSummary::new(1, "Elena Rodriguez", "TechSolutions Inc.")
                .with_last_message("Thanks for the update on the shipment tracking!", "10:32 AM")
                .with_unread(2)
                .with_priority(true)
                .with_tags(["Support", "Urgent"])
                .with_status(PresenceStatus::Online),
            ConversationSummary::new(2, "Marcus Chen", "Innovate Hub")
                .with_last_message("Can you help with this bug? It crashes the app.", "9:15 AM")
                .with_tags(["Bug Report", "High"])
                .with_status(PresenceStatus::Offline),
            ConversationSummary::new(3, "Sophie Dubois", "CreativeMinds LLC")
                .with_last_message("Great, let's proceed with the Enterprise plan.", "Yesterday")
                .with_tags(["Sales", "New Lead"])
                .with_status(PresenceStatus::Online),
            ConversationSummary::new(4, "Liam O'Connell", "Global Exports")
                .with_last_message(
                    "Meeting reminder for tomorrow at 2 PM to discuss Q3.",
                    "2 days ago",
                )
                .with_unread(1)
                .with_tags(["Follow Up"])
                .with_status(PresenceStatus::Away),
            ConversationSummary::new(5, "Aisha Khan", "BrightFuture Edu")
                .with_last_message("Inquiring about course details for AI.", "3 days ago")
                .with_tags(["Inquiry"])
                .with_status(PresenceStatus::Online),
        ]
    }

    // Every conversation opens on the same demo transcript.
    fn transcript(&self, _conversation_id: ConversationId) -> Vec<NewMessage> {
        vec![
            NewMessage::user(
                "Hello! I'm having an issue with my recent order. The product arrived damaged \
                 and I'd like to request a replacement or refund.",
            )
            .at("10:30 AM"),
            NewMessage::agent(
                "Hi Elena, I'm very sorry to hear about the damaged product. I can definitely \
                 help you with that. Could you please provide your order number and perhaps a \
                 photo of the damage?",
            )
            .at("10:31 AM"),
            NewMessage::user("My order number is #12345XYZ. I'll send a photo shortly.")
                .at("10:31 AM"),
        ]
    }
}
