//! Conversation summary and inbox filter types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub u64);

impl ConversationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ConversationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer presence shown next to the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    Online,
    Away,
    Offline,
}

impl Default for PresenceStatus {
    fn default() -> Self {
        Self::Offline
    }
}

/// One row of the conversation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub name: String,
    pub organization: String,
    pub last_message: String,
    pub unread: u32,
    pub priority: bool,
    pub tags: Vec<String>,
    pub status: PresenceStatus,
    /// Display string ("10:32 AM", "Yesterday", ...)
    pub last_activity: String,
}

impl ConversationSummary {
    pub fn new(
        id: impl Into<ConversationId>,
        name: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organization: organization.into(),
            last_message: String::new(),
            unread: 0,
            priority: false,
            tags: Vec::new(),
            status: PresenceStatus::default(),
            last_activity: String::new(),
        }
    }

    pub fn with_last_message(mut self, message: impl Into<String>, at: impl Into<String>) -> Self {
        self.last_message = message.into();
        self.last_activity = at.into();
        self
    }

    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    /// Add category tags; duplicates are dropped
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn with_status(mut self, status: PresenceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match on name, organization and last message
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.organization.to_lowercase().contains(&term)
            || self.last_message.to_lowercase().contains(&term)
    }
}

/// Category filters offered by the inbox dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InboxFilter {
    AllInboxes,
    Unread,
    PrioritySupport,
    SalesLeads,
    BugReports,
}

impl Default for InboxFilter {
    fn default() -> Self {
        Self::AllInboxes
    }
}

impl InboxFilter {
    pub const ALL: [InboxFilter; 5] = [
        Self::AllInboxes,
        Self::Unread,
        Self::PrioritySupport,
        Self::SalesLeads,
        Self::BugReports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AllInboxes => "All Inboxes",
            Self::Unread => "Unread",
            Self::PrioritySupport => "Priority Support",
            Self::SalesLeads => "Sales Leads",
            Self::BugReports => "Bug Reports",
        }
    }

    pub fn matches(&self, conversation: &ConversationSummary) -> bool {
        match self {
            Self::AllInboxes => true,
            Self::Unread => conversation.unread > 0,
            Self::PrioritySupport => conversation.priority && conversation.has_tag("Support"),
            Self::SalesLeads => conversation.has_tag("Sales"),
            Self::BugReports => conversation.has_tag("Bug Report"),
        }
    }
}

impl fmt::Display for InboxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InboxFilter {
    type Err = String;

    /// Accepts the display label or a compact form ("all", "unread", "priority", "sales", "bugs")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "all" | "allinboxes" => Ok(Self::AllInboxes),
            "unread" => Ok(Self::Unread),
            "priority" | "prioritysupport" => Ok(Self::PrioritySupport),
            "sales" | "salesleads" => Ok(Self::SalesLeads),
            "bugs" | "bugreports" => Ok(Self::BugReports),
            _ => Err(format!("unknown inbox filter: {}", s)),
        }
    }
}
