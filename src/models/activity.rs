use indexmap::IndexMap;
use serde::Serialize;

// Keyed by display name; listing order follows the seed.
pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Student emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
