//! The [`Activity`] record.
//!
//! An activity's name is its catalog key and is not stored in the record.
//! The serialized form is the wire shape of `GET /activities` entries.

use serde::{Deserialize, Serialize};

/// One extracurricular offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description.
    pub description: String,
    /// Free-text schedule, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    /// Capacity of the activity.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Creates an activity with the given participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Activity {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `email` is in the participant list.
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Returns `true` if no further participant fits under `max_participants`.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}
