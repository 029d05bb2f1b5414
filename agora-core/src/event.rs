//! Investor-relations event records.
//!
//! Events are produced by the upstream event-management application (demo
//! data, CSV imports, external calendars) and consumed here as immutable
//! values. Dates and times stay in their wire form; the detector parses them
//! and reports anything it cannot use instead of failing the whole batch.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scheduled company event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock start, e.g. "09:30" or "9:30 AM"
    pub start_time: String,
    /// Wall-clock end on the same date
    pub end_time: String,
    /// Venue, or "Virtual" for remote events
    pub location: String,
    /// Response per user id. Any entry means the user is involved.
    #[serde(default)]
    pub rsvps: BTreeMap<String, RsvpResponse>,

    // Informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_to: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Earnings,
    Meeting,
    Conference,
    Roadshow,
    /// Any kind this crate does not know about
    #[serde(other)]
    Other,
}

/// A user's answer to an event invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Accepted,
    Declined,
    Tentative,
}

impl Event {
    /// Create an event with no schedule, location or RSVPs yet.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            kind,
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            rsvps: BTreeMap::new(),
            description: None,
            market_cap: None,
            created_by: None,
            attendees: Vec::new(),
            assigned_to: Vec::new(),
        }
    }

    pub fn scheduled(
        mut self,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        self.date = date.into();
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_rsvp(mut self, user: impl Into<String>, response: RsvpResponse) -> Self {
        self.rsvps.insert(user.into(), response);
        self
    }

    /// Whether `user` has any RSVP entry for this event, whatever the answer.
    pub fn involves(&self, user: &str) -> bool {
        self.rsvps.contains_key(user)
    }

    pub fn rsvp_for(&self, user: &str) -> Option<RsvpResponse> {
        self.rsvps.get(user).copied()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.company)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Earnings => write!(f, "earnings"),
            EventKind::Meeting => write!(f, "meeting"),
            EventKind::Conference => write!(f, "conference"),
            EventKind::Roadshow => write!(f, "roadshow"),
            EventKind::Other => write!(f, "other"),
        }
    }
}

impl fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsvpResponse::Accepted => write!(f, "accepted"),
            RsvpResponse::Declined => write!(f, "declined"),
            RsvpResponse::Tentative => write!(f, "tentative"),
        }
    }
}
