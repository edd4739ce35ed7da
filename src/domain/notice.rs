use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, NoticeId};

/// A tracked notice: a document with a due date, an optional hearing date
/// and a completion status, belonging to a client.
///
/// Dates are `None` when the external API supplied no value or one that did
/// not parse; classification additionally treats epoch-era placeholders as
/// unset (see [`crate::services::categorize`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub heading: String,
    pub due_date: Option<NaiveDate>,
    pub hearing_date: Option<NaiveDate>,
    pub status: NoticeStatus,
    pub client: ClientRef,
}

/// Completion status of a notice. The single source of truth for
/// completion: bucketing never infers it from dates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NoticeStatus {
    Pending,
    Completed,
}

impl NoticeStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, NoticeStatus::Pending)
    }

    pub fn is_completed(self) -> bool {
        matches!(self, NoticeStatus::Completed)
    }
}

impl Display for NoticeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeStatus::Pending => write!(f, "Pending"),
            NoticeStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Selects which date field drives a classification pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Track {
    Due,
    Hearing,
}

impl Track {
    /// Returns the raw date carried by `notice` on this track.
    pub fn date_of(self, notice: &Notice) -> Option<NaiveDate> {
        match self {
            Track::Due => notice.due_date,
            Track::Hearing => notice.hearing_date,
        }
    }
}

/// Reference to the owning client, as embedded in notice payloads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientRef {
    pub id: ClientId,
    pub name: String,
}
