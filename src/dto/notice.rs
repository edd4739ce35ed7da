//! Wire-format DTOs matching the external API's notice payloads.
//!
//! Identifiers are validated on conversion; dates are parsed leniently. A
//! malformed date never fails the conversion, it simply becomes `None` so
//! that classification excludes it (the API is known to serialize unset
//! dates as empty or epoch-era strings).

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::notice::{ClientRef, Notice, NoticeStatus};
use crate::domain::types::{ClientId, NoticeId, TypeConstraintError};

/// Notice record as served by the external API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NoticeDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub heading: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(rename = "hearingDate", default)]
    pub hearing_date: Option<String>,
    pub status: NoticeStatus,
    pub client: ClientRefDto,
}

/// Embedded client reference as served by the external API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientRefDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Parses a wire date, accepting RFC 3339 date-times and bare
/// `YYYY-MM-DD` strings. Returns `None` for anything else.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

impl TryFrom<NoticeDto> for Notice {
    type Error = TypeConstraintError;

    fn try_from(dto: NoticeDto) -> Result<Self, Self::Error> {
        Ok(Notice {
            id: NoticeId::new(dto.id)?,
            heading: dto.heading,
            due_date: dto.due_date.as_deref().and_then(parse_wire_date),
            hearing_date: dto.hearing_date.as_deref().and_then(parse_wire_date),
            status: dto.status,
            client: ClientRef {
                id: ClientId::new(dto.client.id)?,
                name: dto.client.name,
            },
        })
    }
}
