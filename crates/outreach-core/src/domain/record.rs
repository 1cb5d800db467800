use crate::domain::ids::OutreachId;
use crate::domain::kinds::{OutreachStatus, OutreachType, Platform};
use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRecord {
    pub id: OutreachId,
    pub client_name: String,
    pub platform: Platform,
    pub outreach_type: OutreachType,
    pub status: OutreachStatus,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OutreachRecord {
    /// Brings the record to the form it has after a save and reload: trimmed
    /// client name, blank notes dropped.
    pub fn normalized(mut self) -> Self {
        self.client_name = self.client_name.trim().to_string();
        self.notes = self.notes.and_then(normalize_optional_text);
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::EmptyId);
        }
        if self.client_name.trim().is_empty() {
            return Err(CoreError::EmptyClientName);
        }
        Ok(())
    }
}

/// Input for a new record: everything except the store-assigned id and
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachNew {
    pub client_name: String,
    pub platform: Platform,
    pub outreach_type: OutreachType,
    pub status: OutreachStatus,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl OutreachNew {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.client_name.trim().is_empty() {
            return Err(CoreError::EmptyClientName);
        }
        Ok(())
    }

    pub fn into_record(self, id: OutreachId, created_at: DateTime<Utc>) -> OutreachRecord {
        OutreachRecord {
            id,
            client_name: self.client_name,
            platform: self.platform,
            outreach_type: self.outreach_type,
            status: self.status,
            follow_up_date: self.follow_up_date,
            notes: self.notes,
            created_at,
        }
        .normalized()
    }
}

pub fn normalize_optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// Blank form fields were stored as "" rather than omitted.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| de::Error::custom(format!("invalid follow-up date: {trimmed}")))
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(normalize_optional_text))
}
