use std::fmt;

use chrono::{DateTime, Utc};
use database_model::system::request;
use serde::{Deserialize, Serialize};

use crate::model::vo::RequestDraft;

/// # Request record
///
/// A tracked work item. Everything except `status` and the two service
/// timestamps is fixed once the record is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Storage assigned id, `0` until inserted
    pub id: i32,
    /// External unique code, `EMPnnnn` when generated
    pub employee_id: String,
    pub created_at: DateTime<Utc>,
    pub requester: String,
    pub requester_area: String,
    pub operation_type: String,
    pub item_code: String,
    pub location: String,
    pub note: String,
    /// Free-form duration given by the requester
    pub service_duration: Option<String>,
    pub status: RequestStatus,
    /// Last time the record entered `in-progress`
    pub service_started_at: Option<DateTime<Utc>>,
    /// Last time the record entered `done`
    pub service_completed_at: Option<DateTime<Utc>>,
}

impl RequestRecord {
    /// Builds a not yet persisted `pending` record from a draft.
    ///
    /// Absent required fields become empty strings.
    pub fn from_draft(draft: RequestDraft, employee_id: String, now: DateTime<Utc>) -> Self {
        let RequestDraft {
            employee_id: _,
            requester,
            requester_area,
            operation_type,
            item_code,
            location,
            note,
            service_duration,
        } = draft;

        Self {
            id: 0,
            employee_id,
            created_at: now,
            requester: requester.unwrap_or_default(),
            requester_area: requester_area.unwrap_or_default(),
            operation_type: operation_type.unwrap_or_default(),
            item_code: item_code.unwrap_or_default(),
            location: location.unwrap_or_default(),
            note: note.unwrap_or_default(),
            service_duration,
            status: RequestStatus::Pending,
            service_started_at: None,
            service_completed_at: None,
        }
    }

    /// Moves the record to `status`, stamping the matching service time.
    ///
    /// Entering `in-progress` or `done` again overwrites the earlier stamp.
    pub fn apply_status(&mut self, status: RequestStatus, now: DateTime<Utc>) {
        match status {
            RequestStatus::InProgress => self.service_started_at = Some(now),
            RequestStatus::Done => self.service_completed_at = Some(now),
            RequestStatus::Pending | RequestStatus::Unrecognized(_) => {}
        }
        self.status = status;
    }
}

/// Lifecycle marker of a request record.
///
/// Any other string is kept as `Unrecognized` and stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Done,
    Unrecognized(String),
}

impl RequestStatus {
    pub const PENDING: &'static str = "pending";
    pub const IN_PROGRESS: &'static str = "in-progress";
    pub const DONE: &'static str = "done";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => Self::PENDING,
            Self::InProgress => Self::IN_PROGRESS,
            Self::Done => Self::DONE,
            Self::Unrecognized(s) => s,
        }
    }

    /// Position in `pending → in-progress → done`, `None` for unrecognized values.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::InProgress => Some(1),
            Self::Done => Some(2),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.rank().is_some()
    }
}

impl From<&str> for RequestStatus {
    fn from(s: &str) -> Self {
        match s {
            Self::PENDING => Self::Pending,
            Self::IN_PROGRESS => Self::InProgress,
            Self::DONE => Self::Done,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::PENDING => Self::Pending,
            Self::IN_PROGRESS => Self::InProgress,
            Self::DONE => Self::Done,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Unrecognized(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<request::Model> for RequestRecord {
    fn from(model: request::Model) -> Self {
        let request::Model {
            id,
            employee_id,
            created_at,
            requester,
            requester_area,
            operation_type,
            item_code,
            location,
            note,
            service_duration,
            status,
            service_started_at,
            service_completed_at,
        } = model;

        Self {
            id,
            employee_id,
            created_at,
            requester,
            requester_area,
            operation_type,
            item_code,
            location,
            note,
            service_duration,
            status: status.into(),
            service_started_at,
            service_completed_at,
        }
    }
}

impl From<RequestRecord> for request::Model {
    fn from(entity: RequestRecord) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            created_at: entity.created_at,
            requester: entity.requester,
            requester_area: entity.requester_area,
            operation_type: entity.operation_type,
            item_code: entity.item_code,
            location: entity.location,
            note: entity.note,
            service_duration: entity.service_duration,
            status: entity.status.into(),
            service_started_at: entity.service_started_at,
            service_completed_at: entity.service_completed_at,
        }
    }
}
