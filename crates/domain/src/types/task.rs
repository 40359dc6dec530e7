//! Task model as delivered by the upstream project service.
//!
//! Field names mirror the JSON payload (camelCase on the wire). Date fields
//! are kept verbatim in their loosely-typed form; canonicalization into local
//! calendar dates happens in the scheduling engine, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;
use crate::utils::category::is_out_of_office_category;

/// Loosely-typed date field on a task payload.
///
/// The upstream service is inconsistent: depending on the endpoint a task
/// date arrives as a full instant (RFC 3339 with offset), a plain
/// `YYYY-MM-DD` string, or a `YYYY-MM-DDTHH:mm:ss` string without offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Native instant, serialized as RFC 3339 with offset.
    Instant(DateTime<Utc>),
    /// Raw date or date-time string without offset.
    Text(String),
}

/// Project classification used for featured-task sub-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    Commercial,
    Residential,
    /// Any value outside the two known classifications.
    #[serde(other)]
    Other,
}

impl ProjectType {
    /// Ordering rank: commercial ahead of residential, everything else last.
    /// Absent types rank with `Other`.
    pub fn rank(self) -> u8 {
        match self {
            Self::Commercial => 1,
            Self::Residential => 2,
            Self::Other => 3,
        }
    }
}

impl_domain_status_conversions!(ProjectType {
    Commercial => "commercial",
    Residential => "residential",
    Other => "other",
});

/// A work item placed on the calendar.
///
/// Opaque beyond these fields; everything else the service returns is
/// dropped at the fetch boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_out_of_office: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Task {
    /// The authoritative date field: `issued_date` wins over `created_date`.
    pub fn effective_date(&self) -> Option<&DateInput> {
        self.issued_date.as_ref().or(self.created_date.as_ref())
    }

    /// Whether this task represents a holiday.
    pub fn holiday(&self) -> bool {
        self.is_holiday.unwrap_or(false)
    }

    /// Whether this task represents out-of-office time, from the explicit
    /// flag or (when absent) the category-name heuristic.
    pub fn out_of_office(&self) -> bool {
        if let Some(explicit) = self.is_out_of_office {
            return explicit;
        }
        self.task_category_name.as_deref().map(is_out_of_office_category).unwrap_or(false)
    }
}
