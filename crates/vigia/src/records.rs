//! Core record types for vigia.
//!
//! This module defines the fundamental data structures for the inspection
//! dashboard domain: personnel, equipment inspections, and scheduled safety
//! talks. Records are read-only inputs to the roster and scope utilities;
//! nothing in this crate mutates a caller-supplied record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for an equipment inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    /// Equipment passed inspection and remains in service.
    Approved,
    /// Equipment passed with observations that need follow-up.
    Observed,
    /// Equipment failed inspection and was taken out of service.
    Rejected,
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Observed => write!(f, "observed"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A personnel record from the roster.
///
/// `position` is a free-form job title; the roster module infers an
/// organizational rank from it. `station` is the site the employee is
/// assigned to, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's full name.
    pub full_name: String,

    /// Free-form job title, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Station the employee is assigned to, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

impl Employee {
    /// Create a new employee record with no station assignment.
    #[must_use]
    pub fn new(full_name: impl Into<String>, position: Option<&str>) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.map(String::from),
            station: None,
        }
    }

    /// Check whether this record carries a non-blank position.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.position
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }
}

/// A recorded equipment inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    /// Identifier assigned by the upstream system, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Tag or description of the inspected equipment.
    pub equipment: String,

    /// Station where the inspection took place, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,

    /// Name of the inspector, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspector: Option<String>,

    /// Outcome of the inspection.
    pub status: InspectionStatus,

    /// When the inspection took place.
    pub inspected_at: DateTime<Utc>,
}

impl Inspection {
    /// Create a new inspection record stamped with the current time.
    #[must_use]
    pub fn new(
        equipment: impl Into<String>,
        station: Option<&str>,
        status: InspectionStatus,
    ) -> Self {
        Self {
            id: None,
            equipment: equipment.into(),
            station: station.map(String::from),
            inspector: None,
            status,
            inspected_at: Utc::now(),
        }
    }
}

/// A scheduled safety talk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyTalk {
    /// Topic of the talk.
    pub topic: String,

    /// Station the talk is scheduled for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,

    /// When the talk is scheduled to take place.
    pub scheduled_for: DateTime<Utc>,
}

impl SafetyTalk {
    /// Create a new safety talk record.
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        station: Option<&str>,
        scheduled_for: DateTime<Utc>,
    ) -> Self {
        Self {
            topic: topic.into(),
            station: station.map(String::from),
            scheduled_for,
        }
    }
}

/// Trait for records that belong to a station.
///
/// Implementors expose their station so the scope filter can restrict
/// visibility without knowing the concrete record type.
pub trait Stationed {
    /// The station this record belongs to, if recorded.
    fn station(&self) -> Option<&str>;
}

impl Stationed for Inspection {
    fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }
}

impl Stationed for SafetyTalk {
    fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }
}

impl Stationed for Employee {
    fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }
}
