// ABOUTME: Activity models: record, type enum, optional metrics, submission payloads
// ABOUTME: Wire format matches the activity service (camelCase, SCREAMING_SNAKE types)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of fitness activity.
///
/// The server enumerates `RUNNING`, `WALKING`, and `CYCLING` today, but the
/// set is open-ended: unknown values deserialize into [`ActivityType::Other`]
/// and are tolerated everywhere (counted in totals, excluded from the
/// per-type breakdown) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// Running session
    Running,
    /// Walking session
    Walking,
    /// Cycling session
    Cycling,
    /// Any server-sent type this client does not know yet
    Other(String),
}

impl ActivityType {
    /// Wire representation of this type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "RUNNING",
            Self::Walking => "WALKING",
            Self::Cycling => "CYCLING",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "RUNNING" => Self::Running,
            "WALKING" => Self::Walking,
            "CYCLING" => Self::Cycling,
            _ => Self::Other(value),
        }
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-activity metrics recorded alongside duration and calories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalMetrics {
    /// Distance covered in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Average speed in km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Average heart rate in BPM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
}

/// One logged fitness session as returned by the activity API.
///
/// Records are created server-side and only read here; there is no update or
/// delete operation in this client. Absent numeric fields are treated as zero
/// by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Server-assigned activity identifier
    pub id: String,
    /// Owner of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Kind of activity
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Calories burned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    /// Local start time as "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Optional distance/speed/heart-rate metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_metrics: Option<AdditionalMetrics>,
    /// Server-side creation timestamp (no zone on the wire)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// Server-side update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl ActivityRecord {
    /// Duration in minutes, absent treated as zero
    #[must_use]
    pub fn duration_or_zero(&self) -> u64 {
        u64::from(self.duration.unwrap_or(0))
    }

    /// Calories burned, absent treated as zero
    #[must_use]
    pub fn calories_or_zero(&self) -> u64 {
        u64::from(self.calories_burned.unwrap_or(0))
    }

    /// Distance in kilometers, absent treated as zero
    #[must_use]
    pub fn distance_or_zero(&self) -> f64 {
        self.additional_metrics
            .as_ref()
            .and_then(|metrics| metrics.distance)
            .unwrap_or(0.0)
    }
}

/// Caller-validated input for creating a new activity.
///
/// Duration and calories are required before invocation; the API client fills
/// in the session user id and the local start time at submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    /// Kind of activity
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories_burned: u32,
    /// Optional metrics; unparseable entries default to zero on the wire
    pub additional_metrics: AdditionalMetrics,
}

/// Metrics as sent on the submission payload: always present, zero-defaulted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetrics {
    /// Distance in kilometers
    pub distance: f64,
    /// Average speed in km/h
    pub speed: f64,
    /// Average heart rate in BPM
    pub heart_rate: u32,
}

impl From<&AdditionalMetrics> for SubmissionMetrics {
    fn from(metrics: &AdditionalMetrics) -> Self {
        Self {
            distance: metrics.distance.unwrap_or(0.0),
            speed: metrics.speed.unwrap_or(0.0),
            heart_rate: metrics.heart_rate.unwrap_or(0),
        }
    }
}

/// Wire payload for `POST /activities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySubmission {
    /// Numeric user id from the session credential
    pub user_id: i64,
    /// Kind of activity
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories_burned: u32,
    /// Client-local "HH:MM" at the moment of submission
    pub start_time: String,
    /// Zero-defaulted metrics
    pub additional_metrics: SubmissionMetrics,
}

/// Activity record enriched with derived recommendation fields, as served by
/// the recommendations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetail {
    /// The underlying activity record
    #[serde(flatten)]
    pub record: ActivityRecord,
    /// Overall recommendation text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Suggested improvements
    #[serde(default)]
    pub improvements: Vec<String>,
    /// Training suggestions
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Safety measures to observe
    #[serde(default)]
    pub safety_measures: Vec<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn unknown_activity_type_is_tolerated() {
        let record: ActivityRecord = serde_json::from_str(
            r#"{"id":"a1","type":"SWIMMING","duration":20,"caloriesBurned":200}"#,
        )
        .unwrap();
        assert_eq!(
            record.activity_type,
            ActivityType::Other("SWIMMING".to_owned())
        );
        // Unknown types survive a serialize round trip verbatim.
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "SWIMMING");
    }

    #[test]
    fn record_uses_camel_case_wire_names() {
        let record: ActivityRecord = serde_json::from_str(
            r#"{
                "id": "a2",
                "userId": "17",
                "type": "RUNNING",
                "duration": 30,
                "caloriesBurned": 300,
                "startTime": "07:45",
                "additionalMetrics": {"distance": 5.2, "speed": 10.4, "heartRate": 151},
                "createdAt": "2025-08-20T07:45:00"
            }"#,
        )
        .unwrap();
        assert_eq!(record.activity_type, ActivityType::Running);
        assert_eq!(record.calories_burned, Some(300));
        assert_eq!(record.additional_metrics.unwrap().heart_rate, Some(151));
        assert!(record.created_at.is_some());
    }

    #[test]
    fn absent_numeric_fields_read_as_zero() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"id":"a3","type":"WALKING"}"#).unwrap();
        assert_eq!(record.duration_or_zero(), 0);
        assert_eq!(record.calories_or_zero(), 0);
        assert!((record.distance_or_zero() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn detail_defaults_empty_recommendation_fields() {
        let detail: ActivityDetail =
            serde_json::from_str(r#"{"id":"a4","type":"CYCLING","duration":60}"#).unwrap();
        assert!(detail.recommendation.is_none());
        assert!(detail.improvements.is_empty());
        assert!(detail.safety_measures.is_empty());
    }
}
