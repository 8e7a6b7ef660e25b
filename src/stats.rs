// ABOUTME: Dashboard aggregation engine: totals, type breakdown, goal progress
// ABOUTME: Pure recomputation over an activity slice; raises no errors by design
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Aggregation engine.
//!
//! [`DashboardStats::compute`] is a pure function of the input records and the
//! fixed goal constants: no hidden state, fully recomputed on every input
//! change, never incrementally patched. It is total over any well-typed input
//! including the empty slice.

use serde::Serialize;

use crate::constants::goals;
use crate::models::{ActivityRecord, ActivityType};

/// How many activities the recent-activity view shows
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Fixed weekly goal targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalConstants {
    /// Weekly activity-count goal
    pub weekly_activities: u32,
    /// Weekly duration goal in minutes
    pub weekly_duration_minutes: u32,
    /// Weekly calorie-burn goal
    pub weekly_calories: u32,
    /// Weekly distance goal in kilometers
    pub weekly_distance_km: f64,
}

impl Default for GoalConstants {
    fn default() -> Self {
        Self {
            weekly_activities: goals::WEEKLY_ACTIVITIES,
            weekly_duration_minutes: goals::WEEKLY_DURATION_MINUTES,
            weekly_calories: goals::WEEKLY_CALORIES,
            weekly_distance_km: goals::WEEKLY_DISTANCE_KM,
        }
    }
}

/// Count and share of one activity type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// Number of records of this type
    pub count: usize,
    /// Share of all records, `round(count / total * 100)`, zero when empty
    pub percentage: u8,
}

/// Per-type breakdown over the known activity types.
///
/// Unknown server-sent types are counted in the totals but have no breakdown
/// slot. Percentages are computed independently per type and are not
/// normalized to sum to 100; rounding drift is accepted, not corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeBreakdown {
    /// Running share
    pub running: TypeCount,
    /// Walking share
    pub walking: TypeCount,
    /// Cycling share
    pub cycling: TypeCount,
}

/// Weekly goal progress per metric, each clamped to `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    /// Activity-count progress
    pub activities: u8,
    /// Duration progress
    pub duration: u8,
    /// Calorie progress
    pub calories: u8,
    /// Distance progress
    pub distance: u8,
}

/// Derived statistics the dashboard displays. Never persisted; exists only as
/// the output of [`DashboardStats::compute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Number of input records
    pub total_activities: usize,
    /// Summed duration in minutes, absent fields counted as zero
    pub total_duration_minutes: u64,
    /// Summed calories, absent fields counted as zero
    pub total_calories: u64,
    /// Summed distance in kilometers, rounded to one decimal for display
    pub total_distance_km: f64,
    /// Per-type counts and shares
    pub type_breakdown: TypeBreakdown,
    /// Progress against the weekly goals
    pub progress: GoalProgress,
    /// First [`RECENT_ACTIVITY_LIMIT`] records in the caller's order.
    ///
    /// The engine performs no sorting; the repository is expected to return
    /// records server-ordered, typically newest first.
    pub recent_activities: Vec<ActivityRecord>,
}

impl DashboardStats {
    /// Aggregate `activities` against `goals`.
    #[must_use]
    pub fn compute(activities: &[ActivityRecord], goals: &GoalConstants) -> Self {
        let total_activities = activities.len();
        let total_duration_minutes: u64 = activities.iter().map(ActivityRecord::duration_or_zero).sum();
        let total_calories: u64 = activities.iter().map(ActivityRecord::calories_or_zero).sum();
        let raw_distance_km: f64 = activities.iter().map(ActivityRecord::distance_or_zero).sum();

        let count_of = |wanted: &ActivityType| {
            activities
                .iter()
                .filter(|record| record.activity_type == *wanted)
                .count()
        };

        let type_breakdown = TypeBreakdown {
            running: type_count(count_of(&ActivityType::Running), total_activities),
            walking: type_count(count_of(&ActivityType::Walking), total_activities),
            cycling: type_count(count_of(&ActivityType::Cycling), total_activities),
        };

        let progress = GoalProgress {
            activities: progress_toward(total_activities as f64, f64::from(goals.weekly_activities)),
            duration: progress_toward(
                total_duration_minutes as f64,
                f64::from(goals.weekly_duration_minutes),
            ),
            calories: progress_toward(total_calories as f64, f64::from(goals.weekly_calories)),
            distance: progress_toward(raw_distance_km, goals.weekly_distance_km),
        };

        Self {
            total_activities,
            total_duration_minutes,
            total_calories,
            total_distance_km: (raw_distance_km * 10.0).round() / 10.0,
            type_breakdown,
            progress,
            recent_activities: activities
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

fn type_count(count: usize, total: usize) -> TypeCount {
    let percentage = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u8
    };
    TypeCount { count, percentage }
}

/// `min(round(total / goal * 100), 100)`; never negative since totals are
/// non-negative.
fn progress_toward(total: f64, goal: f64) -> u8 {
    ((total / goal) * 100.0).round().min(100.0) as u8
}
