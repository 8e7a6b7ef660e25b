// ABOUTME: FitTrack CLI - command-line surface over the client core
// ABOUTME: Session inspection, login/logout, dashboard aggregation, activity submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack
//!
//! Usage:
//! ```bash
//! # Record an externally obtained auth result
//! fittrack-cli login --token <jwt> --profile profile.json
//!
//! # Show the current session
//! fittrack-cli status
//!
//! # Fetch activities and print the aggregated dashboard
//! fittrack-cli dashboard
//!
//! # Submit a new activity
//! fittrack-cli submit --activity-type RUNNING --duration 30 --calories 300 --distance 5.2
//!
//! # Show one activity with its recommendation fields
//! fittrack-cli show <activity-id>
//!
//! # Drop the session
//! fittrack-cli logout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fittrack::client::{ActivityRepository, ApiClient};
use fittrack::config::ClientConfig;
use fittrack::logging::{self, LoggingConfig};
use fittrack::models::{ActivityDraft, ActivityType, AdditionalMetrics, UserProfile};
use fittrack::session::{CredentialStore, SessionManager};
use fittrack::stats::{DashboardStats, GoalConstants};

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack client core CLI",
    long_about = "Command-line surface over the FitTrack client core: session management, activity fetching, and dashboard aggregation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base path override
    #[arg(long, global = true)]
    api_base: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record an authentication result from the external identity provider
    Login {
        /// Bearer token issued by the identity provider
        #[arg(long)]
        token: String,

        /// Path to a JSON file with the decoded token payload
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Show the current session credential
    Status,

    /// Clear the session and the credential snapshot
    Logout,

    /// Fetch activities and print the aggregated dashboard
    Dashboard,

    /// Show one activity with its recommendation fields
    Show {
        /// Activity id
        id: String,
    },

    /// Submit a new activity
    Submit {
        /// Activity type (RUNNING, WALKING, CYCLING, ...)
        #[arg(long)]
        activity_type: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Calories burned
        #[arg(long)]
        calories: u32,

        /// Distance in kilometers
        #[arg(long)]
        distance: Option<f64>,

        /// Average speed in km/h
        #[arg(long)]
        speed: Option<f64>,

        /// Average heart rate in BPM
        #[arg(long)]
        heart_rate: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(&LoggingConfig::from_env())?;

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    let session = Arc::new(SessionManager::new(CredentialStore::new(
        config.data_dir.clone(),
    )));

    match cli.command {
        Command::Login { token, profile } => login(&session, &token, profile.as_deref()),
        Command::Status => {
            status(&session);
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("logged out");
            Ok(())
        }
        Command::Dashboard => dashboard(&ApiClient::new(&config, session)?).await,
        Command::Show { id } => show(&ApiClient::new(&config, session)?, &id).await,
        Command::Submit {
            activity_type,
            duration,
            calories,
            distance,
            speed,
            heart_rate,
        } => {
            let draft = ActivityDraft {
                activity_type: ActivityType::from(activity_type),
                duration,
                calories_burned: calories,
                additional_metrics: AdditionalMetrics {
                    distance,
                    speed,
                    heart_rate,
                },
            };
            submit(&ApiClient::new(&config, session)?, &draft).await
        }
    }
}

fn login(session: &SessionManager, token: &str, profile_path: Option<&std::path::Path>) -> Result<()> {
    let profile = match profile_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read profile file {}", path.display()))?;
            serde_json::from_str::<UserProfile>(&raw)
                .with_context(|| format!("failed to parse profile file {}", path.display()))?
        }
        None => UserProfile::default(),
    };

    session.on_auth_result(token, profile);
    status(session);
    Ok(())
}

fn status(session: &SessionManager) {
    let credential = session.current();
    if !credential.is_authenticated() {
        println!("unauthenticated - run `fittrack-cli login` with an identity-provider token");
        return;
    }
    let name = credential
        .user
        .as_ref()
        .and_then(|user| user.name.as_deref())
        .unwrap_or("<unknown>");
    let user_id = credential.user_id.as_deref().unwrap_or("<absent>");
    println!("authenticated as {name} (user id: {user_id})");
}

async fn dashboard(client: &ApiClient) -> Result<()> {
    let activities = client.fetch_activities().await?;
    let stats = DashboardStats::compute(&activities, &GoalConstants::default());
    print_stats(&stats);
    Ok(())
}

async fn show(client: &ApiClient, id: &str) -> Result<()> {
    let detail = client.fetch_activity_detail(id).await?;
    let record = &detail.record;
    println!(
        "{} - {} min, {} cal, started {}",
        record.activity_type,
        record.duration_or_zero(),
        record.calories_or_zero(),
        record.start_time.as_deref().unwrap_or("--:--"),
    );
    if let Some(recommendation) = &detail.recommendation {
        println!("\nrecommendation: {recommendation}");
    }
    print_list("improvements", &detail.improvements);
    print_list("suggestions", &detail.suggestions);
    print_list("safety measures", &detail.safety_measures);
    Ok(())
}

async fn submit(client: &ApiClient, draft: &ActivityDraft) -> Result<()> {
    let record = client.submit_activity(draft).await?;
    println!("created activity {} ({})", record.id, record.activity_type);
    Ok(())
}

fn print_stats(stats: &DashboardStats) {
    println!("activities: {}", stats.total_activities);
    println!("duration:   {} min", stats.total_duration_minutes);
    println!("calories:   {}", stats.total_calories);
    println!("distance:   {} km", stats.total_distance_km);
    println!();
    println!(
        "running {} ({}%)  walking {} ({}%)  cycling {} ({}%)",
        stats.type_breakdown.running.count,
        stats.type_breakdown.running.percentage,
        stats.type_breakdown.walking.count,
        stats.type_breakdown.walking.percentage,
        stats.type_breakdown.cycling.count,
        stats.type_breakdown.cycling.percentage,
    );
    println!();
    println!(
        "weekly goals: activities {}%  duration {}%  calories {}%  distance {}%",
        stats.progress.activities,
        stats.progress.duration,
        stats.progress.calories,
        stats.progress.distance,
    );
    if !stats.recent_activities.is_empty() {
        println!("\nrecent:");
        for record in &stats.recent_activities {
            println!(
                "  {} - {} min, {} cal, {}",
                record.activity_type,
                record.duration_or_zero(),
                record.calories_or_zero(),
                record.start_time.as_deref().unwrap_or("--:--"),
            );
        }
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{label}:");
    for item in items {
        println!("  - {item}");
    }
}
