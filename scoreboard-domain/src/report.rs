use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// A player's single best score within a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub player_name: String,
    pub score: i32,
}

/// How many sessions a player logged within a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActivity {
    pub player_id: PlayerId,
    pub player_name: String,
    pub playthroughs: i32,
}

/// Lifetime improvement report for a player with at least one session.
///
/// `impact` is the best-ever correctness percentage minus the
/// percentage of the chronologically earliest session; it may be
/// negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerImpactReport {
    pub player_id: PlayerId,
    pub player_name: String,
    pub impact: Decimal,
    pub playthroughs: i32,
    pub total_time_played: Duration,
}

/// Leaderboard and activity ranking for one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub year: i32,
    pub week: u32,
    pub top_scoring_players: Vec<PlayerScore>,
    pub most_active_players: Vec<PlayerActivity>,
}
