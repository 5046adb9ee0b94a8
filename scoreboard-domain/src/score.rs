use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// One play session to be recorded for a player. Sessions are
/// append-only; once inserted they are never updated or deleted.
///
/// `play_start` is carried as UTC so that window comparisons are
/// timezone-free; callers convert offsets before constructing this.
/// `percent_correct` must lie in [0, 100], checked at the service
/// boundary. `score` and `time_spent` are intentionally unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScore {
    pub player_id: PlayerId,
    pub play_start: DateTime<Utc>,
    pub time_spent: Duration,
    pub score: i32,
    pub percent_correct: Decimal,
}
