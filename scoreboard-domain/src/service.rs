use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::{
    ServiceResult,
    player::{Player, PlayerId},
    report::{PlayerActivity, PlayerImpactReport, PlayerScore},
    score::NewScore,
};

/// The data-access and reporting service. Implementations hold no
/// mutable in-process state, so the trait is safe for unbounded
/// concurrent invocation. Every operation executes exactly one
/// statement or query; a triggered token aborts the in-flight store
/// call and resolves the operation with [`ServiceError::Cancelled`].
///
/// [`ServiceError::Cancelled`]: crate::ServiceError::Cancelled
#[async_trait::async_trait]
pub trait ScoreService: Send + Sync {
    /// Registers a player. An empty (after trimming) name is rejected
    /// with `BadRequest` before any I/O; a duplicate id yields
    /// `Conflict`. On success the returned [`Player`] echoes the
    /// caller-supplied id and name rather than re-reading the row.
    async fn insert_player(
        &self,
        player_id: PlayerId,
        name: &str,
        cancel: &CancellationToken,
    ) -> ServiceResult<Player>;

    /// Records one play session. A correctness percentage outside
    /// [0, 100] is rejected with `BadRequest` before any I/O; an
    /// unknown `player_id` yields `NotFound`.
    async fn insert_score(&self, score: &NewScore, cancel: &CancellationToken)
    -> ServiceResult<()>;

    /// Each player's single best score with `play_start` in
    /// `[from_inclusive, to_exclusive)`, ordered by score descending
    /// then player id ascending, truncated to `limit` rows. An empty
    /// window is `BadRequest`; a window with no sessions is `Ok(vec![])`.
    async fn get_top_scoring_players(
        &self,
        from_inclusive: DateTime<Utc>,
        to_exclusive: DateTime<Utc>,
        limit: i64,
        cancel: &CancellationToken,
    ) -> ServiceResult<Vec<PlayerScore>>;

    /// Session counts per player within the window, ordered by count
    /// descending then player id ascending, truncated to `limit` rows.
    async fn get_most_active_players(
        &self,
        from_inclusive: DateTime<Utc>,
        to_exclusive: DateTime<Utc>,
        limit: i64,
        cancel: &CancellationToken,
    ) -> ServiceResult<Vec<PlayerActivity>>;

    /// Lifetime impact report for every player with at least one
    /// session, ordered by player id ascending.
    async fn get_impact_reports(
        &self,
        cancel: &CancellationToken,
    ) -> ServiceResult<Vec<PlayerImpactReport>>;
}
