use scoreboard_domain::{
    ServiceResult, report::WeeklySummary, service::ScoreService, util::iso_week_window,
};
use tokio_util::sync::CancellationToken;

/// Row budget for each half of the weekly summary.
pub const WEEKLY_RESULT_LIMIT: i64 = 10;

/// Builds the leaderboard and activity ranking for one ISO week. The
/// two windowed queries run concurrently; the first failure drops the
/// sibling query.
pub async fn weekly_summary(
    service: &dyn ScoreService,
    year: i32,
    week: u32,
    cancel: &CancellationToken,
) -> ServiceResult<WeeklySummary> {
    let (from, to) = iso_week_window(year, week)?;
    let (top_scoring_players, most_active_players) = tokio::try_join!(
        service.get_top_scoring_players(from, to, WEEKLY_RESULT_LIMIT, cancel),
        service.get_most_active_players(from, to, WEEKLY_RESULT_LIMIT, cancel),
    )?;
    Ok(WeeklySummary {
        year,
        week,
        top_scoring_players,
        most_active_players,
    })
}
