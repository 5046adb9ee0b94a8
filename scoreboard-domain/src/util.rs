use chrono::{DateTime, NaiveTime, Utc, Weekday};
use validator::Validate;

use crate::{ServiceError, ServiceResult};

#[derive(Validate)]
struct PlayerNameValidator {
    #[validate(length(min = 1))]
    name: String,
}

/// Rejects names that are empty after trimming. The name is stored and
/// echoed back untrimmed, so only the check uses the trimmed form.
pub fn validate_player_name(name: &str) -> ServiceResult<()> {
    let validator = PlayerNameValidator {
        name: name.trim().to_string(),
    };
    if validator.validate().is_err() {
        return ServiceError::bad_request("player name must not be empty");
    }
    Ok(())
}

/// Half-open UTC window covering one ISO week: [Monday 00:00 of the
/// requested week, Monday 00:00 of the following week). The following
/// week rolls over to week 1 of the next ISO year when needed.
pub fn iso_week_window(year: i32, week: u32) -> ServiceResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = chrono::NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or_else(|| ServiceError::BadRequest(format!("invalid ISO week {year}-W{week}")))?;
    let end = chrono::NaiveDate::from_isoywd_opt(year, week + 1, Weekday::Mon)
        .or_else(|| chrono::NaiveDate::from_isoywd_opt(year + 1, 1, Weekday::Mon))
        .ok_or_else(|| ServiceError::BadRequest(format!("invalid ISO week {year}-W{week}")))?;
    Ok((
        start.and_time(NaiveTime::MIN).and_utc(),
        end.and_time(NaiveTime::MIN).and_utc(),
    ))
}
