//! Composition glue for the session tracking service: env-backed
//! secrets and settings, logger setup, and the weekly summary workflow
//! built on top of the [`scoreboard_domain::service::ScoreService`]
//! trait.

pub mod compose;
pub mod logs;
pub mod summary;
