use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// A registered player. Rows are insert-only; there is no update or
/// delete path, so the struct mirrors the stored columns exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}
