use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Track;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlayHistoryEntry {
    pub id: i64,
    pub user_id: i64,
    pub track_id: i64,
    #[serde(with = "super::timestamp")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub played_at: DateTime<Utc>,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlayRecorded {
    pub message: String,
    pub track_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlayCount {
    pub track_id: i64,
    pub play_count: i64,
}
