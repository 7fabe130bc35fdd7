use chrono::{DateTime, SecondsFormat, Utc};

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,

    pub name: String,

    pub quantity: i64,

    pub last_recorded_at: DateTime<Utc>,
}

impl Item {
    /// Most-recent-first ordering shared by every listing: touch time
    /// descending, then id descending.
    #[must_use]
    pub fn recency_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .last_recorded_at
            .cmp(&self.last_recorded_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Fixed-width RFC 3339 so that lexical order on the stored column is
/// chronological order.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}
