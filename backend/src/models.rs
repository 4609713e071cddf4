use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnalyticsRecord {
    pub id: Uuid,
    pub event_type: String,
    pub details: Option<String>,
    pub created_at: OffsetDateTime,
}

impl AnalyticsRecord {
    pub fn new(event_type: String, details: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            details,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
