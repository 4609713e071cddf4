use std::collections::HashMap;
use async_trait::async_trait;
use shared::analytics::{AnalyticsSummary, EventCount};
use sqlx::PgPool;
use tokio::sync::Mutex;
use crate::error::Error;
use crate::models::AnalyticsRecord;

/// Append-only storage for funnel events
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn insert(&self, record: AnalyticsRecord) -> Result<(), Error>;
    async fn summary(&self) -> Result<AnalyticsSummary, Error>;
}

pub struct PgAnalyticsStore {
    pool: PgPool,
}

impl PgAnalyticsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsStore for PgAnalyticsStore {
    async fn insert(&self, record: AnalyticsRecord) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO analytics (id, event_type, details, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(record.id)
        .bind(&record.event_type)
        .bind(&record.details)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn summary(&self) -> Result<AnalyticsSummary, Error> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT event_type, COUNT(*) AS count FROM analytics
             GROUP BY event_type ORDER BY count DESC, event_type ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(build_summary(rows))
    }
}

/// Keeps events in process memory. Used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryAnalyticsStore {
    records: Mutex<Vec<AnalyticsRecord>>,
}

impl MemoryAnalyticsStore {
    pub async fn records(&self) -> Vec<AnalyticsRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl AnalyticsStore for MemoryAnalyticsStore {
    async fn insert(&self, record: AnalyticsRecord) -> Result<(), Error> {
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn summary(&self) -> Result<AnalyticsSummary, Error> {
        let records = self.records.lock().await;
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for record in records.iter() {
            *counts.entry(record.event_type.as_str()).or_default() += 1;
        }

        let mut rows: Vec<(String, i64)> = counts
            .into_iter()
            .map(|(event_type, count)| (event_type.to_string(), count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(build_summary(rows))
    }
}

fn build_summary(rows: Vec<(String, i64)>) -> AnalyticsSummary {
    let total = rows.iter().map(|(_, count)| count).sum();
    let events = rows
        .into_iter()
        .map(|(event_type, count)| EventCount { event_type, count })
        .collect();

    AnalyticsSummary { total, events }
}
