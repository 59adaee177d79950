use crate::modules::metrics::core::summary::DailySummaryView;
use crate::shared::core::primitives::DateKey;
use async_trait::async_trait;

#[async_trait]
pub trait DailySummaryQueries {
    async fn get_daily_summary(
        &self,
        business_id: &str,
        date_key: DateKey,
    ) -> anyhow::Result<Option<DailySummaryView>>;

    /// Summaries for `business_id` with `from <= date_key <= to`, oldest first.
    async fn list_daily_summaries(
        &self,
        business_id: &str,
        from: DateKey,
        to: DateKey,
    ) -> anyhow::Result<Vec<DailySummaryView>>;
}
