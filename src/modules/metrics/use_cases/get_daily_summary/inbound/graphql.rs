use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::metrics::core::summary::DailySummaryView;
use crate::shared::core::primitives::DateKey;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDailySummary {
    pub business_id: String,
    pub date_key: String,
    pub appointments_count: i64,
    pub revenue_cents: i64,
    pub updated_at: i64,
}

impl From<DailySummaryView> for GqlDailySummary {
    fn from(v: DailySummaryView) -> Self {
        Self {
            business_id: v.business_id,
            date_key: v.date_key.to_string(),
            appointments_count: v.appointments_count,
            revenue_cents: v.revenue_cents,
            updated_at: v.updated_at,
        }
    }
}

fn parse_date_key(value: &str) -> GqlResult<DateKey> {
    DateKey::parse(value).map_err(|e| {
        async_graphql::Error::new(e.to_string())
            .extend_with(|_, ext| ext.set("code", "invalid-argument"))
    })
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn daily_summary(
        &self,
        context: &Context<'_>,
        business_id: String,
        date_key: String,
    ) -> GqlResult<Option<GqlDailySummary>> {
        let state = context.data_unchecked::<AppState>();
        let date_key = parse_date_key(&date_key)?;
        let view = state
            .summaries
            .get_daily_summary(&business_id, date_key)
            .await?;
        Ok(view.map(Into::into))
    }

    async fn daily_summaries(
        &self,
        context: &Context<'_>,
        business_id: String,
        from: String,
        to: String,
    ) -> GqlResult<Vec<GqlDailySummary>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .summaries
            .list_daily_summaries(&business_id, parse_date_key(&from)?, parse_date_key(&to)?)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
