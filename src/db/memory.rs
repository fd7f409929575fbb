use super::plan_store::{PlanStore, RawPlanRow};
use crate::error::{AppError, Result};
use crate::models::PlanTotals;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local plan store. Used when no database is configured, and in tests.
#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: RwLock<HashMap<i64, RawPlanRow>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, row: RawPlanRow) {
        self.plans.write().await.insert(row.plan_id, row);
    }

    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn get_totals(&self, plan_id: i64) -> Result<PlanTotals> {
        let row = self
            .plans
            .read()
            .await
            .get(&plan_id)
            .cloned()
            .ok_or(AppError::PlanNotFound(plan_id))?;
        row.into_totals()
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
