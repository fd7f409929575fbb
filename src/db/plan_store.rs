use crate::error::{AppError, Result};
use crate::models::{GeoPoint, PlanLocation, PlanTotals};
use async_trait::async_trait;

/// Raw plan aggregate as read from storage, before validation.
/// Both the Postgres and in-memory stores build one of these, then call
/// `into_totals()` for the shared location rules.
#[derive(Debug, Clone, Default)]
pub struct RawPlanRow {
    pub plan_id: i64,
    pub original_calories: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub destination: Option<String>,
    pub weight_kg: Option<f64>,
}

impl RawPlanRow {
    /// Coordinates win over the destination text; a plan with neither cannot be assessed.
    pub fn into_totals(self) -> Result<PlanTotals> {
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => match GeoPoint::new(lat, lng) {
                Ok(point) => Some(point),
                Err(e) => {
                    tracing::warn!(
                        "Invalid coordinates for plan {}: {}. Falling back to destination.",
                        self.plan_id,
                        e
                    );
                    None
                }
            },
            _ => None,
        };

        let location = match (coordinates, self.destination) {
            (Some(point), _) => PlanLocation::Coordinates(point),
            (None, Some(destination)) if !destination.trim().is_empty() => {
                PlanLocation::Address(destination.trim().to_string())
            }
            _ => {
                return Err(AppError::invalid(
                    "plan_id",
                    format!(
                        "plan {} has neither coordinates nor a destination",
                        self.plan_id
                    ),
                ))
            }
        };

        let weight_kg = self.weight_kg.filter(|w| w.is_finite() && *w > 0.0);

        Ok(PlanTotals {
            plan_id: self.plan_id,
            original_calories: self.original_calories.max(0.0),
            location,
            weight_kg,
        })
    }
}

/// Read access to stored exercise plans.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Aggregate calories, location and owner weight for one plan.
    async fn get_totals(&self, plan_id: i64) -> Result<PlanTotals>;

    async fn health_check(&self) -> bool;

    fn backend_name(&self) -> &'static str;
}

pub struct PgPlanStore {
    pool: sqlx::PgPool,
}

impl PgPlanStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanStore for PgPlanStore {
    async fn get_totals(&self, plan_id: i64) -> Result<PlanTotals> {
        let row = super::plan_queries::find_plan_totals(&self.pool, plan_id)
            .await?
            .ok_or(AppError::PlanNotFound(plan_id))?;
        row.into_totals()
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawPlanRow {
        RawPlanRow {
            plan_id: 7,
            original_calories: 280.0,
            latitude: Some(39.9042),
            longitude: Some(116.4074),
            destination: Some("北京市朝阳区".to_string()),
            weight_kg: Some(65.0),
        }
    }

    #[test]
    fn test_coordinates_preferred() {
        let totals = row().into_totals().unwrap();
        assert_eq!(
            totals.location,
            PlanLocation::Coordinates(GeoPoint::new(39.9042, 116.4074).unwrap())
        );
        assert_eq!(totals.weight_kg, Some(65.0));
    }

    #[test]
    fn test_destination_fallback() {
        let totals = RawPlanRow {
            latitude: None,
            ..row()
        }
        .into_totals()
        .unwrap();
        assert_eq!(
            totals.location,
            PlanLocation::Address("北京市朝阳区".to_string())
        );

        let invalid = RawPlanRow {
            latitude: Some(120.0),
            ..row()
        }
        .into_totals()
        .unwrap();
        assert!(matches!(invalid.location, PlanLocation::Address(_)));
    }

    #[test]
    fn test_no_location_is_rejected() {
        let err = RawPlanRow {
            latitude: None,
            longitude: None,
            destination: Some("   ".to_string()),
            ..row()
        }
        .into_totals()
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter { ref field, .. } if field == "plan_id"));
    }

    #[test]
    fn test_non_positive_weight_dropped() {
        let totals = RawPlanRow {
            weight_kg: Some(0.0),
            ..row()
        }
        .into_totals()
        .unwrap();
        assert_eq!(totals.weight_kg, None);
    }
}
