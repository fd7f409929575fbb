use sqlx::PgPool;

use super::plan_store::RawPlanRow;

/// Sum of positive item calories per plan, with the plan's location fields
/// and the owner's weight. `None` if the plan does not exist.
pub async fn find_plan_totals(
    pool: &PgPool,
    plan_id: i64,
) -> Result<Option<RawPlanRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, PlanTotalsRow>(
        "SELECT p.id AS plan_id,
                COALESCE(SUM(CASE WHEN i.calories > 0 THEN i.calories ELSE 0 END), 0)::DOUBLE PRECISION
                    AS original_calories,
                p.latitude, p.longitude, p.destination,
                u.weight_kg
         FROM trip_plan p
         LEFT JOIN app_user u ON u.id = p.user_id
         LEFT JOIN trip_item i ON i.trip_id = p.id
         WHERE p.id = $1
         GROUP BY p.id, p.latitude, p.longitude, p.destination, u.weight_kg",
    )
    .bind(plan_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(PlanTotalsRow::into_raw))
}

#[derive(sqlx::FromRow)]
struct PlanTotalsRow {
    plan_id: i64,
    original_calories: f64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    destination: Option<String>,
    weight_kg: Option<f64>,
}

impl PlanTotalsRow {
    fn into_raw(self) -> RawPlanRow {
        RawPlanRow {
            plan_id: self.plan_id,
            original_calories: self.original_calories,
            latitude: self.latitude,
            longitude: self.longitude,
            destination: self.destination,
            weight_kg: self.weight_kg,
        }
    }
}
