//! Indoor substitution plan for days when the weather rules out the outdoor route.

use crate::config::PlanBConfig;
use crate::constants::DEFAULT_WEIGHT_KG;
use crate::db::PlanStore;
use crate::error::{AppError, Result};
use crate::models::{
    ExerciseType, IndoorExercise, PlanBAlternative, PlanBOutcome, PlanBResponse, WeatherAssessment,
    INDOOR_CATALOG,
};
use crate::services::energy;
use crate::services::weather::assessment::recommendation;
use crate::services::weather::{assess_plan_location, WeatherService};

#[derive(Debug, Clone)]
pub struct PlanBEngine {
    config: PlanBConfig,
}

impl PlanBEngine {
    pub fn new(config: PlanBConfig) -> Self {
        Self { config }
    }

    /// Look up a stored plan, assess its weather and build the substitution.
    pub async fn evaluate_plan_b(
        &self,
        plan_id: i64,
        store: &dyn PlanStore,
        weather_service: &dyn WeatherService,
    ) -> Result<PlanBResponse> {
        let totals = store.get_totals(plan_id).await?;
        let weather = assess_plan_location(weather_service, plan_id, &totals.location).await?;
        let outcome = self.substitute(totals.original_calories, totals.weight_kg, &weather)?;

        tracing::info!(
            plan_id,
            severity = %weather.severity,
            need_plan_b = outcome.need_plan_b,
            original_calories = totals.original_calories,
            plan_b_total_calories = outcome.plan_b_total_calories,
            alternatives = outcome.alternatives.len(),
            "Evaluated plan B"
        );

        Ok(PlanBResponse::new(&totals, weather, outcome))
    }

    /// Pick indoor substitutes whose calories approximate `original_calories`.
    /// Nothing is substituted unless the weather is bad.
    pub fn substitute(
        &self,
        original_calories: f64,
        weight_kg: Option<f64>,
        weather: &WeatherAssessment,
    ) -> Result<PlanBOutcome> {
        if !original_calories.is_finite() || original_calories < 0.0 {
            return Err(AppError::invalid(
                "original_calories",
                format!("must be a non-negative number, got {}", original_calories),
            ));
        }

        if !weather.is_bad_weather {
            return Ok(PlanBOutcome {
                need_plan_b: false,
                alternatives: Vec::new(),
                plan_b_total_calories: 0.0,
                shortfall_calories: 0.0,
                reason: compose_reason(weather, "无需调整，可按原计划进行户外运动"),
            });
        }

        if original_calories == 0.0 {
            return Ok(PlanBOutcome {
                need_plan_b: true,
                alternatives: Vec::new(),
                plan_b_total_calories: 0.0,
                shortfall_calories: 0.0,
                reason: compose_reason(weather, "原计划没有需要替代的运动消耗"),
            });
        }

        let weight = weight_kg
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_WEIGHT_KG);
        let tolerance = self.config.tolerance_for(original_calories);

        let mut alternatives = self.greedy_fill(original_calories, weight, tolerance)?;
        self.extend_last(&mut alternatives, original_calories, weight, tolerance)?;

        let total: f64 = alternatives.iter().map(|a| a.calories).sum();
        let gap = original_calories - total;
        let shortfall_calories = if gap > tolerance { gap } else { 0.0 };

        if shortfall_calories > 0.0 {
            tracing::debug!(
                original_calories,
                total,
                shortfall_calories,
                "Indoor catalog cannot cover the original target"
            );
        }

        Ok(PlanBOutcome {
            need_plan_b: true,
            alternatives,
            plan_b_total_calories: total,
            shortfall_calories,
            reason: compose_reason(weather, "已为您生成室内替代运动方案"),
        })
    }

    fn greedy_fill(
        &self,
        target: f64,
        weight: f64,
        tolerance: f64,
    ) -> Result<Vec<PlanBAlternative>> {
        let mut alternatives: Vec<PlanBAlternative> = Vec::new();
        let mut total = 0.0;

        for entry in indoor_by_mets() {
            if alternatives.len() >= self.config.max_items {
                break;
            }
            let gap = target - total;
            if gap <= tolerance {
                break;
            }

            let options =
                self.duration_options(entry.exercise, gap, weight, self.config.min_item_minutes)?;
            let Some(&(minutes, calories)) = options.first() else {
                continue;
            };
            if calories - gap > tolerance {
                // A lower-METs entry can land closer.
                continue;
            }

            total += calories;
            alternatives.push(alternative(entry, minutes, calories));
        }

        Ok(alternatives)
    }

    /// Lengthen the last item, up to the per-item cap, if the plan is still short.
    fn extend_last(
        &self,
        alternatives: &mut [PlanBAlternative],
        target: f64,
        weight: f64,
        tolerance: f64,
    ) -> Result<()> {
        let total: f64 = alternatives.iter().map(|a| a.calories).sum();
        let Some(last) = alternatives.last_mut() else {
            return Ok(());
        };
        if target - total <= tolerance || last.duration_minutes >= self.config.max_item_minutes {
            return Ok(());
        }

        let others = total - last.calories;
        let gap = target - others;
        let options =
            self.duration_options(last.exercise_type, gap, weight, last.duration_minutes)?;
        let Some(&(minutes, calories)) = options
            .iter()
            .find(|&&(_, calories)| calories - gap <= tolerance)
        else {
            return Ok(());
        };

        if minutes > last.duration_minutes {
            tracing::debug!(
                exercise = %last.exercise_type,
                from = last.duration_minutes,
                to = minutes,
                "Extended last plan B item"
            );
            last.duration_minutes = minutes;
            last.calories = calories;
        }
        Ok(())
    }

    /// Whole-minute durations (floor and ceil of the exact one, clamped to
    /// `[min_minutes, max_item_minutes]`) with their calories, closest to
    /// `gap` first.
    fn duration_options(
        &self,
        exercise: ExerciseType,
        gap: f64,
        weight: f64,
        min_minutes: u32,
    ) -> Result<Vec<(u32, f64)>> {
        let exact = energy::duration_for_calories(exercise, gap, weight, 1.0)?;
        let mut options: Vec<(u32, f64)> = Vec::with_capacity(2);

        for candidate in [exact.floor(), exact.ceil()] {
            let minutes = self.clamp_minutes(candidate, min_minutes);
            if options.iter().any(|&(m, _)| m == minutes) {
                continue;
            }
            let calories = energy::calories(exercise, minutes as f64, weight, 1.0)?;
            options.push((minutes, calories));
        }

        options.sort_by(|a, b| (gap - a.1).abs().total_cmp(&(gap - b.1).abs()));
        Ok(options)
    }

    fn clamp_minutes(&self, minutes: f64, min_minutes: u32) -> u32 {
        let max = self.config.max_item_minutes as f64;
        let min = (min_minutes as f64).min(max);
        minutes.clamp(min, max) as u32
    }
}

/// Indoor catalog, highest METs first. Ties keep catalog order.
fn indoor_by_mets() -> Vec<&'static IndoorExercise> {
    let mut entries: Vec<&'static IndoorExercise> = INDOOR_CATALOG.iter().collect();
    entries.sort_by(|a, b| b.mets().total_cmp(&a.mets()));
    entries
}

fn alternative(entry: &IndoorExercise, minutes: u32, calories: f64) -> PlanBAlternative {
    PlanBAlternative {
        exercise_name: entry.name.to_string(),
        exercise_type: entry.exercise,
        duration_minutes: minutes,
        calories,
        is_indoor: true,
        mets_value: entry.mets(),
        description: entry.description.to_string(),
    }
}

fn compose_reason(weather: &WeatherAssessment, outcome: &str) -> String {
    let mut parts = vec![format!("当前天气：{}", weather.description)];
    parts.extend(weather.warnings.iter().cloned());
    parts.push(recommendation(weather.severity).to_string());
    parts.push(outcome.to_string());
    parts.join("；")
}
