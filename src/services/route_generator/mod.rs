pub mod geometry;
mod sampling;

use crate::config::PlannerConfig;
use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{CandidateRoute, RouteRequest};
use crate::services::energy;

use geometry::{build_loop, perimeter_m, regular_loop_radius, LoopShape};
use sampling::LoopSampler;
use std::f64::consts::TAU;

/// Samples a population of closed candidate loops around the start point.
///
/// Every candidate starts and ends at the request's start point, fits within
/// the time budget, and carries its own intensity and greenery draw. When no
/// sample reaches the calorie target an extra anchor loop is appended that
/// does, provided the budget allows it at all.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    config: PlannerConfig,
}

impl CandidateGenerator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, request: &RouteRequest, seed: u64) -> Result<Vec<CandidateRoute>> {
        let speed_m_per_min = self.speed_m_per_min(request)?;
        let mut sampler = LoopSampler::new(seed)?;
        let mut population = Vec::with_capacity(self.config.population_size + 1);
        let mut rejected = 0usize;

        for _ in 0..self.config.population_size {
            let mut accepted = None;
            for _ in 0..self.config.max_resample_attempts {
                let sample = self.sample_candidate(request, speed_m_per_min, &mut sampler)?;
                if sample.is_some() {
                    accepted = sample;
                    break;
                }
                rejected += 1;
            }
            match accepted {
                Some(candidate) => population.push(candidate),
                None => tracing::debug!(
                    attempts = self.config.max_resample_attempts,
                    "Gave up on candidate after repeated rejections"
                ),
            }
        }

        let reaches_target = population
            .iter()
            .any(|c| c.calories_burn >= request.target_calories);

        if !reaches_target {
            match self.anchor_candidate(request, speed_m_per_min, &mut sampler)? {
                Some(anchor) => {
                    tracing::debug!(
                        calories = anchor.calories_burn,
                        time_minutes = anchor.time_minutes,
                        "Appended anchor candidate"
                    );
                    population.push(anchor);
                }
                None => tracing::debug!("Could not build anchor candidate within budget"),
            }
        }

        tracing::debug!(
            seed,
            candidates = population.len(),
            rejected,
            "Generated candidate population"
        );

        Ok(population)
    }

    fn speed_m_per_min(&self, request: &RouteRequest) -> Result<f64> {
        let speed_kmh = self
            .config
            .speeds
            .speed_kmh(request.exercise_type)
            .ok_or_else(|| {
                AppError::invalid(
                    "exercise_type",
                    format!("{} cannot be planned as a route", request.exercise_type),
                )
            })?;
        Ok(speed_kmh * 1000.0 / 60.0)
    }

    /// Draw one loop. `Ok(None)` means the draw was rejected and should be retried.
    fn sample_candidate(
        &self,
        request: &RouteRequest,
        speed_m_per_min: f64,
        sampler: &mut LoopSampler,
    ) -> Result<Option<CandidateRoute>> {
        let max_time = request.max_time_minutes as f64;

        let duration = max_time * sampler.range(MIN_DURATION_FRACTION, 1.0);
        let vertices = sampler.int_inclusive(MIN_LOOP_VERTICES, MAX_LOOP_VERTICES);
        let bearing_rad = sampler.range(0.0, TAU);
        let jitter: Vec<f64> = (1..vertices)
            .map(|_| sampler.range(-RADIUS_JITTER_RANGE, RADIUS_JITTER_RANGE))
            .collect();
        let intensity = sampler.range(MIN_INTENSITY, MAX_INTENSITY);
        let greenery_score = self.sample_greenery(sampler);

        let shape = LoopShape {
            vertices,
            radius_m: regular_loop_radius(duration * speed_m_per_min, vertices),
            bearing_rad,
            jitter,
        };

        let waypoints = build_loop(request.start, &shape);

        let distance_m = perimeter_m(&waypoints);
        let time_minutes = distance_m / speed_m_per_min;
        if time_minutes > max_time {
            return Ok(None);
        }

        let calories_burn = energy::calories(
            request.exercise_type,
            time_minutes,
            request.weight_kg,
            intensity,
        )?;

        Ok(Some(CandidateRoute {
            waypoints,
            distance_m,
            time_minutes,
            calories_burn,
            greenery_score,
            intensity,
        }))
    }

    /// Unjittered loop sized to reach the target at the highest intensity the
    /// budget needs. `Ok(None)` if no such loop fits.
    fn anchor_candidate(
        &self,
        request: &RouteRequest,
        speed_m_per_min: f64,
        sampler: &mut LoopSampler,
    ) -> Result<Option<CandidateRoute>> {
        let max_time = request.max_time_minutes as f64;
        let needed = energy::duration_for_calories(
            request.exercise_type,
            request.target_calories,
            request.weight_kg,
            MAX_INTENSITY,
        )?;
        let planned = (needed * ANCHOR_DURATION_HEADROOM).min(max_time);

        let mut shape = LoopShape {
            vertices: MAX_LOOP_VERTICES,
            radius_m: regular_loop_radius(planned * speed_m_per_min, MAX_LOOP_VERTICES),
            bearing_rad: sampler.range(0.0, TAU),
            jitter: Vec::new(),
        };

        let mut waypoints = build_loop(request.start, &shape);

        for _ in 0..ANCHOR_FIT_PASSES {
            let time = perimeter_m(&waypoints) / speed_m_per_min;
            if time <= 0.0 {
                break;
            }
            shape.radius_m *= planned / time;
            waypoints = build_loop(request.start, &shape);
        }

        let mut time_minutes = perimeter_m(&waypoints) / speed_m_per_min;
        if time_minutes > max_time {
            shape.radius_m *= max_time / time_minutes * ANCHOR_BUDGET_MARGIN;
            waypoints = build_loop(request.start, &shape);
            time_minutes = perimeter_m(&waypoints) / speed_m_per_min;
            if time_minutes > max_time {
                return Ok(None);
            }
        }

        let unit_calories =
            energy::calories(request.exercise_type, time_minutes, request.weight_kg, 1.0)?;
        // Rounded up by a hair so the product does not land an ulp under the target.
        let intensity = if unit_calories > 0.0 {
            (request.target_calories / unit_calories * (1.0 + 1e-12))
                .clamp(MIN_INTENSITY, MAX_INTENSITY)
        } else {
            MAX_INTENSITY
        };
        let calories_burn = energy::calories(
            request.exercise_type,
            time_minutes,
            request.weight_kg,
            intensity,
        )?;

        Ok(Some(CandidateRoute {
            distance_m: perimeter_m(&waypoints),
            waypoints,
            time_minutes,
            calories_burn,
            greenery_score: self.sample_greenery(sampler),
            intensity,
        }))
    }

    /// Skewed greenery draw in [0, 100]
    fn sample_greenery(&self, sampler: &mut LoopSampler) -> f64 {
        let u = sampler.unit();
        100.0 * (1.0 - (1.0 - u).powf(self.config.greenery_skew))
    }
}
