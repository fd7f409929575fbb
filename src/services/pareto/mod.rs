//! Multi-objective selection of labeled representative routes.
//!
//! Candidates are ranked by Pareto non-domination over time, calorie
//! closeness and greenery, then one representative per label is picked from
//! the best front.
//!
//! A first front with a single member is padded from later fronts, but every
//! padding member is dominated by that member and dropped again. Such a
//! population yields one route whatever `n_routes` asked for.

pub mod dominance;
mod selection;

use crate::error::{AppError, Result};
use crate::models::{CandidateRoute, LabeledRoute, RouteLabel, RouteRequest};

use dominance::{dominates, normalize, rank_population};
use selection::{pick, working_set};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParetoOptimizer;

impl ParetoOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Pick up to `n_routes` labeled, mutually non-dominated representatives.
    pub fn select(
        &self,
        population: &[CandidateRoute],
        request: &RouteRequest,
        n_routes: usize,
    ) -> Result<Vec<LabeledRoute>> {
        if population.is_empty() {
            return Err(AppError::NoFeasibleRoute(format!(
                "No candidate loop fits {} minutes around ({:.5}, {:.5})",
                request.max_time_minutes, request.start.lat, request.start.lng
            )));
        }

        let ranked = rank_population(&normalize(population, request.target_calories));
        let working = working_set(&ranked);

        let front_size = ranked.iter().filter(|c| c.rank == 0).count();
        tracing::debug!(
            population = population.len(),
            front_size,
            working_set = working.len(),
            "Ranked candidate population"
        );

        let labels = &RouteLabel::ORDER[..n_routes.min(RouteLabel::ORDER.len())];
        let mut chosen: Vec<usize> = Vec::with_capacity(labels.len());
        let mut picks: Vec<(RouteLabel, usize)> = Vec::with_capacity(labels.len());

        for &label in labels {
            let Some(index) = pick(label, population, &working, &chosen, request.target_calories)
            else {
                break;
            };
            chosen.push(index);
            picks.push((label, index));
        }

        // Only reachable when lower fronts padded the working set.
        let kept: Vec<(RouteLabel, usize)> = picks
            .iter()
            .copied()
            .filter(|&(label, index)| {
                let dominated = picks
                    .iter()
                    .any(|&(_, other)| dominates(&ranked[other].objectives, &ranked[index].objectives));
                if dominated {
                    tracing::debug!(
                        label = label.display_name(),
                        index,
                        "Dropped dominated representative"
                    );
                }
                !dominated
            })
            .collect();

        Ok(kept
            .into_iter()
            .enumerate()
            .map(|(position, (label, index))| LabeledRoute {
                route_id: position as u32 + 1,
                route_name: label.display_name().to_string(),
                exercise_type: request.exercise_type,
                route: population[index].clone(),
            })
            .collect())
    }
}
