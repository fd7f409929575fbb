use crate::config::{PlannerConfig, SpeedTable};
use crate::error::Result;
use crate::models::route::{GenerateRoutesRequest, RoutePlanResponse};
use crate::models::{LabeledRoute, RouteRequest};
use crate::services::pareto::ParetoOptimizer;
use crate::services::route_generator::CandidateGenerator;

/// Generates candidate loops and reduces them to labeled representatives.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    speeds: SpeedTable,
    generator: CandidateGenerator,
    optimizer: ParetoOptimizer,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            speeds: config.speeds.clone(),
            generator: CandidateGenerator::new(config),
            optimizer: ParetoOptimizer::new(),
        }
    }

    /// Nominal speeds of the exercises that can be planned as routes.
    pub fn speeds(&self) -> &SpeedTable {
        &self.speeds
    }

    /// Core operation: validated request in, labeled routes out.
    /// The same `(request, seed)` always yields the same routes.
    pub fn generate_routes(
        &self,
        request: &RouteRequest,
        n_routes: usize,
        seed: u64,
    ) -> Result<Vec<LabeledRoute>> {
        let population = self.generator.generate(request, seed)?;
        self.optimizer.select(&population, request, n_routes)
    }

    /// Validate an API request, pick a seed if none was given, and plan.
    pub fn plan(&self, body: &GenerateRoutesRequest) -> Result<RoutePlanResponse> {
        let request = body.validate()?;
        let n_routes = body.n_routes();
        let seed = body.seed.unwrap_or_else(fresh_seed);

        tracing::info!(
            lat = request.start.lat,
            lng = request.start.lng,
            target_calories = request.target_calories,
            max_time_minutes = request.max_time_minutes,
            exercise_type = %request.exercise_type,
            seed,
            "Planning routes"
        );

        let routes = self.generate_routes(&request, n_routes, seed)?;

        tracing::info!(
            requested = n_routes,
            routes = routes.len(),
            seed,
            "Route planning complete"
        );

        Ok(RoutePlanResponse::new(&request, routes, seed))
    }
}

fn fresh_seed() -> u64 {
    uuid::Uuid::new_v4().as_u128() as u64
}
