pub mod energy;
pub mod pareto;
pub mod plan_b;
pub mod route_generator;
pub mod route_planner;
pub mod weather;
