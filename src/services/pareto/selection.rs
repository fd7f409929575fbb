use super::dominance::RankedCandidate;
use crate::models::{CandidateRoute, RouteLabel};
use std::cmp::Ordering;

/// Members eligible for labeling: the first front, padded with following
/// fronts while it has a single member and fewer than three are collected.
pub fn working_set(ranked: &[RankedCandidate]) -> Vec<RankedCandidate> {
    let max_rank = ranked.iter().map(|c| c.rank).max().unwrap_or(0);
    let mut members: Vec<RankedCandidate> = Vec::new();

    for rank in 0..=max_rank {
        members.extend(ranked.iter().filter(|c| c.rank == rank));
        if rank == 0 && members.len() != 1 {
            break;
        }
        if members.len() >= 3 {
            break;
        }
    }

    members
}

/// Preference between two candidates under `label`. `Less` means `a` wins.
fn compare(label: RouteLabel, a: &CandidateRoute, b: &CandidateRoute, target: f64) -> Ordering {
    match label {
        RouteLabel::ShortestTime => a
            .time_minutes
            .total_cmp(&b.time_minutes)
            .then(b.calories_burn.total_cmp(&a.calories_burn)),
        RouteLabel::MaxCalories => b
            .calories_burn
            .total_cmp(&a.calories_burn)
            .then(a.time_minutes.total_cmp(&b.time_minutes)),
        RouteLabel::BestGreenery => b
            .greenery_score
            .total_cmp(&a.greenery_score)
            .then((a.calories_burn - target).abs().total_cmp(&(b.calories_burn - target).abs())),
    }
}

/// Population index of the best not-yet-chosen working-set member for `label`.
pub fn pick(
    label: RouteLabel,
    population: &[CandidateRoute],
    working: &[RankedCandidate],
    chosen: &[usize],
    target: f64,
) -> Option<usize> {
    working
        .iter()
        .filter(|c| !chosen.contains(&c.index))
        .min_by(|a, b| {
            compare(label, &population[a.index], &population[b.index], target)
                .then(b.crowding.total_cmp(&a.crowding))
                .then(a.index.cmp(&b.index))
        })
        .map(|c| c.index)
}
