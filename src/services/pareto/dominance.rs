use crate::models::CandidateRoute;

/// Candidate objectives scaled to [0, 1] over one population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objectives {
    /// Min-max scaled time, lower is better
    pub time: f64,
    /// `min(calories, target) / target`, higher is better
    pub closeness: f64,
    /// Greenery / 100, higher is better
    pub greenery: f64,
}

pub fn normalize(population: &[CandidateRoute], target_calories: f64) -> Vec<Objectives> {
    let (min_time, max_time) = population.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), c| (lo.min(c.time_minutes), hi.max(c.time_minutes)),
    );
    let time_span = max_time - min_time;

    population
        .iter()
        .map(|c| Objectives {
            time: if time_span > 0.0 {
                (c.time_minutes - min_time) / time_span
            } else {
                0.0
            },
            closeness: if target_calories > 0.0 {
                c.calories_burn.min(target_calories) / target_calories
            } else {
                1.0
            },
            greenery: c.greenery_score / 100.0,
        })
        .collect()
}

/// `a` is no worse than `b` on every objective and strictly better on one.
pub fn dominates(a: &Objectives, b: &Objectives) -> bool {
    let no_worse = a.time <= b.time && a.closeness >= b.closeness && a.greenery >= b.greenery;
    let better = a.time < b.time || a.closeness > b.closeness || a.greenery > b.greenery;
    no_worse && better
}

/// Non-domination rank of every member; rank 0 is the Pareto front.
pub fn non_dominated_ranks(objectives: &[Objectives]) -> Vec<usize> {
    let n = objectives.len();
    let mut dominated_by_count = vec![0usize; n];
    let mut dominates_list: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&objectives[i], &objectives[j]) {
                dominates_list[i].push(j);
                dominated_by_count[j] += 1;
            } else if dominates(&objectives[j], &objectives[i]) {
                dominates_list[j].push(i);
                dominated_by_count[i] += 1;
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut front: Vec<usize> = (0..n).filter(|&i| dominated_by_count[i] == 0).collect();
    let mut rank = 0;

    while !front.is_empty() {
        let mut next = Vec::new();
        for &i in &front {
            ranks[i] = rank;
            for &j in &dominates_list[i] {
                dominated_by_count[j] -= 1;
                if dominated_by_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        front = next;
        rank += 1;
    }

    ranks
}

/// NSGA-II crowding distance, computed within each front.
/// Boundary members of a front get `f64::INFINITY`.
pub fn crowding_distances(objectives: &[Objectives], ranks: &[usize]) -> Vec<f64> {
    let mut distances = vec![0.0; objectives.len()];
    let max_rank = ranks.iter().copied().max().unwrap_or(0);

    let axes: [fn(&Objectives) -> f64; 3] = [|o| o.time, |o| o.closeness, |o| o.greenery];

    for rank in 0..=max_rank {
        let members: Vec<usize> = (0..objectives.len()).filter(|&i| ranks[i] == rank).collect();
        if members.len() <= 2 {
            for &i in &members {
                distances[i] = f64::INFINITY;
            }
            continue;
        }

        for axis in axes {
            let mut sorted = members.clone();
            sorted.sort_by(|&a, &b| axis(&objectives[a]).total_cmp(&axis(&objectives[b])));

            let first = sorted[0];
            let last = sorted[sorted.len() - 1];
            distances[first] = f64::INFINITY;
            distances[last] = f64::INFINITY;

            let span = axis(&objectives[last]) - axis(&objectives[first]);
            if span <= 0.0 {
                continue;
            }
            for w in sorted.windows(3) {
                let gap = axis(&objectives[w[2]]) - axis(&objectives[w[0]]);
                distances[w[1]] += gap / span;
            }
        }
    }

    distances
}

/// A population member with its place in the Pareto ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    /// Position in the candidate population
    pub index: usize,
    pub objectives: Objectives,
    /// Non-domination rank, 0 for the first front
    pub rank: usize,
    pub crowding: f64,
}

/// Rank every member and attach its crowding distance.
pub fn rank_population(objectives: &[Objectives]) -> Vec<RankedCandidate> {
    let ranks = non_dominated_ranks(objectives);
    let crowding = crowding_distances(objectives, &ranks);

    objectives
        .iter()
        .enumerate()
        .map(|(index, &objectives)| RankedCandidate {
            index,
            objectives,
            rank: ranks[index],
            crowding: crowding[index],
        })
        .collect()
}
