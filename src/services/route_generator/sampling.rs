use crate::error::{AppError, Result};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};

/// Seeded source of the generator's random draws. One per planning call.
pub struct LoopSampler {
    rng: StdRng,
    unit: Uniform<f64>,
}

impl LoopSampler {
    pub fn new(seed: u64) -> Result<Self> {
        let unit = Uniform::new(0.0, 1.0)
            .map_err(|e| AppError::Internal(format!("Invalid sampling range: {}", e)))?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            unit,
        })
    }

    /// Uniform draw in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.unit.sample(&mut self.rng)
    }

    /// Uniform draw in [low, high)
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Uniform integer draw in [low, high]
    pub fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        let span = high.saturating_sub(low) + 1;
        let offset = ((self.unit() * span as f64) as usize).min(span - 1);
        low + offset
    }
}
