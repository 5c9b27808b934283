use serde::{Deserialize, Serialize};

/// Field weights for the combined similarity score. Policy constants,
/// not derived: skills carry half the signal, experience most of the
/// rest. Must sum to 1.0.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.5,
    experience: 0.3,
    education: 0.2,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
