pub mod ranker;
pub mod scorer;
pub mod weights;

pub use ranker::{rank, rank_catalog, EmbeddedCatalog, MatchResult, RankerConfig};
pub use scorer::{round_score, ResumeProfile, ScoreBreakdown, SimilarityScorer};
pub use weights::{MatchWeights, DEFAULT_WEIGHTS};
