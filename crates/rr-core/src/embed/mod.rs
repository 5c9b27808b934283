pub mod hash;
pub mod similarity;

use std::sync::Arc;

pub use hash::HashEmbedder;
pub use similarity::cosine_similarity;

/// A fixed-length vector representation of one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f32>,
}

impl Embedding {
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}

/// Text-to-vector capability behind the matcher.
///
/// Expensive to construct, stateless to use: build one per process and
/// share it by reference. `embed` returns `None` for empty or
/// whitespace-only input; callers treat that as "no signal", never as a
/// failure.
pub trait TextEmbedder: Send + Sync {
    /// Implementation name ("hash", ...).
    fn name(&self) -> &'static str;

    /// Model generation, for audit trails.
    fn version(&self) -> &str;

    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Option<Embedding>;

    /// Similarity of two embeddings in [0.0, 1.0].
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        if a.dimension() != b.dimension() {
            tracing::warn!(
                a_dimension = a.dimension(),
                b_dimension = b.dimension(),
                "embedding dimension mismatch; returning zero similarity"
            );
            return 0.0;
        }
        cosine_similarity(&a.vector, &b.vector)
    }
}

#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Embedding dimension (powers of two work well: 256, 512, 1024).
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self { dimension: 256 }
    }
}

/// Build the embedder selected by name; unknown names fall back to the
/// deterministic hash implementation.
pub fn create_embedder(name: &str, config: EmbedderConfig) -> Arc<dyn TextEmbedder> {
    match name {
        "hash" => Arc::new(HashEmbedder::new(config)),
        other => {
            tracing::warn!(embedder = other, "unknown embedder; falling back to hash");
            Arc::new(HashEmbedder::new(config))
        }
    }
}

/// Read embedder settings from the environment (`RR_EMBEDDER`,
/// `RR_EMBED_DIMENSION`), defaulting to the hash embedder at 256 dims.
pub fn embedder_from_env() -> Arc<dyn TextEmbedder> {
    let name = std::env::var("RR_EMBEDDER").unwrap_or_else(|_| "hash".into());
    let config = EmbedderConfig {
        dimension: std::env::var("RR_EMBED_DIMENSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| EmbedderConfig::default().dimension),
    };
    create_embedder(&name, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_falls_back_to_hash() {
        let embedder = create_embedder("no-such-backend", EmbedderConfig::default());
        assert_eq!(embedder.name(), "hash");
        assert_eq!(embedder.dimension(), 256);
    }

    #[test]
    fn trait_similarity_guards_dimension_mismatch() {
        let a = Embedding { vector: vec![1.0, 0.0] };
        let b = Embedding { vector: vec![1.0, 0.0, 0.0] };
        let embedder = create_embedder("hash", EmbedderConfig::default());
        assert_eq!(embedder.similarity(&a, &b), 0.0);
    }
}
