use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{Embedding, EmbedderConfig, TextEmbedder};

// Fixed seeds keep the hash deterministic across processes and Rust
// versions. Changing them changes every embedding, so bump version().
const HASH_SEED_K0: u64 = 0x5265_7375_6d65_5252;
const HASH_SEED_K1: u64 = 0x5252_4a6f_6252_616e;

/// Deterministic text embedder built on feature hashing.
///
/// No model download, no warmup cost beyond construction, O(tokens) per
/// call. Sign hashing spreads collisions; vectors are L2-normalized so
/// cosine similarity reduces to a dot product.
pub struct HashEmbedder {
    config: EmbedderConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbedderConfig) -> Self {
        let mut config = config;
        config.dimension = config.dimension.max(1);
        Self { config }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

impl TextEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        // Bump when tokenization or the hash layout changes.
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Option<Embedding> {
        if text.trim().is_empty() {
            return None;
        }

        let mut vector = vec![0.0f32; self.config.dimension];
        let mut any = false;

        for token in Self::tokenize(text) {
            any = true;
            let idx = self.hash_token(&token);
            // Sign hashing: even hash of the marked token adds, odd subtracts.
            let sign = if self.hash_token(&format!("{token}_sign")) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        if !any {
            return None;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Some(Embedding { vector })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedder() -> HashEmbedder {
        HashEmbedder::new(EmbedderConfig::default())
    }

    #[test]
    fn blank_input_is_no_signal() {
        assert!(embedder().embed("").is_none());
        assert!(embedder().embed("   \t \n").is_none());
    }

    #[test]
    fn embeddings_are_deterministic() {
        let e = embedder();
        let a = e.embed("python sql docker").unwrap();
        let b = e.embed("python sql docker").unwrap();
        assert_eq!(a.vector, b.vector);
    }

    #[test]
    fn vectors_are_l2_normalized() {
        let emb = embedder().embed("python fastapi postgres").unwrap();
        let norm: f32 = emb.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        let e = embedder();
        let a = e.embed("Python SQL").unwrap();
        let b = e.embed("python sql").unwrap();
        assert_eq!(a.vector, b.vector);
    }

    #[test]
    fn closer_texts_score_higher() {
        let e = embedder();
        let job = e.embed("python sql docker aws").unwrap();
        let close = e.embed("python sql docker").unwrap();
        let far = e.embed("cobol mainframe fortran").unwrap();

        let close_score = e.similarity(&job, &close);
        let far_score = e.similarity(&job, &far);
        assert!(
            close_score > far_score,
            "expected {close_score} > {far_score}"
        );
    }
}
