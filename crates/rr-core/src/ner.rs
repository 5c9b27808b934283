/// Named-entity recognition seam.
///
/// Job-title extraction depends on an external recognizer capability;
/// this trait is its interface. The default implementation is purely
/// lexical; a model-backed recognizer plugs in behind the same trait.
pub trait EntityRecognizer: Send + Sync {
    /// Implementation name, recorded alongside parse output when useful.
    fn name(&self) -> &'static str;

    /// Organization-like spans found in the text, in document order.
    fn organizations(&self, text: &str) -> Vec<String>;
}

/// Lexical recognizer: maximal runs of two or more capitalized tokens
/// within a line are treated as organization spans.
#[derive(Debug, Default)]
pub struct CapitalizedSpanRecognizer;

fn is_capitalized(token: &str) -> bool {
    token.len() >= 2
        && token
            .chars()
            .find(|c| c.is_alphabetic())
            .is_some_and(|c| c.is_uppercase())
}

fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '(' | ')'))
}

impl EntityRecognizer for CapitalizedSpanRecognizer {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn organizations(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<String> = Vec::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();

            for token in line.split_whitespace().map(clean_token) {
                if is_capitalized(token) {
                    run.push(token);
                    continue;
                }
                if run.len() >= 2 {
                    spans.push(run.join(" "));
                }
                run.clear();
            }

            if run.len() >= 2 {
                spans.push(run.join(" "));
            }
        }

        spans
    }
}
