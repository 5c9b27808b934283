use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed skill vocabulary. Matching is whole-word and case-insensitive;
/// the keyword itself is treated as a literal, never a pattern.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "fastapi",
    "sql",
    "sql server",
    "c#",
    ".net",
    "api",
    "rest",
    "microservices",
    "dto",
    "dal",
    "bal",
    "html",
    "css",
    "javascript",
    "react",
    "angular",
    "n-tier",
    "entity framework",
    "docker",
    "azure",
    "aws",
];

static SKILL_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            (*keyword, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Collect every vocabulary keyword that appears as a standalone token.
/// Output is lowercase, sorted and deduplicated; alphabetical order, not
/// position or relevance.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let mut skills: Vec<String> = SKILL_RES
        .iter()
        .filter(|(_, re)| re.is_match(&text_lower))
        .map(|(keyword, _)| keyword.to_string())
        .collect();

    skills.sort();
    skills.dedup();
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_standalone_tokens_only() {
        assert_eq!(extract_skills("I write python daily"), vec!["python"]);
        assert!(extract_skills("my pythonic style").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_skills("Python and SQL"), vec!["python", "sql"]);
    }

    #[test]
    fn multi_word_keywords_match() {
        let skills = extract_skills("worked with SQL Server and Entity Framework");
        assert_eq!(skills, vec!["entity framework", "sql", "sql server"]);
    }

    #[test]
    fn symbol_edged_keywords_never_satisfy_word_boundaries() {
        // `\b` cannot sit between `#`/`.` and whitespace, so "c#" and
        // ".net" are unmatchable under the word-anchored patterns. Kept
        // for parity with the reference vocabulary.
        assert!(extract_skills("C# and .NET developer").is_empty());
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let skills = extract_skills("react react docker angular docker");
        assert_eq!(skills, vec!["angular", "docker", "react"]);
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn empty_text_yields_no_skills() {
        assert!(extract_skills("").is_empty());
    }
}
