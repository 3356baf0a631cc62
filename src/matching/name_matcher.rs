//! Fuzzy name matching implementation.
//!
//! Scores combine:
//! - Exact match after normalization
//! - Substring containment, weighted by length ratio
//! - Levenshtein similarity for typos

/// A suggested name with its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// Name as stored in the book
    pub name: &'a str,

    /// Confidence score (0-100, where 100 is an exact normalized match)
    pub confidence: u8,
}

/// Name matcher with a minimum confidence threshold.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    min_confidence: u8,
}

impl NameMatcher {
    /// Default threshold below which a candidate is not suggested.
    pub const DEFAULT_MIN_CONFIDENCE: u8 = 40;

    pub fn new(min_confidence: u8) -> Self {
        Self { min_confidence }
    }

    /// Rank `candidates` against `query`.
    ///
    /// # Returns
    /// At most `limit` suggestions, highest confidence first; ties keep the
    /// candidates' original order.
    pub fn suggest<'a, I>(&self, query: &str, candidates: I, limit: usize) -> Vec<Suggestion<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);
        let mut results: Vec<Suggestion<'a>> = candidates
            .into_iter()
            .filter_map(|name| {
                let confidence = Self::score(&query, &Self::normalize_name(name));
                (confidence > 0 && confidence >= self.min_confidence)
                    .then_some(Suggestion { name, confidence })
            })
            .collect();

        // Stable sort keeps book order among equal scores
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        results.truncate(limit);
        results
    }

    /// Score two normalized names from 0 to 100.
    fn score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(NameMatcher::normalize_name("  John   Doe  "), "john doe");
        assert_eq!(NameMatcher::normalize_name("JANE SMITH"), "jane smith");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(NameMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("bill", "bill"), 0);
        assert_eq!(NameMatcher::levenshtein_distance("bill", "phil"), 3);
    }

    #[test]
    fn test_score_ranges() {
        assert_eq!(NameMatcher::score("bill", "bill"), 100);
        assert!(NameMatcher::score("bill", "bill gates") >= 40);
        assert_eq!(NameMatcher::score("bill", "anna"), 0);
        assert_eq!(NameMatcher::score("", "anna"), 0);
    }

    #[test]
    fn test_suggest_typo() {
        let names = ["Bill", "Anna", "Phil", "Annabel"];
        let matcher = NameMatcher::default();

        let suggestions = matcher.suggest("Bil", names, 3);
        assert_eq!(suggestions[0].name, "Bill");

        let suggestions = matcher.suggest("ana", names, 3);
        let found: Vec<&str> = suggestions.iter().map(|s| s.name).collect();
        assert!(found.contains(&"Anna"));
        assert!(!found.contains(&"Bill"));
    }

    #[test]
    fn test_suggest_respects_limit_and_order() {
        let names = ["Anna", "Anna", "Anna"];
        let suggestions = NameMatcher::default().suggest("anna", names, 2);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|s| s.confidence == 100));
    }

    #[test]
    fn test_suggest_nothing_close() {
        let names = ["Bill", "Anna"];
        assert!(NameMatcher::default().suggest("Zebediah", names, 5).is_empty());
    }
}
