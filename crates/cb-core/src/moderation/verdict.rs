//! Moderation verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity reported for one moderation category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeverity {
    /// Provider category name (e.g. "Hate")
    pub category: String,
    /// Opaque ordinal, higher is worse
    pub severity: u32,
}

impl CategorySeverity {
    pub fn new(category: impl Into<String>, severity: u32) -> Self {
        Self {
            category: category.into(),
            severity,
        }
    }
}

impl fmt::Display for CategorySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (severity: {})", self.category, self.severity)
    }
}

/// Safe/unsafe judgment for a piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    unsafe_categories: Vec<CategorySeverity>,
}

impl Verdict {
    /// A verdict with no flagged categories
    pub fn safe() -> Self {
        Self::default()
    }

    /// Build a verdict from raw per-category scores.
    ///
    /// Zero-severity categories are dropped; order is preserved.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = CategorySeverity>,
    {
        Self {
            unsafe_categories: scores.into_iter().filter(|s| s.severity > 0).collect(),
        }
    }

    /// True iff no category scored above zero
    pub fn is_safe(&self) -> bool {
        self.unsafe_categories.is_empty()
    }

    /// Flagged categories in provider order
    pub fn unsafe_categories(&self) -> &[CategorySeverity] {
        &self.unsafe_categories
    }

    /// Human readable list, e.g. `Hate (severity: 2), Violence (severity: 4)`
    pub fn describe(&self) -> String {
        self.unsafe_categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_scores_are_safe() {
        let verdict = Verdict::from_scores(vec![
            CategorySeverity::new("Hate", 0),
            CategorySeverity::new("Violence", 0),
        ]);
        assert!(verdict.is_safe());
        assert!(verdict.unsafe_categories().is_empty());
    }

    #[test]
    fn test_nonzero_scores_kept_in_order() {
        let verdict = Verdict::from_scores(vec![
            CategorySeverity::new("Hate", 2),
            CategorySeverity::new("SelfHarm", 0),
            CategorySeverity::new("Violence", 4),
        ]);
        assert!(!verdict.is_safe());
        assert_eq!(
            verdict.unsafe_categories(),
            &[
                CategorySeverity::new("Hate", 2),
                CategorySeverity::new("Violence", 4)
            ]
        );
    }

    #[test]
    fn test_describe() {
        let verdict = Verdict::from_scores(vec![
            CategorySeverity::new("Hate", 2),
            CategorySeverity::new("Violence", 4),
        ]);
        assert_eq!(
            verdict.describe(),
            "Hate (severity: 2), Violence (severity: 4)"
        );
        assert_eq!(Verdict::safe().describe(), "");
    }
}
