//! Term-list moderation gate

use async_trait::async_trait;
use cb_core::error::Result;
use cb_core::moderation::{CategorySeverity, ModerationGate, Verdict};

/// Category reported for blocklist hits
pub const BLOCKLIST_CATEGORY: &str = "Blocklist";

/// Flags text containing any configured term.
///
/// Matching is case-insensitive on whole words; a multi-word term must appear
/// as a contiguous word sequence. Severity is the number of distinct terms hit.
#[derive(Debug, Clone, Default)]
pub struct BlocklistGate {
    terms: Vec<Vec<String>>,
}

impl BlocklistGate {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<Vec<String>> = Vec::new();
        for term in terms {
            let words = words(term.as_ref());
            if !words.is_empty() && !parsed.contains(&words) {
                parsed.push(words);
            }
        }
        Self { terms: parsed }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms present in `text`
    pub fn matches(&self, text: &str) -> usize {
        let words = words(text);
        self.terms
            .iter()
            .filter(|term| words.windows(term.len()).any(|w| w == term.as_slice()))
            .count()
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Hit count as a severity, saturating at `u32::MAX`
fn severity(hits: usize) -> u32 {
    u32::try_from(hits).unwrap_or(u32::MAX)
}

#[async_trait]
impl ModerationGate for BlocklistGate {
    async fn analyze(&self, text: &str) -> Result<Verdict> {
        Ok(Verdict::from_scores([CategorySeverity::new(
            BLOCKLIST_CATEGORY,
            severity(self.matches(text)),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terms_are_normalized() {
        let gate = BlocklistGate::new(["Spam", "spam", "  ", "buy now"]);
        assert_eq!(gate.len(), 2);
    }

    #[test]
    fn test_whole_word_matching() {
        let gate = BlocklistGate::new(["spam"]);
        assert_eq!(gate.matches("This is SPAM!"), 1);
        assert_eq!(gate.matches("spammy but fine"), 0);
    }

    #[test]
    fn test_multi_word_terms() {
        let gate = BlocklistGate::new(["buy now", "spam"]);
        assert_eq!(gate.matches("please BUY   now, spam"), 2);
        assert_eq!(gate.matches("now buy"), 0);
    }

    #[test]
    fn test_severity_saturates() {
        assert_eq!(severity(0), 0);
        assert_eq!(severity(3), 3);
        assert_eq!(severity(usize::MAX), u32::MAX);
    }

    #[tokio::test]
    async fn test_verdicts() {
        let gate = BlocklistGate::new(["spam", "scam"]);

        let verdict = gate.analyze("hello there").await.unwrap();
        assert!(verdict.is_safe());

        let verdict = gate.analyze("spam and scam").await.unwrap();
        assert!(!verdict.is_safe());
        assert_eq!(
            verdict.unsafe_categories(),
            &[CategorySeverity::new(BLOCKLIST_CATEGORY, 2)]
        );
    }

    #[tokio::test]
    async fn test_empty_blocklist_allows_everything() {
        let gate = BlocklistGate::default();
        assert!(gate.is_empty());
        assert!(gate.analyze("anything at all").await.unwrap().is_safe());
    }
}
