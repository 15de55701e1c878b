use lazy_static::lazy_static;
use tracing::debug;

use super::keywords::{ANGRY_WORDS, LOVE_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};
use super::EmotionLabel;
use crate::config::KeywordConfig;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: KeywordClassifier = KeywordClassifier::default();
}

/// Classify with the built-in keyword sets.
pub fn classify(text: &str) -> EmotionLabel {
    DEFAULT_CLASSIFIER.classify(text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub label: EmotionLabel,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(label: EmotionLabel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// `text` must already be lowercased.
    fn find_match<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.keywords.iter().find(|k| text.contains(k.as_str())).map(|k| k.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMatch {
    pub label: EmotionLabel,
    pub keyword: Option<String>,
}

/// Ordered rule list; the first rule with a matching keyword decides the label.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
    fallback: EmotionLabel,
}

impl KeywordClassifier {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self {
            rules,
            fallback: EmotionLabel::Neutral,
        }
    }

    pub fn from_config(config: &KeywordConfig) -> Self {
        Self::new(vec![
            KeywordRule::new(EmotionLabel::Happy, &config.positive),
            KeywordRule::new(EmotionLabel::Sad, &config.negative),
            KeywordRule::new(EmotionLabel::Love, &config.love),
            KeywordRule::new(EmotionLabel::Angry, &config.angry),
        ])
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn classify(&self, text: &str) -> EmotionLabel {
        self.classify_with_match(text).label
    }

    pub fn classify_with_match(&self, text: &str) -> ClassificationMatch {
        let lowered = text.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.find_match(&lowered) {
                debug!(label = %rule.label, keyword, "keyword rule matched");
                return ClassificationMatch {
                    label: rule.label,
                    keyword: Some(keyword.to_string()),
                };
            }
        }

        debug!(label = %self.fallback, "no keyword rule matched");
        ClassificationMatch {
            label: self.fallback,
            keyword: None,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(vec![
            KeywordRule::new(EmotionLabel::Happy, POSITIVE_WORDS),
            KeywordRule::new(EmotionLabel::Sad, NEGATIVE_WORDS),
            KeywordRule::new(EmotionLabel::Love, LOVE_WORDS),
            KeywordRule::new(EmotionLabel::Angry, ANGRY_WORDS),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, KeywordClassifier, KeywordRule};
    use crate::_test_mock::response_mock::ChatTestData;
    use crate::config::KeywordConfig;
    use crate::modules::emotion::EmotionLabel;

    #[test]
    fn test_rule_order() {
        let classifier = KeywordClassifier::default();
        let order: Vec<_> = classifier.rules().iter().map(|r| r.label).collect();
        assert_eq!(
            order,
            vec![EmotionLabel::Happy, EmotionLabel::Sad, EmotionLabel::Love, EmotionLabel::Angry]
        );
    }

    #[test]
    fn test_classify_each_label() {
        assert_eq!(classify("What an AWESOME day"), EmotionLabel::Happy);
        assert_eq!(classify("I feel so lonely"), EmotionLabel::Sad);
        assert_eq!(classify("I love you"), EmotionLabel::Love);
        assert_eq!(classify("I am furious"), EmotionLabel::Angry);
        assert_eq!(classify("what time is it"), EmotionLabel::Neutral);
        assert_eq!(classify(""), EmotionLabel::Neutral);
    }

    #[test]
    fn test_classify_sample_texts() {
        let cases = [
            (ChatTestData::happy_texts(), EmotionLabel::Happy),
            (ChatTestData::sad_texts(), EmotionLabel::Sad),
            (ChatTestData::love_texts(), EmotionLabel::Love),
            (ChatTestData::angry_texts(), EmotionLabel::Angry),
            (ChatTestData::neutral_texts(), EmotionLabel::Neutral),
        ];

        for (texts, expected) in cases {
            for text in texts {
                assert_eq!(classify(text), expected, "text: {:?}", text);
            }
        }
    }

    #[test]
    fn test_positive_wins_over_negative() {
        assert_eq!(classify("I am so happy and sad"), EmotionLabel::Happy);
    }

    #[test]
    fn test_angry_word_is_caught_by_negative_set() {
        assert_eq!(classify("I am angry"), EmotionLabel::Sad);
        assert_eq!(classify("I am mad"), EmotionLabel::Angry);
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(classify("goodbye"), EmotionLabel::Happy);
        assert_eq!(classify("stop crying"), EmotionLabel::Sad);
    }

    #[test]
    fn test_classify_with_match_reports_keyword() {
        let classifier = KeywordClassifier::default();
        let result = classifier.classify_with_match("Heartbreak");
        assert_eq!(result.label, EmotionLabel::Love);
        assert_eq!(result.keyword.as_deref(), Some("heart"));

        let result = classifier.classify_with_match("hello");
        assert_eq!(result.label, EmotionLabel::Neutral);
        assert_eq!(result.keyword, None);
    }

    #[test]
    fn test_rule_keywords_are_normalized() {
        let rule = KeywordRule::new(EmotionLabel::Happy, [" Sunny ", "", "BRIGHT"]);
        assert_eq!(rule.keywords, vec!["sunny".to_string(), "bright".to_string()]);
    }

    #[test]
    fn test_from_config() {
        let config = KeywordConfig {
            positive: vec!["sunny".to_string()],
            negative: vec!["rainy".to_string()],
            love: vec!["cuddle".to_string()],
            angry: vec!["grr".to_string()],
        };
        let classifier = KeywordClassifier::from_config(&config);

        assert_eq!(classifier.classify("Sunny and rainy"), EmotionLabel::Happy);
        assert_eq!(classifier.classify("a rainy day"), EmotionLabel::Sad);
        assert_eq!(classifier.classify("cuddle time"), EmotionLabel::Love);
        assert_eq!(classifier.classify("GRR"), EmotionLabel::Angry);
        assert_eq!(classifier.classify("I am happy"), EmotionLabel::Neutral);
    }
}
