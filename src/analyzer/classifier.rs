//! Segment classification.

use crate::analyzer::node::NodeKind;
use crate::recognizer::PatternRecognizer;

/// Result of classifying one raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: NodeKind,
    pub value: String,
}

impl Classification {
    pub fn literal(token: &str) -> Self {
        Self {
            kind: NodeKind::Static,
            value: token.to_string(),
        }
    }

    pub fn variable(placeholder: &str) -> Self {
        Self {
            kind: NodeKind::Var,
            value: placeholder.to_string(),
        }
    }
}

/// Ordered set of recognizers consulted for every token.
#[derive(Debug, Default)]
pub struct SegmentClassifier {
    recognizers: Vec<Box<dyn PatternRecognizer>>,
}

impl SegmentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recognizer. Earlier registrations take precedence.
    pub fn register(&mut self, recognizer: Box<dyn PatternRecognizer>) {
        tracing::debug!(
            name = recognizer.name(),
            placeholder = recognizer.placeholder(),
            position = self.recognizers.len(),
            "Recognizer registered"
        );
        self.recognizers.push(recognizer);
    }

    pub fn recognizers(&self) -> &[Box<dyn PatternRecognizer>] {
        &self.recognizers
    }

    /// Classify a token: the first matching recognizer's placeholder, or the
    /// token itself as a literal.
    pub fn classify(&self, token: &str) -> Classification {
        match self.recognizers.iter().find(|r| r.is_match(token)) {
            Some(recognizer) => {
                tracing::trace!(token, recognizer = recognizer.name(), "Token matched");
                Classification::variable(recognizer.placeholder())
            }
            None => Classification::literal(token),
        }
    }
}
