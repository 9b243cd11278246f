// Headline sentiment classification

use crate::domain::model::{SentimentLabel, SentimentResult};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Maps free text to a compound polarity in [-1, 1]
pub trait PolarityScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

pub struct SentimentScorer<P: PolarityScorer> {
    polarity: P,
}

impl<P: PolarityScorer> SentimentScorer<P> {
    pub fn new(polarity: P) -> Self {
        Self { polarity }
    }

    pub fn score(&self, text: &str) -> SentimentResult {
        let compound_score = if text.trim().is_empty() {
            0.0
        } else {
            self.polarity.compound(text).clamp(-1.0, 1.0)
        };

        SentimentResult {
            compound_score,
            label: Self::label(compound_score),
        }
    }

    fn label(compound: f64) -> SentimentLabel {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}
