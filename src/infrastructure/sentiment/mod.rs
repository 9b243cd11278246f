// src/infrastructure/sentiment/mod.rs
// Rule-based headline polarity scorer

mod lexicon;

use std::collections::{HashMap, HashSet};

use crate::domain::service::PolarityScorer;

const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How many preceding tokens can negate or boost a word
const MODIFIER_WINDOW: usize = 3;

/// Lexicon scorer in the style of VADER: summed word valences adjusted for
/// negation, degree words, capitals and exclamation marks, squashed into
/// [-1, 1].
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    negations: HashSet<String>,
    boosters: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: lexicon::VALENCES
                .iter()
                .map(|(word, valence)| (word.to_string(), *valence))
                .collect(),
            negations: lexicon::NEGATIONS.iter().map(|w| w.to_string()).collect(),
            boosters: lexicon::BOOSTERS
                .iter()
                .map(|(word, direction)| (word.to_string(), *direction))
                .collect(),
        }
    }

    /// Add or override a word valence
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    fn word_valence(&self, index: usize, raw: &[&str], lowered: &[String], shouting: bool) -> Option<f64> {
        let mut valence = *self.valences.get(&lowered[index])?;

        if shouting && is_all_caps(raw[index]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        let preceding = lowered[..index].iter().rev().take(MODIFIER_WINDOW);
        for (distance, word) in preceding.clone().enumerate() {
            if let Some(direction) = self.boosters.get(word) {
                let damping = 1.0 - 0.05 * distance as f64;
                valence += BOOSTER_INCREMENT * direction * damping * valence.signum();
            }
        }

        if preceding.clone().any(|word| self.negations.contains(word)) {
            valence *= NEGATION_SCALAR;
        }

        Some(valence)
    }
}

impl PolarityScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let raw = tokenize(text);
        let lowered: Vec<String> = raw.iter().map(|t| t.to_lowercase()).collect();
        let shouting = has_caps_differential(&raw);

        let mut sum: f64 = (0..raw.len())
            .filter_map(|i| self.word_valence(i, &raw, &lowered, shouting))
            .sum();

        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += (bangs * EXCLAMATION_INCREMENT).copysign(sum);
        }

        normalize(sum)
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

/// Capitals only count as emphasis when the text is not entirely upper-case
fn has_caps_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
