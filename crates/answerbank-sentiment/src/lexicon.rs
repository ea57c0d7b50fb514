//! Lexicon-based sentiment analyzer.
//!
//! Each known adjective/verb carries a (polarity, subjectivity) pair. An
//! intensifier scales the next scored word; a negation within the two
//! preceding words flips and halves its polarity. The text score is the mean
//! over scored words, (0, 0) when nothing is scored.

use answerbank_core::models::SentimentScore;
use answerbank_core::traits::ISentimentAnalyzer;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f32, f32)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("confused", -0.4, 0.7),
    ("cool", 0.35, 0.65),
    ("disappointed", -0.75, 0.75),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.42, 0.5),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("helpful", 0.6, 0.5),
    ("horrible", -1.0, 1.0),
    ("love", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("thanks", 0.2, 0.2),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("useless", -0.5, 0.2),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// (word, multiplier)
const INTENSIFIERS: &[(&str, f32)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("very", 1.3),
    ("quite", 1.1),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "isn't", "don't", "doesn't", "wasn't", "can't"];

/// How many words back a negation still applies.
const NEGATION_WINDOW: usize = 2;

/// Polarity multiplier for a negated word.
const NEGATION_FACTOR: f32 = -0.5;

/// Built-in lexicon analyzer. Deterministic and allocation-light.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn lookup(word: &str) -> Option<(f32, f32)> {
        LEXICON
            .iter()
            .find(|(w, _, _)| *w == word)
            .map(|(_, p, s)| (*p, *s))
    }

    fn intensity(word: &str) -> Option<f32> {
        INTENSIFIERS
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, m)| *m)
    }
}

impl ISentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> SentimentScore {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut polarity_sum = 0.0f32;
        let mut subjectivity_sum = 0.0f32;
        let mut scored = 0usize;

        for (i, word) in words.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = Self::lookup(word) else {
                continue;
            };

            if let Some(m) = i.checked_sub(1).and_then(|j| Self::intensity(&words[j])) {
                polarity = (polarity * m).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * m).min(1.0);
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if words[window_start..i]
                .iter()
                .any(|w| NEGATIONS.contains(&w.as_str()))
            {
                polarity *= NEGATION_FACTOR;
            }

            polarity_sum += polarity;
            subjectivity_sum += subjectivity;
            scored += 1;
        }

        if scored == 0 {
            return SentimentScore::default();
        }
        SentimentScore::new(polarity_sum / scored as f32, subjectivity_sum / scored as f32)
    }
}
