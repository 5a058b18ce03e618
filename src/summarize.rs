use fnv::FnvHashMap;

use crate::stopwords::{StopWords, ENGLISH_STOPWORDS};
use crate::text;

/// Texts shorter than this are returned verbatim instead of summarized.
pub const MIN_SUMMARIZE_LEN: usize = 50;

/// Returned for empty input.
pub const EMPTY_INPUT_PLACEHOLDER: &str = "Not enough content to summarize.";

/// Returned when the text has no sentences to fall back to.
pub const NO_SUMMARY_PLACEHOLDER: &str = "Could not generate summary.";

/// Frequency-based extractive summarizer.
///
/// Sentences are scored by the summed weight of their words, where a word's
/// weight is its occurrence count normalized by the most frequent
/// non-stopword in the text. The top sentences are emitted in their original
/// order.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stop_words: StopWords,
}

impl Default for Summarizer {
    /// Uses the process-wide English stopword set. If the bundled corpus is
    /// unavailable this is the degraded unfiltered set.
    fn default() -> Self {
        Self {
            stop_words: ENGLISH_STOPWORDS.clone(),
        }
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A summarizer with a caller-supplied stopword set. [`StopWords::empty`]
    /// gives the unfiltered degraded mode explicitly.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Extract the `num_sentences` highest scoring sentences of `text`, in
    /// original order, joined by single spaces.
    ///
    /// Degenerate inputs never fail: empty text yields
    /// [`EMPTY_INPUT_PLACEHOLDER`], text under [`MIN_SUMMARIZE_LEN`] chars is
    /// returned trimmed and unchanged, and text without a single scoreable
    /// word falls back to its first sentence.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> String {
        let text = text.trim();
        if text.is_empty() {
            return EMPTY_INPUT_PLACEHOLDER.to_string();
        }
        if text::char_len(text) < MIN_SUMMARIZE_LEN {
            return text.to_string();
        }

        // sentences come from the original text so the output keeps
        // punctuation and case; scoring runs on the normalized copy
        let sentences = text::sentences(text);
        let normalized = text::normalize_for_scoring(text);

        let frequencies = match WordFrequencies::from_text(&normalized, &self.stop_words) {
            Some(frequencies) => frequencies,
            None => {
                return sentences
                    .first()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string());
            }
        };

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .map(|sentence| {
                let lowered = sentence.to_lowercase();
                text::words(&lowered)
                    .map(|word| frequencies.weight(word))
                    .sum::<f64>()
            })
            .enumerate()
            .collect();

        // stable sort: equally scored sentences keep ascending index order,
        // so the earlier sentence wins a tie
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<usize> = scored
            .iter()
            .take(num_sentences)
            .map(|(idx, _)| *idx)
            .collect();
        selected.sort_unstable();

        selected
            .into_iter()
            .map(|idx| sentences[idx])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Summarize with the default English stopword set.
pub fn summarize(text: &str, num_sentences: usize) -> String {
    Summarizer::default().summarize(text, num_sentences)
}

/// Ephemeral per-call table of word to weight in `(0, 1]`, normalized by the
/// most frequent non-stopword. Discarded after the call.
#[derive(Debug)]
pub(crate) struct WordFrequencies {
    weights: FnvHashMap<String, f64>,
}

impl WordFrequencies {
    /// Count non-stopword occurrences in the normalized text and divide each
    /// by the maximum count. `None` when nothing is scoreable.
    pub(crate) fn from_text(normalized: &str, stop_words: &StopWords) -> Option<Self> {
        let mut counts: FnvHashMap<&str, usize> = FnvHashMap::default();
        for word in text::words(normalized) {
            if !stop_words.contains(word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let max = *counts.values().max()?;
        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max as f64))
            .collect();

        Some(Self { weights })
    }

    /// Weight for `word`; unknown words and stopwords weigh nothing.
    pub(crate) fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_returned_verbatim() {
        assert_eq!(summarize("Short.", 3), "Short.");
        assert_eq!(summarize("  Short.  ", 3), "Short.");
    }

    #[test]
    fn empty_input_placeholder() {
        assert_eq!(summarize("", 3), EMPTY_INPUT_PLACEHOLDER);
        assert_eq!(summarize("   \n ", 3), EMPTY_INPUT_PLACEHOLDER);
    }

    #[test]
    fn stopword_only_text_falls_back_to_first_sentence() {
        let text = "It was what it was and it was over there. And so it was.";
        assert_eq!(summarize(text, 2), "It was what it was and it was over there.");
    }

    #[test]
    fn max_weight_is_exactly_one() {
        let frequencies =
            WordFrequencies::from_text("senate senate senate budget budget vote", &StopWords::empty())
                .unwrap();
        assert_eq!(frequencies.weight("senate"), 1.0);
        assert!(frequencies.weight("budget") < 1.0);
        assert!(frequencies.weight("vote") > 0.0);
        assert_eq!(frequencies.weight("absent"), 0.0);
    }

    #[test]
    fn no_scoreable_words_is_none() {
        let stop_words = StopWords::english().unwrap();
        assert!(WordFrequencies::from_text("the and of was", &stop_words).is_none());
        assert!(WordFrequencies::from_text("", &stop_words).is_none());
    }

    #[test]
    fn summary_preserves_source_order() {
        // "budget" dominates; the two budget sentences outscore the filler
        // regardless of where they sit
        let text = "The budget passed the budget committee with a budget amendment. \
                    Nothing else happened on an uneventful day in the chamber. \
                    Observers expect the budget and the budget debate to continue.";
        let summary = summarize(text, 2);
        assert_eq!(
            summary,
            "The budget passed the budget committee with a budget amendment. \
             Observers expect the budget and the budget debate to continue."
        );
    }

    #[test]
    fn requesting_more_sentences_than_available_returns_all() {
        let text = "One fact about the economy. Another fact about the economy.";
        assert_eq!(summarize(text, 5), text);
    }

    #[test]
    fn tie_break_prefers_earlier_sentence() {
        let summarizer = Summarizer::with_stop_words(StopWords::empty());
        // identical sentences score identically; the first one must win
        let text = "Alpha beta gamma delta epsilon zeta one. Alpha beta gamma delta epsilon zeta two.";
        assert_eq!(
            summarizer.summarize(text, 1),
            "Alpha beta gamma delta epsilon zeta one."
        );
    }

    #[test]
    fn degraded_empty_stopword_set_still_summarizes() {
        let summarizer = Summarizer::with_stop_words(StopWords::empty());
        let text = "The committee voted late on Tuesday. The committee will meet again.";
        let summary = summarizer.summarize(text, 1);
        assert_eq!(summary, "The committee voted late on Tuesday.");
    }
}
