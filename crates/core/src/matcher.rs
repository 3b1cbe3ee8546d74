use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CaptureOutcome;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatcherError {
    #[error("similarity threshold must be in (0, 1], got {provided}")]
    InvalidThreshold { provided: f64 },
}

//
// ─── MATCH RESULT ──────────────────────────────────────────────────────────────
//

/// Decision and confidence for one pronunciation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// Confidence in `[0, 1]`: 1.0 for an exact match, 0.9 for a variant
    /// containment match, otherwise the best sequence-similarity ratio.
    pub similarity: f64,
}

impl MatchResult {
    #[must_use]
    fn miss() -> Self {
        Self {
            is_correct: false,
            similarity: 0.0,
        }
    }
}

//
// ─── MATCHER ───────────────────────────────────────────────────────────────────
//

/// Correctness decisions are made against the best similarity seen across the
/// target and its variants; this is the default cut-off.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Accented Romanian glyphs and the base letters speech recognizers tend to
/// return for them. Each glyph yields one substitution variant replacing all
/// of its occurrences; substitutions are never combined.
const DIACRITIC_BASES: [(&str, &str); 5] = [
    ("â", "a"),
    ("î", "i"),
    ("ă", "a"),
    ("ș", "s"),
    ("ț", "t"),
];

/// Fuzzy pronunciation matcher for Romanian practice words.
///
/// Pure function of its inputs and the configured threshold: no state is kept
/// between evaluations. Matching runs in three stages — exact equality after
/// normalization, containment against orthographic variants of the target,
/// and finally a longest-common-subsequence similarity ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PronunciationMatcher {
    threshold: f64,
}

impl Default for PronunciationMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PronunciationMatcher {
    /// Creates a matcher with the default similarity threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Creates a matcher with a custom similarity threshold.
    ///
    /// # Errors
    ///
    /// Returns `MatcherError::InvalidThreshold` unless `threshold` is in
    /// `(0, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self, MatcherError> {
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(MatcherError::InvalidThreshold {
                provided: threshold,
            });
        }
        Ok(Self { threshold })
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluates a capture outcome against the target word.
    ///
    /// Every sentinel outcome evaluates to `(false, 0.0)`.
    #[must_use]
    pub fn evaluate(&self, target: &str, outcome: &CaptureOutcome) -> MatchResult {
        match outcome.as_text() {
            Some(spoken) => self.evaluate_text(target, spoken),
            None => MatchResult::miss(),
        }
    }

    /// Evaluates a recognized transcript against the target word.
    #[must_use]
    pub fn evaluate_text(&self, target: &str, spoken: &str) -> MatchResult {
        let target = normalize(target);
        let spoken = normalize(spoken);

        if target.is_empty() || spoken.is_empty() {
            return MatchResult::miss();
        }

        if target == spoken {
            return MatchResult {
                is_correct: true,
                similarity: 1.0,
            };
        }

        let variants = variants(&target);

        // Containment in either direction takes precedence over the ratio:
        // "cal" inside "calul" counts, as does a clipped transcript inside
        // the target.
        if variants
            .iter()
            .any(|v| spoken.contains(v.as_str()) || v.contains(spoken.as_str()))
        {
            return MatchResult {
                is_correct: true,
                similarity: 0.9,
            };
        }

        let best = variants
            .iter()
            .map(|v| sequence_ratio(v, &spoken))
            .fold(0.0_f64, f64::max);

        MatchResult {
            is_correct: best >= self.threshold,
            similarity: best,
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Orthographic variants of a normalized target word, deduplicated.
///
/// Each rule applies to the target independently; rules are never stacked.
/// The identity variant is always present, so callers can iterate the set
/// alone when comparing against the spoken text.
fn variants(word: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    out.insert(word.to_string());

    // Final schwa swaps: feminine endings are often transcribed without the
    // diacritic, and vice versa.
    if let Some(stem) = word.strip_suffix('ă') {
        out.insert(format!("{stem}a"));
    }
    if let Some(stem) = word.strip_suffix('a') {
        out.insert(format!("{stem}ă"));
    }

    // Plural endings dropped: "meri" -> "mer", "mere" -> "mer".
    if let Some(stem) = word.strip_suffix('i') {
        out.insert(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('e') {
        out.insert(stem.to_string());
    }

    for (glyph, base) in DIACRITIC_BASES {
        if word.contains(glyph) {
            out.insert(word.replace(glyph, base));
        }
    }

    out
}

/// Normalized sequence-similarity ratio in `[0, 1]`.
///
/// `2 * lcs(a, b) / (|a| + |b|)` computed over characters: symmetric, 1.0
/// for identical strings, 0.0 for strings with no characters in common.
#[must_use]
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * lcs_length(&a, &b) as f64 / total as f64;
    ratio
}

/// Length of the longest common subsequence, rolling two DP rows.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0_usize; b.len() + 1];
    let mut curr = vec![0_usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> PronunciationMatcher {
        PronunciationMatcher::new()
    }

    #[test]
    fn exact_match_scores_one() {
        let result = matcher().evaluate_text("pisică", "pisică");
        assert!(result.is_correct);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn normalization_ignores_case_and_whitespace() {
        let result = matcher().evaluate_text("Pisică", "  PISICĂ  ");
        assert!(result.is_correct);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn sentinels_always_miss() {
        for outcome in [
            CaptureOutcome::Timeout,
            CaptureOutcome::Unrecognized,
            CaptureOutcome::ServiceError,
            CaptureOutcome::Unavailable,
        ] {
            let result = matcher().evaluate("pisică", &outcome);
            assert!(!result.is_correct);
            assert_eq!(result.similarity, 0.0);
        }
    }

    #[test]
    fn empty_transcript_misses() {
        let result = matcher().evaluate("pisică", &CaptureOutcome::Text("   ".to_string()));
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
    }

    #[test]
    fn diacritic_free_transcript_matches_via_variant() {
        // "pisica" is the ă->a substitution variant of "pisică".
        let result = matcher().evaluate_text("pisică", "pisica");
        assert!(result.is_correct);
        assert!(result.similarity >= 0.9);
    }

    #[test]
    fn articulated_form_matches_by_containment() {
        // "cal" is a substring of "calul".
        let result = matcher().evaluate_text("cal", "calul");
        assert!(result.is_correct);
        assert_eq!(result.similarity, 0.9);
    }

    #[test]
    fn clipped_transcript_matches_by_containment() {
        // Spoken text contained in a variant of the target.
        let result = matcher().evaluate_text("mere", "mer");
        assert!(result.is_correct);
        assert_eq!(result.similarity, 0.9);
    }

    #[test]
    fn unrelated_word_stays_below_threshold() {
        let result = matcher().evaluate_text("mere", "mar");
        assert!(!result.is_correct);
        assert!(result.similarity < DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn near_miss_above_threshold_is_accepted() {
        // No containment in either direction; the ratio alone decides.
        let result = matcher().evaluate_text("frigider", "frigidel");
        assert!(result.is_correct);
        assert!(result.similarity >= DEFAULT_SIMILARITY_THRESHOLD);
        assert!(result.similarity < 0.9);
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [("mere", "mar"), ("pisică", "pisici"), ("cal", "calul")];
        for (a, b) in pairs {
            let left = sequence_ratio(a, b);
            let right = sequence_ratio(b, a);
            assert!((left - right).abs() < f64::EPSILON, "{a} vs {b}");
        }
    }

    #[test]
    fn ratio_bounds() {
        assert_eq!(sequence_ratio("abc", "abc"), 1.0);
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
    }

    #[test]
    fn variants_apply_rules_independently() {
        let set = variants("mamă");
        assert!(set.contains("mamă"));
        // Final schwa swap and the anywhere-substitution produce the same
        // string here; the set deduplicates it.
        assert!(set.contains("mama"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn variants_drop_plural_endings() {
        let set = variants("pisici");
        assert!(set.contains("pisici"));
        assert!(set.contains("pisic"));
    }

    #[test]
    fn diacritic_substitution_replaces_all_occurrences() {
        let set = variants("țânțar");
        assert!(set.contains("tântar"));
        assert!(set.contains("țânțar"));
        // One variant per glyph, not a cross-product.
        assert!(set.contains("tântar"));
        assert!(set.contains("țanțar"));
        assert!(!set.contains("tantar"));
    }

    #[test]
    fn final_vowel_swap_goes_both_ways() {
        assert!(variants("masa").contains("masă"));
        assert!(variants("masă").contains("masa"));
    }

    #[test]
    fn threshold_validation() {
        assert!(PronunciationMatcher::with_threshold(0.5).is_ok());
        assert!(PronunciationMatcher::with_threshold(0.0).is_err());
        assert!(PronunciationMatcher::with_threshold(1.2).is_err());
        assert!(PronunciationMatcher::with_threshold(f64::NAN).is_err());
    }

    #[test]
    fn custom_threshold_changes_decision() {
        let spoken = "mar";
        let lenient = PronunciationMatcher::with_threshold(0.3).unwrap();
        let strict = PronunciationMatcher::with_threshold(0.95).unwrap();

        assert!(lenient.evaluate_text("mere", spoken).is_correct);
        assert!(!strict.evaluate_text("mere", spoken).is_correct);
    }
}
