//! Confidence stage: per-dimension threshold evaluation.
//!
//! Walks the adjusted scores in insertion order and flags every dimension
//! whose score is low (below the warning threshold) or borderline (between
//! the warning threshold and the dimension's base threshold). Dimensions at
//! or above their base threshold produce nothing.

use crate::config::ThresholdConfig;
use crate::dimension::ScoreSet;
use crate::question::Question;

/// Evaluates adjusted scores against the configured thresholds.
///
/// Emission order follows score-set insertion order, so the output is
/// deterministic and reproducible. The result may be empty; the assembler
/// owns the fallback.
///
/// # Examples
///
/// ```
/// use ethicore::{confidence, Dimension, ScoreSet, ThresholdConfig};
///
/// let mut scores = ScoreSet::new();
/// scores.insert(Dimension::net_effect(), 0.6).unwrap();
///
/// let questions = confidence::evaluate(&scores, &ThresholdConfig::default());
/// assert_eq!(questions.len(), 1); // borderline: 0.5 <= 0.6 < 0.75
/// ```
#[must_use]
pub fn evaluate(adjusted: &ScoreSet, thresholds: &ThresholdConfig) -> Vec<Question> {
    let mut questions = Vec::new();

    for (dimension, score) in adjusted.iter() {
        let base = thresholds.base_for(dimension);
        if score < thresholds.warning_threshold {
            questions.push(Question::low_confidence(dimension.clone(), score));
        } else if score < base {
            questions.push(Question::borderline(dimension.clone()));
        }
    }

    questions
}
