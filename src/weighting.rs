//! Weighting stage: contextual score boosts.
//!
//! Applies the context's additive boosts to the raw scores, clamping each
//! result at 1.0. Pure and infallible: an unknown context or an empty rule
//! set is the identity transform, and a boost naming a dimension absent from
//! the input is a no-op.

use crate::config::ConflictRules;
use crate::context::ContextLabel;
use crate::dimension::ScoreSet;

/// Applies context-specific boosts to a score set, producing a new set.
///
/// The input is never mutated. Output values are clamped at
/// [`ScoreSet::MAX_VALUE`]; there is deliberately no lower-bound clamp, so a
/// (misconfigured) negative boost passes through unchecked. That asymmetry
/// mirrors the deployed behavior and is pinned by tests rather than fixed.
///
/// # Examples
///
/// ```
/// use ethicore::{weighting, ConflictRules, ContextLabel, Dimension, ScoreSet};
///
/// let mut scores = ScoreSet::new();
/// scores.insert(Dimension::net_effect(), 0.9).unwrap();
///
/// let rules = ConflictRules::default();
/// let ctx = ContextLabel::new("unknown").unwrap();
/// let adjusted = weighting::apply(&scores, &ctx, &rules);
/// assert_eq!(adjusted, scores);
/// ```
#[must_use]
pub fn apply(scores: &ScoreSet, context: &ContextLabel, rules: &ConflictRules) -> ScoreSet {
    let Some(boosts) = rules.boosts_for(context) else {
        return scores.clone();
    };

    let entries = scores
        .iter()
        .map(|(dimension, value)| {
            let adjusted = match boosts.get(dimension) {
                Some(boost) => (value + boost).min(ScoreSet::MAX_VALUE),
                None => value,
            };
            (dimension.clone(), adjusted)
        })
        .collect();

    ScoreSet::from_entries_unchecked(entries)
}
