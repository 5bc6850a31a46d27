//! Conflict stage: divergence between the strongest and weakest dimensions.
//!
//! A conflict is a configured magnitude of disagreement between the highest
//! and lowest adjusted scores. When one fires, the stage frames a single
//! priority-aware question: which perspective the context's rules favor, and
//! whether that ordering should be overridden for this decision.
//!
//! Conflict analysis is meaningless with fewer than three competing views, so
//! smaller score sets produce nothing.

use crate::config::{ConflictRules, ThresholdConfig};
use crate::context::ContextLabel;
use crate::dimension::{Dimension, ScoreSet};
use crate::question::Question;

/// Minimum number of dimensions for conflict analysis to activate.
pub const MIN_DIMENSIONS: usize = 3;

/// Evaluates the adjusted scores for a max/min conflict.
///
/// Ties for the maximum or minimum are broken by insertion order: the first
/// dimension achieving the extreme wins. That tie-break is a frozen contract,
/// enforced here with strict comparisons.
///
/// Returns a question iff the set has at least [`MIN_DIMENSIONS`] dimensions
/// and the max−min difference exceeds the configured conflict-difference
/// threshold. The question cites the context's priority ordering when one is
/// configured (falling back to the default priority), and degrades to a
/// generic framing when no ordering exists anywhere.
#[must_use]
pub fn evaluate(
    adjusted: &ScoreSet,
    context: &ContextLabel,
    thresholds: &ThresholdConfig,
    rules: &ConflictRules,
) -> Option<Question> {
    if adjusted.len() < MIN_DIMENSIONS {
        return None;
    }

    let (strongest, max_value) = extreme(adjusted, |candidate, best| candidate > best)?;
    let (weakest, min_value) = extreme(adjusted, |candidate, best| candidate < best)?;

    if max_value - min_value <= thresholds.conflict_difference_threshold {
        return None;
    }

    let question = match rules.priority_for(context).and_then(|p| p.first()) {
        Some(priority) => Question::conflict(strongest, weakest, priority.clone()),
        None => Question::generic_conflict(strongest, weakest),
    };
    Some(question)
}

/// First dimension in insertion order achieving the extreme under `wins`.
fn extreme(scores: &ScoreSet, wins: impl Fn(f64, f64) -> bool) -> Option<(Dimension, f64)> {
    let mut best: Option<(&Dimension, f64)> = None;
    for (dimension, value) in scores.iter() {
        match best {
            // Strict comparison keeps the earlier dimension on ties.
            Some((_, best_value)) if !wins(value, best_value) => {}
            _ => best = Some((dimension, value)),
        }
    }
    best.map(|(d, v)| (d.clone(), v))
}
