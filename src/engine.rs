//! The elicitation engine: the full question-generation pipeline.
//!
//! One synchronous operation per request: raw scores and a context label flow
//! through weighting, then confidence and conflict evaluation, then assembly.
//! The engine holds only immutable configuration, so a single instance can be
//! shared across threads without coordination, and identical inputs always
//! produce byte-identical output.
//!
//! The engine never renders a verdict. Its only outputs are ordered
//! elicitation questions — and it never returns zero of them.

use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::context::ContextLabel;
use crate::dimension::ScoreSet;
use crate::question::Question;
use crate::{confidence, conflict, weighting};

/// Orders and concatenates the stage outputs, substituting the single
/// default reflective question when nothing else fired.
///
/// Confidence questions come first in their own order, followed by the
/// conflict question if present. The fallback is the only rule here and it
/// guarantees a non-empty result.
#[must_use]
pub fn assemble(
    confidence_questions: Vec<Question>,
    conflict_question: Option<Question>,
) -> Vec<Question> {
    let mut questions = confidence_questions;
    questions.extend(conflict_question);
    if questions.is_empty() {
        questions.push(Question::reflective());
    }
    questions
}

/// The full per-request analysis, in the shape hosts return to callers:
/// the context that was applied, the scores before and after weighting, and
/// the ordered questions. Restates inputs only — no verdict, no ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elicitation {
    /// The context label the overrides were selected by.
    pub context: ContextLabel,

    /// The raw scores as received from the scoring stage.
    pub raw_scores: ScoreSet,

    /// The scores after contextual weighting.
    pub adjusted_scores: ScoreSet,

    /// The ordered elicitation questions (never empty).
    pub questions: Vec<Question>,
}

/// The decision/inference engine.
///
/// Constructed once from a loaded [`RuleConfig`] and shared read-only for the
/// process lifetime; reload is a restart.
///
/// # Examples
///
/// ```
/// use ethicore::{ContextLabel, Dimension, EthicsEngine, RuleConfig, ScoreSet};
///
/// let engine = EthicsEngine::new(RuleConfig::default());
///
/// let mut scores = ScoreSet::new();
/// scores.insert(Dimension::net_effect(), 0.8).unwrap();
///
/// let questions = engine.generate(&scores, &ContextLabel::default_label());
/// assert!(!questions.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EthicsEngine {
    config: RuleConfig,
}

impl EthicsEngine {
    /// Creates an engine over an immutable rule configuration.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the engine runs on.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Runs the pipeline and returns the ordered question list.
    ///
    /// Pure apart from reading the engine's immutable configuration; the
    /// result is deterministic in (scores, context, config) and always holds
    /// at least one question.
    #[must_use]
    pub fn generate(&self, raw_scores: &ScoreSet, context: &ContextLabel) -> Vec<Question> {
        let adjusted = weighting::apply(raw_scores, context, &self.config.rules);
        let confidence_questions = confidence::evaluate(&adjusted, &self.config.thresholds);
        let conflict_question = conflict::evaluate(
            &adjusted,
            context,
            &self.config.thresholds,
            &self.config.rules,
        );
        assemble(confidence_questions, conflict_question)
    }

    /// Runs the pipeline and returns the full [`Elicitation`] report.
    #[must_use]
    pub fn elicit(&self, raw_scores: &ScoreSet, context: &ContextLabel) -> Elicitation {
        let adjusted = weighting::apply(raw_scores, context, &self.config.rules);
        let confidence_questions = confidence::evaluate(&adjusted, &self.config.thresholds);
        let conflict_question = conflict::evaluate(
            &adjusted,
            context,
            &self.config.thresholds,
            &self.config.rules,
        );
        Elicitation {
            context: context.clone(),
            raw_scores: raw_scores.clone(),
            adjusted_scores: adjusted,
            questions: assemble(confidence_questions, conflict_question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::question::QuestionKind;

    fn dim(name: &str) -> Dimension {
        Dimension::new(name).unwrap()
    }

    fn ctx(label: &str) -> ContextLabel {
        ContextLabel::new(label).unwrap()
    }

    fn scores(entries: &[(&str, f64)]) -> ScoreSet {
        let mut set = ScoreSet::new();
        for (name, value) in entries {
            set.insert(dim(name), *value).unwrap();
        }
        set
    }

    #[test]
    fn test_assemble_concatenates_in_order() {
        let confidence_questions = vec![
            Question::low_confidence(dim("a"), 0.1),
            Question::borderline(dim("b")),
        ];
        let conflict_question = Some(Question::generic_conflict(dim("c"), dim("a")));

        let out = assemble(confidence_questions, conflict_question);
        assert_eq!(out.len(), 3);
        assert!(matches!(out[0].kind, QuestionKind::LowConfidence { .. }));
        assert!(matches!(out[1].kind, QuestionKind::Borderline { .. }));
        assert!(matches!(out[2].kind, QuestionKind::Conflict { .. }));
    }

    #[test]
    fn test_assemble_empty_yields_exactly_one_reflective() {
        let out = assemble(Vec::new(), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, QuestionKind::Reflective);
    }

    #[test]
    fn test_assemble_no_fallback_when_conflict_alone_fires() {
        let out = assemble(Vec::new(), Some(Question::generic_conflict(dim("a"), dim("b"))));
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0].kind, QuestionKind::Conflict { .. }));
    }

    #[test]
    fn test_generate_never_empty() {
        let engine = EthicsEngine::new(RuleConfig::default());

        for set in [
            ScoreSet::new(),
            scores(&[("a", 0.9)]),
            scores(&[("a", 0.9), ("b", 0.8), ("c", 0.85)]),
        ] {
            let out = engine.generate(&set, &ctx("default"));
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config: RuleConfig = serde_json::from_str(
            r#"{
                "rules": {
                    "contextual_overrides": {"c": {"threshold_boost": {"b": 0.05}}},
                    "default_priority": ["a"]
                }
            }"#,
        )
        .unwrap();
        let engine = EthicsEngine::new(config);
        let set = scores(&[("a", 0.9), ("b", 0.4), ("c", 0.3)]);

        let first: Vec<String> = engine
            .generate(&set, &ctx("c"))
            .iter()
            .map(|q| q.text().to_string())
            .collect();
        for _ in 0..10 {
            let again: Vec<String> = engine
                .generate(&set, &ctx("c"))
                .iter()
                .map(|q| q.text().to_string())
                .collect();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_elicit_report_shape() {
        let config: RuleConfig = serde_json::from_str(
            r#"{
                "rules": {
                    "contextual_overrides": {"c": {"threshold_boost": {"a": 0.2}}}
                }
            }"#,
        )
        .unwrap();
        let engine = EthicsEngine::new(config);
        let raw = scores(&[("a", 0.7)]);

        let report = engine.elicit(&raw, &ctx("c"));
        assert_eq!(report.context, ctx("c"));
        assert_eq!(report.raw_scores, raw);
        assert_eq!(report.adjusted_scores.get(&dim("a")), Some(0.9));
        assert!(!report.questions.is_empty());
    }

    #[test]
    fn test_elicit_matches_generate() {
        let engine = EthicsEngine::new(RuleConfig::default());
        let set = scores(&[("a", 0.9), ("b", 0.4), ("c", 0.3)]);

        let report = engine.elicit(&set, &ctx("default"));
        let direct = engine.generate(&set, &ctx("default"));
        assert_eq!(report.questions, direct);
    }

    #[test]
    fn test_elicit_serialization_round_trip() {
        let engine = EthicsEngine::new(RuleConfig::default());
        let report = engine.elicit(&scores(&[("a", 0.3)]), &ctx("default"));

        let json = serde_json::to_string(&report).unwrap();
        let back: Elicitation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_engine_shared_across_threads() {
        let engine = std::sync::Arc::new(EthicsEngine::new(RuleConfig::default()));
        let set = scores(&[("a", 0.9), ("b", 0.4), ("c", 0.3)]);
        let expected = engine.generate(&set, &ctx("default"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                let set = set.clone();
                let expected = expected.clone();
                std::thread::spawn(move || {
                    let out = engine.generate(&set, &ContextLabel::default_label());
                    assert_eq!(out, expected);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
