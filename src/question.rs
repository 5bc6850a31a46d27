//! Elicitation questions.
//!
//! A question is the engine's sole output artifact: an immutable text unit
//! tagged with the cause that produced it. The observable contract is the
//! ordered text; the kind tag exists so hosts and tests can reason about why
//! a question fired without parsing prose.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Why a question was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum QuestionKind {
    /// A dimension scored below the warning threshold.
    LowConfidence {
        /// The uncertain dimension.
        dimension: Dimension,
    },

    /// A dimension scored between the warning and base thresholds.
    Borderline {
        /// The borderline dimension.
        dimension: Dimension,
    },

    /// The strongest and weakest dimensions diverge sharply.
    Conflict {
        /// The strongest dimension.
        strongest: Dimension,
        /// The weakest dimension.
        weakest: Dimension,
        /// Top of the applicable priority ordering, if one is configured.
        #[serde(skip_serializing_if = "Option::is_none")]
        priority: Option<Dimension>,
    },

    /// Nothing else fired; the single default reflective question.
    Reflective,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowConfidence { dimension } => write!(f, "low_confidence({dimension})"),
            Self::Borderline { dimension } => write!(f, "borderline({dimension})"),
            Self::Conflict {
                strongest, weakest, ..
            } => write!(f, "conflict({strongest} vs {weakest})"),
            Self::Reflective => write!(f, "reflective"),
        }
    }
}

/// An immutable elicitation question.
///
/// Constructed only through the cause-specific constructors so the text and
/// the kind tag can never disagree.
///
/// # Examples
///
/// ```
/// use ethicore::{Dimension, Question};
///
/// let q = Question::low_confidence(Dimension::net_effect(), 0.3);
/// assert!(q.text().contains("net_effect"));
/// assert!(q.text().contains("0.30"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The cause that produced this question.
    pub kind: QuestionKind,

    /// The natural-language prompt for the human decision-maker.
    text: String,
}

impl Question {
    /// A low-confidence question naming the dimension and its score.
    #[must_use]
    pub fn low_confidence(dimension: Dimension, score: f64) -> Self {
        let text = format!(
            "What additional information could raise confidence in the {dimension} analysis \
             (currently {score:.2})?"
        );
        Self {
            kind: QuestionKind::LowConfidence { dimension },
            text,
        }
    }

    /// A borderline question for a dimension between the warning and base
    /// thresholds.
    #[must_use]
    pub fn borderline(dimension: Dimension) -> Self {
        let text = format!(
            "Despite residual uncertainty, should the {dimension} analysis carry more weight \
             for the perspective it offers?"
        );
        Self {
            kind: QuestionKind::Borderline { dimension },
            text,
        }
    }

    /// A conflict question citing the configured priority.
    #[must_use]
    pub fn conflict(strongest: Dimension, weakest: Dimension, priority: Dimension) -> Self {
        let text = format!(
            "There is a sharp conflict between the {strongest} and {weakest} analyses. \
             The rules for this context prioritize {priority}; should that priority be \
             overridden in this instance?"
        );
        Self {
            kind: QuestionKind::Conflict {
                strongest,
                weakest,
                priority: Some(priority),
            },
            text,
        }
    }

    /// A conflict question with no priority ordering configured anywhere.
    #[must_use]
    pub fn generic_conflict(strongest: Dimension, weakest: Dimension) -> Self {
        let text = format!(
            "There is a sharp conflict between the {strongest} and {weakest} analyses. \
             Which perspective should take precedence here?"
        );
        Self {
            kind: QuestionKind::Conflict {
                strongest,
                weakest,
                priority: None,
            },
            text,
        }
    }

    /// The single default reflective question emitted when nothing else fires.
    #[must_use]
    pub fn reflective() -> Self {
        Self {
            kind: QuestionKind::Reflective,
            text: "The perspectives appear balanced. Which ethical principle matters most \
                   for the organisation's long-term reputation?"
                .to_string(),
        }
    }

    /// Returns the question text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
