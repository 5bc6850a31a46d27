//! # ethicore — elicitation engine for ethically ambiguous decisions
//!
//! ethicore combines independent per-dimension ethical scores into an ordered
//! set of clarifying questions for a human decision-maker. It never outputs a
//! verdict or a ranked recommendation: its only legitimate product is a
//! question list that surfaces trade-offs.
//!
//! ## Core concepts
//!
//! - **Dimension**: one named ethical perspective being scored
//! - **ScoreSet**: an insertion-ordered dimension→score mapping; order is the
//!   tie-break and emission contract
//! - **ContextLabel**: discriminator selecting which override rules apply
//! - **RuleConfig**: immutable thresholds and contextual overrides, loaded
//!   once at process start
//! - **Question**: an immutable prompt tagged with its cause
//!
//! ## Usage
//!
//! ```rust
//! use ethicore::{ContextLabel, Dimension, EthicsEngine, RuleConfig, ScoreSet};
//!
//! let engine = EthicsEngine::new(RuleConfig::default());
//!
//! let mut scores = ScoreSet::new();
//! scores.insert(Dimension::net_effect(), 0.9).unwrap();
//! scores.insert(Dimension::rule_compliance(), 0.85).unwrap();
//! scores.insert(Dimension::character_consistency(), 0.2).unwrap();
//!
//! let context = ContextLabel::default_label();
//! let questions = engine.generate(&scores, &context);
//! assert!(!questions.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod confidence;
pub mod conflict;
pub mod context;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod question;
pub mod weighting;

// Re-export primary types at crate root for convenience
pub use config::{
    ConflictRules, ContextOverride, RuleConfig, ThresholdConfig, DEFAULT_BASE_THRESHOLD,
    DEFAULT_CONFLICT_DIFFERENCE, DEFAULT_WARNING_THRESHOLD,
};
pub use context::ContextLabel;
pub use dimension::{Dimension, ScoreSet};
pub use engine::{assemble, Elicitation, EthicsEngine};
pub use error::{EthicoreError, EthicoreResult, LoadError, ValidationError};
pub use question::{Question, QuestionKind};
