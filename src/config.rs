//! Rule configuration: thresholds and contextual overrides.
//!
//! Two independently loadable JSON documents drive the engine:
//!
//! - a thresholds document holding per-dimension base thresholds, the warning
//!   threshold, and the conflict-difference threshold;
//! - a conflict-rules document holding per-context overrides (additive score
//!   boosts and a priority ordering) plus a global default priority.
//!
//! Every key is optional and resolves to a documented default; a missing
//! document resolves to the empty structure. A *malformed* document is a
//! `LoadError` — the loader never papers over a parse failure. Once loaded,
//! configuration is immutable and shared read-only across all requests.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::context::ContextLabel;
use crate::dimension::Dimension;
use crate::error::LoadError;

/// Base threshold used for dimensions absent from `base_thresholds`.
pub const DEFAULT_BASE_THRESHOLD: f64 = 0.75;

/// Warning threshold used when the document carries none.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.5;

/// Conflict-difference threshold used when the document carries none.
pub const DEFAULT_CONFLICT_DIFFERENCE: f64 = 0.35;

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_conflict_difference() -> f64 {
    DEFAULT_CONFLICT_DIFFERENCE
}

/// Threshold configuration for the confidence and conflict stages.
///
/// # Examples
///
/// ```
/// use ethicore::{Dimension, ThresholdConfig};
///
/// let thresholds = ThresholdConfig::default();
/// assert_eq!(thresholds.base_for(&Dimension::net_effect()), 0.75);
/// assert_eq!(thresholds.warning_threshold, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Per-dimension base thresholds. Dimensions absent here fall back to
    /// [`DEFAULT_BASE_THRESHOLD`].
    #[serde(default)]
    pub base_thresholds: HashMap<Dimension, f64>,

    /// Scores below this are low-confidence.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Max−min divergence above this signals a conflict.
    #[serde(default = "default_conflict_difference")]
    pub conflict_difference_threshold: f64,
}

impl ThresholdConfig {
    /// Returns the base threshold for a dimension, falling back to
    /// [`DEFAULT_BASE_THRESHOLD`] when the dimension has no entry.
    #[must_use]
    pub fn base_for(&self, dimension: &Dimension) -> f64 {
        self.base_thresholds
            .get(dimension)
            .copied()
            .unwrap_or(DEFAULT_BASE_THRESHOLD)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base_thresholds: HashMap::new(),
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            conflict_difference_threshold: DEFAULT_CONFLICT_DIFFERENCE,
        }
    }
}

/// Override rules for one context: additive score boosts and a priority
/// ordering of dimensions.
///
/// Boost deltas are deliberately not range-validated: the weighting stage
/// clamps only the upper bound, preserving the configured behavior exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextOverride {
    /// Additive per-dimension score boosts, applied before thresholding.
    #[serde(default)]
    pub threshold_boost: HashMap<Dimension, f64>,

    /// Priority ordering of dimensions for conflict framing. Empty means
    /// "use the default priority".
    #[serde(default)]
    pub priority: Vec<Dimension>,
}

/// Per-context override rules plus the global default priority.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConflictRules {
    /// Overrides keyed by context label. Unrecognized labels match nothing.
    #[serde(default)]
    pub contextual_overrides: HashMap<ContextLabel, ContextOverride>,

    /// Priority ordering used when a context has none.
    #[serde(default)]
    pub default_priority: Vec<Dimension>,
}

impl ConflictRules {
    /// Returns the override record for a context, if one is configured.
    #[must_use]
    pub fn override_for(&self, context: &ContextLabel) -> Option<&ContextOverride> {
        self.contextual_overrides.get(context)
    }

    /// Returns the boost mapping for a context. An unrecognized context
    /// yields no boosts.
    #[must_use]
    pub fn boosts_for(&self, context: &ContextLabel) -> Option<&HashMap<Dimension, f64>> {
        self.override_for(context).map(|o| &o.threshold_boost)
    }

    /// Returns the priority ordering for a context: the context's own
    /// non-empty priority if present, otherwise the non-empty default
    /// priority, otherwise nothing.
    #[must_use]
    pub fn priority_for(&self, context: &ContextLabel) -> Option<&[Dimension]> {
        if let Some(over) = self.override_for(context) {
            if !over.priority.is_empty() {
                return Some(&over.priority);
            }
        }
        if self.default_priority.is_empty() {
            None
        } else {
            Some(&self.default_priority)
        }
    }
}

/// The full immutable rule configuration the engine runs on.
///
/// Loaded once at process start and shared read-only across requests; reload
/// is a restart. Both sections default to their empty structures, so an
/// engine constructed from `RuleConfig::default()` is valid and runs entirely
/// on documented defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// The thresholds document.
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// The conflict-rules document.
    #[serde(default)]
    pub rules: ConflictRules,
}

impl RuleConfig {
    /// Loads both configuration documents.
    ///
    /// A missing document resolves to its default structure; every other
    /// failure (unreadable file, parse error) is surfaced.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` for non-missing read failures and
    /// `LoadError::Malformed` when a present document does not parse.
    pub fn load(
        thresholds_path: impl AsRef<Path>,
        rules_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            thresholds: load_document(thresholds_path.as_ref())?,
            rules: load_document(rules_path.as_ref())?,
        })
    }
}

/// Loads one JSON document, resolving a missing file to `T::default()`.
fn load_document<T: Default + DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
