//! Dimension names and the ordered score mapping.
//!
//! A dimension is one named ethical perspective being scored (for example
//! `net_effect`, `rule_compliance`, `character_consistency`). The set is small
//! and conceptually fixed per deployment, but nothing in the engine hard-codes
//! it — any validated name is a dimension.
//!
//! A `ScoreSet` maps dimensions to scores in [0, 1] and preserves insertion
//! order end-to-end. Order is a contract, not an accident: it determines
//! tie-breaking in conflict analysis and the emission order of questions.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A named ethical dimension.
///
/// # Examples
///
/// ```
/// use ethicore::Dimension;
///
/// let dim = Dimension::new("net_effect").unwrap();
/// assert_eq!(dim.name(), "net_effect");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Dimension(String);

impl TryFrom<String> for Dimension {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl Dimension {
    /// Creates a dimension with validation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyDimensionName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyDimensionName);
        }
        Ok(Self(name))
    }

    /// The utilitarian perspective: net effect of the decision.
    #[must_use]
    pub fn net_effect() -> Self {
        Self("net_effect".to_string())
    }

    /// The deontological perspective: compliance with rules and duties.
    #[must_use]
    pub fn rule_compliance() -> Self {
        Self("rule_compliance".to_string())
    }

    /// The virtue-based perspective: consistency with character.
    #[must_use]
    pub fn character_consistency() -> Self {
        Self("character_consistency".to_string())
    }

    /// Returns the dimension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An insertion-ordered mapping from dimension to score.
///
/// Scores are validated into [0.0, 1.0] on insertion; NaN is rejected.
/// Re-inserting an existing dimension updates the value in place without
/// moving its position, so the order of a set is always well-defined.
///
/// The weighting stage never mutates a `ScoreSet` — it produces a new one —
/// so a set handed to the engine is stable for the life of the request.
///
/// # Examples
///
/// ```
/// use ethicore::{Dimension, ScoreSet};
///
/// let mut scores = ScoreSet::new();
/// scores.insert(Dimension::net_effect(), 0.9).unwrap();
/// scores.insert(Dimension::rule_compliance(), 0.4).unwrap();
///
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores.get(&Dimension::rule_compliance()), Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreSet {
    entries: Vec<(Dimension, f64)>,
}

impl ScoreSet {
    /// Minimum valid score value.
    pub const MIN_VALUE: f64 = 0.0;

    /// Maximum valid score value.
    pub const MAX_VALUE: f64 = 1.0;

    /// Creates an empty score set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or updates a dimension's score.
    ///
    /// An existing dimension keeps its position; a new one is appended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ScoreOutOfRange` if the value is NaN or
    /// outside [0.0, 1.0].
    pub fn insert(&mut self, dimension: Dimension, value: f64) -> Result<(), ValidationError> {
        Self::validate_value(value)?;
        match self.entries.iter_mut().find(|(d, _)| *d == dimension) {
            Some((_, v)) => *v = value,
            None => self.entries.push((dimension, value)),
        }
        Ok(())
    }

    /// Returns the score for a dimension, if present.
    #[must_use]
    pub fn get(&self, dimension: &Dimension) -> Option<f64> {
        self.entries
            .iter()
            .find(|(d, _)| d == dimension)
            .map(|(_, v)| *v)
    }

    /// Returns true if the dimension is present.
    #[must_use]
    pub fn contains(&self, dimension: &Dimension) -> bool {
        self.entries.iter().any(|(d, _)| d == dimension)
    }

    /// Number of dimensions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Dimension, f64)> {
        self.entries.iter().map(|(d, v)| (d, *v))
    }

    /// Internal constructor for stages that have already validated or
    /// deliberately bypass the range check (the weighting stage clamps only
    /// the upper bound, preserving the original one-sided behavior).
    pub(crate) fn from_entries_unchecked(entries: Vec<(Dimension, f64)>) -> Self {
        Self { entries }
    }

    fn validate_value(value: f64) -> Result<(), ValidationError> {
        if value.is_nan() || !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            return Err(ValidationError::ScoreOutOfRange { value });
        }
        Ok(())
    }
}

// Serde is hand-written as a JSON map so that document order survives
// deserialization regardless of serde_json features. Deserialization applies
// the same range validation as `insert`.
impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (dimension, value) in &self.entries {
            map.serialize_entry(dimension, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreSetVisitor;

        impl<'de> Visitor<'de> for ScoreSetVisitor {
            type Value = ScoreSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of dimension name to score in [0.0, 1.0]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = ScoreSet::new();
                while let Some((dimension, value)) = access.next_entry::<Dimension, f64>()? {
                    set.insert(dimension, value)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ScoreSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_valid_name() {
        let dim = Dimension::new("net_effect").unwrap();
        assert_eq!(dim.name(), "net_effect");
        assert_eq!(format!("{dim}"), "net_effect");
    }

    #[test]
    fn test_dimension_empty_name() {
        assert!(Dimension::new("").is_err());
    }

    #[test]
    fn test_dimension_canonical_constructors() {
        assert_eq!(Dimension::net_effect().name(), "net_effect");
        assert_eq!(Dimension::rule_compliance().name(), "rule_compliance");
        assert_eq!(
            Dimension::character_consistency().name(),
            "character_consistency"
        );
    }

    #[test]
    fn test_score_set_insert_and_get() {
        let mut set = ScoreSet::new();
        set.insert(Dimension::net_effect(), 0.75).unwrap();

        assert_eq!(set.get(&Dimension::net_effect()), Some(0.75));
        assert_eq!(set.get(&Dimension::rule_compliance()), None);
        assert!(set.contains(&Dimension::net_effect()));
    }

    #[test]
    fn test_score_set_rejects_out_of_range() {
        let mut set = ScoreSet::new();
        assert!(set.insert(Dimension::net_effect(), -0.1).is_err());
        assert!(set.insert(Dimension::net_effect(), 1.1).is_err());
        assert!(set.insert(Dimension::net_effect(), f64::NAN).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_score_set_accepts_bounds() {
        let mut set = ScoreSet::new();
        set.insert(Dimension::new("a").unwrap(), 0.0).unwrap();
        set.insert(Dimension::new("b").unwrap(), 1.0).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_score_set_preserves_insertion_order() {
        let mut set = ScoreSet::new();
        set.insert(Dimension::new("c").unwrap(), 0.3).unwrap();
        set.insert(Dimension::new("a").unwrap(), 0.1).unwrap();
        set.insert(Dimension::new("b").unwrap(), 0.2).unwrap();

        let names: Vec<&str> = set.iter().map(|(d, _)| d.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_score_set_update_keeps_position() {
        let mut set = ScoreSet::new();
        set.insert(Dimension::new("a").unwrap(), 0.1).unwrap();
        set.insert(Dimension::new("b").unwrap(), 0.2).unwrap();
        set.insert(Dimension::new("a").unwrap(), 0.9).unwrap();

        let entries: Vec<(&str, f64)> = set.iter().map(|(d, v)| (d.name(), v)).collect();
        assert_eq!(entries, vec![("a", 0.9), ("b", 0.2)]);
    }

    #[test]
    fn test_score_set_serialization_round_trip() {
        let mut set = ScoreSet::new();
        set.insert(Dimension::new("z").unwrap(), 0.9).unwrap();
        set.insert(Dimension::new("a").unwrap(), 0.1).unwrap();

        let json = serde_json::to_string(&set).unwrap();
        let deserialized: ScoreSet = serde_json::from_str(&json).unwrap();

        let names: Vec<&str> = deserialized.iter().map(|(d, _)| d.name()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(deserialized, set);
    }

    #[test]
    fn test_score_set_deserialization_validates_range() {
        let err = serde_json::from_str::<ScoreSet>(r#"{"a": 1.5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_score_set_deserialization_preserves_document_order() {
        let set: ScoreSet =
            serde_json::from_str(r#"{"virtue": 0.3, "duty": 0.8, "utility": 0.5}"#).unwrap();
        let names: Vec<&str> = set.iter().map(|(d, _)| d.name()).collect();
        assert_eq!(names, vec!["virtue", "duty", "utility"]);
    }
}
