//! Levels of measurement
//!
//! The domain is fixed and totally ordered from the qualitative levels to the
//! quantitative one. Every level is either qualitative or quantitative, never
//! both.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A level of measurement of data.
///
/// Variants are declared in ascending order, so the derived `Ord` is the
/// lattice order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementLevel {
    /// Unordered categories
    Nominal,
    /// Ordered categories
    Ordinal,
    /// Numbers with meaningful differences
    Quantitative,
}

impl MeasurementLevel {
    /// The whole domain, ascending.
    pub const DOMAIN: [MeasurementLevel; 3] = [
        MeasurementLevel::Nominal,
        MeasurementLevel::Ordinal,
        MeasurementLevel::Quantitative,
    ];

    pub fn domain() -> &'static [MeasurementLevel] {
        &Self::DOMAIN
    }

    /// Unique key of the level.
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementLevel::Nominal => "nominal",
            MeasurementLevel::Ordinal => "ordinal",
            MeasurementLevel::Quantitative => "quantitative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementLevel::Nominal => "Nominal",
            MeasurementLevel::Ordinal => "Ordinal",
            MeasurementLevel::Quantitative => "Quantitative",
        }
    }

    /// Looks a key up in the domain.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::DOMAIN.iter().copied().find(|level| level.key() == key)
    }

    /// Compares two levels according to the lattice order.
    pub fn compare(a: MeasurementLevel, b: MeasurementLevel) -> Ordering {
        a.cmp(&b)
    }

    pub fn is_qualitative(&self) -> bool {
        !self.is_quantitative()
    }

    pub fn is_quantitative(&self) -> bool {
        matches!(self, MeasurementLevel::Quantitative)
    }
}

impl fmt::Display for MeasurementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MeasurementLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| TypeError::UnknownLevel(s.to_string()))
    }
}

/// An ascending, duplicate-free set of measurement levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<MeasurementLevel>", into = "Vec<MeasurementLevel>")]
pub struct LevelSet(Vec<MeasurementLevel>);

impl LevelSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn has(&self, level: MeasurementLevel) -> bool {
        self.0.contains(&level)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MeasurementLevel> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[MeasurementLevel] {
        &self.0
    }

    /// The lowest level, if any.
    pub fn first(&self) -> Option<MeasurementLevel> {
        self.0.first().copied()
    }

    /// The highest level, if any.
    pub fn last(&self) -> Option<MeasurementLevel> {
        self.0.last().copied()
    }

    /// Merges levels without removing or moving existing entries.
    ///
    /// New levels are appended and the set is then re-sorted ascending.
    /// Returns the levels that were actually added.
    pub fn merge<I>(&mut self, levels: I) -> Vec<MeasurementLevel>
    where
        I: IntoIterator<Item = MeasurementLevel>,
    {
        let mut added = Vec::new();
        for level in levels {
            if !self.has(level) {
                self.0.push(level);
                added.push(level);
            }
        }
        self.0.sort_by(|a, b| MeasurementLevel::compare(*a, *b));
        added
    }

    pub fn any_qualitative(&self) -> bool {
        self.0.iter().any(MeasurementLevel::is_qualitative)
    }

    pub fn any_quantitative(&self) -> bool {
        self.0.iter().any(MeasurementLevel::is_quantitative)
    }
}

impl From<Vec<MeasurementLevel>> for LevelSet {
    fn from(levels: Vec<MeasurementLevel>) -> Self {
        let mut set = LevelSet::new();
        set.merge(levels);
        set
    }
}

impl From<&[MeasurementLevel]> for LevelSet {
    fn from(levels: &[MeasurementLevel]) -> Self {
        let mut set = LevelSet::new();
        set.merge(levels.iter().copied());
        set
    }
}

impl From<LevelSet> for Vec<MeasurementLevel> {
    fn from(set: LevelSet) -> Self {
        set.0
    }
}

impl FromIterator<MeasurementLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = MeasurementLevel>>(iter: I) -> Self {
        let mut set = LevelSet::new();
        set.merge(iter);
        set
    }
}

/// Formats as a quoted list: `'nominal', 'ordinal'`.
impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.0.iter().map(|l| format!("'{}'", l)).collect();
        f.write_str(&quoted.join(", "))
    }
}
