//! Mapping attributes
//!
//! A mapping attribute binds a visual role to one dataset attribute, by name.

use std::fmt;
use std::str::FromStr;
use vrole_types::TypeError;

/// How values of a quantitative attribute are aggregated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aggregation {
    #[default]
    Sum,
    Avg,
    Min,
    Max,
    Count,
    CountDistinct,
}

impl Aggregation {
    pub fn key(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Count => "count",
            Aggregation::CountDistinct => "countDistinct",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Aggregation {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Aggregation::Sum),
            "avg" => Ok(Aggregation::Avg),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            "count" => Ok(Aggregation::Count),
            "countDistinct" => Ok(Aggregation::CountDistinct),
            other => Err(TypeError::argument_invalid(
                "aggregation",
                format!("unknown aggregation '{}'", other),
            )),
        }
    }
}

/// A reference from a role mapping to a dataset attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MappingAttribute {
    /// Name of the dataset attribute
    pub name: String,
    /// Only meaningful when the role operates quantitatively
    pub aggregation: Aggregation,
}

impl MappingAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aggregation: Aggregation::default(),
        }
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Identity of the attribute when the role operates qualitatively.
    pub fn key_qualitative(&self) -> &str {
        &self.name
    }

    /// Identity of the attribute when the role operates quantitatively.
    pub fn key_quantitative(&self) -> (&str, Aggregation) {
        (&self.name, self.aggregation)
    }
}

impl From<&str> for MappingAttribute {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
