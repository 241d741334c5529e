//! Duplicate detection among mapped attributes
//!
//! Under a quantitative level the same attribute may appear once per
//! aggregation; under a qualitative level it may appear once.

use std::collections::HashSet;
use vrole_mapping::{Aggregation, MappingAttribute};

/// Identity of a mapped attribute for duplicate detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuplicateKey<'a> {
    Qualitative(&'a str),
    Quantitative(&'a str, Aggregation),
}

impl<'a> DuplicateKey<'a> {
    pub fn for_attribute(attribute: &'a MappingAttribute, is_quantitative: bool) -> Self {
        if is_quantitative {
            let (name, aggregation) = attribute.key_quantitative();
            DuplicateKey::Quantitative(name, aggregation)
        } else {
            DuplicateKey::Qualitative(attribute.key_qualitative())
        }
    }
}

/// Indices of the attributes whose key already appeared earlier in the list.
pub fn repeated_attributes(attributes: &[MappingAttribute], is_quantitative: bool) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(attributes.len());
    let mut repeated = Vec::new();
    for (index, attribute) in attributes.iter().enumerate() {
        if !seen.insert(DuplicateKey::for_attribute(attribute, is_quantitative)) {
            repeated.push(index);
        }
    }
    repeated
}
