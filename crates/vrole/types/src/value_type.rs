//! Value types
//!
//! A single-rooted hierarchy of value types. Types are referenced by id
//! ([`TypeRef`]) and resolved through a [`ValueTypeRegistry`].

use crate::error::{TypeError, TypeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Ids of the built-in value types.
pub mod builtin {
    pub const VALUE: &str = "value";
    pub const ELEMENT: &str = "element";
    pub const SIMPLE: &str = "simple";
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
    pub const COMPLEX: &str = "complex";
    pub const LIST: &str = "list";
}

/// Reference to a value type, by id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The root of the value type hierarchy.
    pub fn value() -> Self {
        Self::new(builtin::VALUE)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TypeRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A resolved value type descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueType {
    pub id: TypeRef,
    /// `None` only for the root
    pub base: Option<TypeRef>,
    pub is_abstract: bool,
}

/// Declaration of a custom value type, as found in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTypeSpec {
    pub id: TypeRef,
    pub base: TypeRef,
    #[serde(default)]
    pub is_abstract: bool,
}

/// Registry of value types.
///
/// Created with the built-in hierarchy:
///
/// ```text
/// value*
/// ├── element*
/// │   └── simple*
/// │       ├── string
/// │       ├── number
/// │       ├── boolean
/// │       └── date
/// ├── complex*
/// └── list*
/// ```
///
/// (`*` marks abstract types.) A type's base must be registered before the
/// type itself, so the hierarchy can never contain cycles.
#[derive(Clone, Debug)]
pub struct ValueTypeRegistry {
    types: HashMap<TypeRef, ValueType>,
}

impl ValueTypeRegistry {
    pub fn new() -> Self {
        let mut types = HashMap::new();
        types.insert(
            TypeRef::value(),
            ValueType {
                id: TypeRef::value(),
                base: None,
                is_abstract: true,
            },
        );
        let mut registry = Self { types };

        let builtins: [(&str, &str, bool); 8] = [
            (builtin::ELEMENT, builtin::VALUE, true),
            (builtin::SIMPLE, builtin::ELEMENT, true),
            (builtin::STRING, builtin::SIMPLE, false),
            (builtin::NUMBER, builtin::SIMPLE, false),
            (builtin::BOOLEAN, builtin::SIMPLE, false),
            (builtin::DATE, builtin::SIMPLE, false),
            (builtin::COMPLEX, builtin::VALUE, true),
            (builtin::LIST, builtin::VALUE, true),
        ];
        for (id, base, is_abstract) in builtins {
            registry.types.insert(
                TypeRef::new(id),
                ValueType {
                    id: TypeRef::new(id),
                    base: Some(TypeRef::new(base)),
                    is_abstract,
                },
            );
        }
        registry
    }

    /// Registers a custom value type deriving from `base`.
    pub fn register(
        &mut self,
        id: impl Into<TypeRef>,
        base: impl Into<TypeRef>,
        is_abstract: bool,
    ) -> TypeResult<&ValueType> {
        let id = id.into();
        let base = base.into();
        if self.types.contains_key(&id) {
            return Err(TypeError::DuplicateType(id));
        }
        if !self.types.contains_key(&base) {
            return Err(TypeError::UnknownType(base));
        }

        debug!(type_id = %id, base = %base, is_abstract, "registered value type");
        let entry = self.types.entry(id.clone()).or_insert(ValueType {
            id,
            base: Some(base),
            is_abstract,
        });
        Ok(entry)
    }

    pub fn register_spec(&mut self, spec: &ValueTypeSpec) -> TypeResult<&ValueType> {
        self.register(spec.id.clone(), spec.base.clone(), spec.is_abstract)
    }

    pub fn resolve(&self, type_ref: &TypeRef) -> TypeResult<&ValueType> {
        self.types
            .get(type_ref)
            .ok_or_else(|| TypeError::UnknownType(type_ref.clone()))
    }

    pub fn contains(&self, type_ref: &TypeRef) -> bool {
        self.types.contains_key(type_ref)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn is_abstract(&self, type_ref: &TypeRef) -> TypeResult<bool> {
        Ok(self.resolve(type_ref)?.is_abstract)
    }

    /// Whether `sub` is `sup` or derives from it. Unknown types are subtypes
    /// of nothing.
    pub fn is_subtype_of(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        let mut current = self.types.get(sub);
        while let Some(ty) = current {
            if &ty.id == sup {
                return true;
            }
            current = ty.base.as_ref().and_then(|base| self.types.get(base));
        }
        false
    }

    /// Whether values of the type can only be measured qualitatively.
    ///
    /// Only numbers and dates admit a quantitative level.
    pub fn is_qualitative_only(&self, type_ref: &TypeRef) -> bool {
        !self.is_subtype_of(type_ref, &TypeRef::new(builtin::NUMBER))
            && !self.is_subtype_of(type_ref, &TypeRef::new(builtin::DATE))
    }
}

impl Default for ValueTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
