use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::ResolveError;

/// A single `property: value` pair.
///
/// `value` is `None` when it referenced a theme token that doesn't exist. The
/// declaration is kept so callers can inspect it, but it is dropped when
/// serialized, the same way a CSS engine drops an invalid value.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: Option<String>,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: Some(value.into()),
        }
    }

    pub fn invalid(property: &'static str) -> Self {
        Self {
            property,
            value: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {};", self.property, value),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declarations(SmallVec<[Declaration; 8]>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.0.push(declaration);
    }

    /// Pushes a declaration whose value may have failed to resolve.
    pub fn set(&mut self, property: &'static str, value: Option<impl Into<String>>) {
        self.push(Declaration {
            property,
            value: value.map(Into::into),
        });
    }

    /// Appends `other` on top of these declarations.
    pub fn stack(mut self, other: Declarations) -> Self {
        self.extend(other);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the cascaded value of `property`: the last valid declaration.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .filter(|declaration| declaration.property == property)
            .find_map(|declaration| declaration.value.as_deref())
    }

    /// Gets the last declaration of `property`, valid or not.
    pub fn declared(&self, property: &str) -> Option<&Declaration> {
        self.0
            .iter()
            .rev()
            .find(|declaration| declaration.property == property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.declared(property).is_some()
    }

    /// Every property with its cascaded value, in order of first appearance.
    pub fn cascade(&self) -> IndexMap<&'static str, &str> {
        let mut cascaded = IndexMap::new();
        for declaration in &self.0 {
            if let Some(value) = &declaration.value {
                cascaded.insert(declaration.property, value.as_str());
            }
        }
        cascaded
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter().filter(|declaration| !declaration.is_valid())
    }

    /// Fails on the first declaration that referenced an unknown token.
    pub fn ensure_valid(&self) -> Result<(), ResolveError> {
        match self.invalid().next() {
            Some(declaration) => Err(ResolveError::Unresolved {
                property: declaration.property,
            }),
            None => Ok(()),
        }
    }
}

impl Extend<Declaration> for Declarations {
    fn extend<T: IntoIterator<Item = Declaration>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Declaration> for Declarations {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Declarations {
    type Item = Declaration;
    type IntoIter = smallvec::IntoIter<[Declaration; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for declaration in self.0.iter().filter(|declaration| declaration.is_valid()) {
            writeln!(f, "{declaration}")?;
        }
        Ok(())
    }
}
