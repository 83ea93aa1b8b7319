//! Typed containers for fields and type references.

use indexmap::IndexMap;

use crate::{
    declaration::Declared,
    error::{Error, Result},
    member::FieldDeclaration,
    types::TypeReference,
};

/// Fields keyed by their logical name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FieldDeclarationMap {
    fields: IndexMap<String, FieldDeclaration>,
}

impl FieldDeclarationMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `field` under its own name.
    ///
    /// Fails if a field with that name is already present; the map is left
    /// unchanged in that case.
    pub fn add(&mut self, field: FieldDeclaration) -> Result<&mut FieldDeclaration> {
        let key = field.name().to_string();
        if self.fields.contains_key(&key) {
            return Err(Error::duplicate_key(key, "field map"));
        }
        Ok(self.fields.entry(key).or_insert(field))
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDeclaration> {
        self.fields.get_mut(name)
    }

    /// Check if a field named `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Alias of [`FieldDeclarationMap::contains`].
    pub fn contains_key(&self, name: &str) -> bool {
        self.contains(name)
    }

    /// Check by the field's name, not by identity.
    pub fn contains_value(&self, field: &FieldDeclaration) -> bool {
        self.contains(field.name())
    }

    /// Remove and return the field named `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<FieldDeclaration> {
        self.fields.shift_remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDeclaration)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered, indexable sequence of type references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCollection {
    items: Vec<TypeReference>,
}

impl TypeCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type.
    pub fn add(&mut self, ty: impl Into<TypeReference>) -> usize {
        self.items.push(ty.into());
        self.items.len() - 1
    }

    /// Append every type in `types`, in order.
    pub fn add_range(&mut self, types: &[TypeReference]) {
        self.items.extend_from_slice(types);
    }

    /// Append every type of another collection, in order.
    pub fn add_collection(&mut self, other: &TypeCollection) {
        self.add_range(&other.items);
    }

    pub fn get(&self, index: usize) -> Option<&TypeReference> {
        self.items.get(index)
    }

    /// Replace the type at `index`.
    pub fn set(&mut self, index: usize, ty: impl Into<TypeReference>) -> Result<()> {
        let len = self.items.len();
        let slot = self.items.get_mut(index).ok_or_else(|| {
            Error::invalid_argument("index", format!("{} is out of range for length {}", index, len))
        })?;
        *slot = ty.into();
        Ok(())
    }

    /// Position of the first occurrence of `ty`.
    pub fn index_of(&self, ty: &TypeReference) -> Option<usize> {
        self.items.iter().position(|t| t == ty)
    }

    pub fn contains(&self, ty: &TypeReference) -> bool {
        self.items.contains(ty)
    }

    /// Insert `ty` at `index`, shifting later items. `index` may equal the length.
    pub fn insert(&mut self, index: usize, ty: impl Into<TypeReference>) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::invalid_argument(
                "index",
                format!("{} is out of range for length {}", index, self.items.len()),
            ));
        }
        self.items.insert(index, ty.into());
        Ok(())
    }

    /// Remove the first occurrence of `ty`. Returns whether anything was removed.
    pub fn remove(&mut self, ty: &TypeReference) -> bool {
        match self.index_of(ty) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeReference> {
        self.items.iter()
    }

    /// A restartable cursor over the collection.
    pub fn enumerator(&self) -> TypeEnumerator<'_> {
        TypeEnumerator {
            items: &self.items,
            position: None,
        }
    }
}

impl From<Vec<TypeReference>> for TypeCollection {
    fn from(items: Vec<TypeReference>) -> Self {
        Self { items }
    }
}

impl FromIterator<TypeReference> for TypeCollection {
    fn from_iter<I: IntoIterator<Item = TypeReference>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TypeCollection {
    type Item = &'a TypeReference;
    type IntoIter = std::slice::Iter<'a, TypeReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Cursor over a [`TypeCollection`].
///
/// Starts before the first item. [`TypeEnumerator::current`] is `None`
/// until [`TypeEnumerator::move_next`] succeeds and again once the end is
/// passed; [`TypeEnumerator::reset`] rewinds to the start.
#[derive(Debug, Clone)]
pub struct TypeEnumerator<'a> {
    items: &'a [TypeReference],
    position: Option<usize>,
}

impl<'a> TypeEnumerator<'a> {
    /// Advance to the next item. Returns `false` at the end.
    pub fn move_next(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p.saturating_add(1));
        self.position = Some(next.min(self.items.len()));
        next < self.items.len()
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&'a TypeReference> {
        self.position.and_then(|p| self.items.get(p))
    }

    /// Rewind to before the first item.
    pub fn reset(&mut self) {
        self.position = None;
    }
}

impl<'a> Iterator for TypeEnumerator<'a> {
    type Item = &'a TypeReference;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current()
        } else {
            None
        }
    }
}
