//! Dictionary-class template: a strongly typed wrapper over `DictionaryBase`.

use loom_dom::{
    ClassDeclaration, Error, Expression, NamespaceDeclaration, Result, SystemType, TypeReference,
};
use tracing::debug;

use crate::Template;

/// Generates `<Key><Value>Dictionary` deriving from
/// `System.Collections.DictionaryBase`.
///
/// Every generated member forwards to the inherited `Dictionary` storage.
/// Each toggle enables one member and all default to `true`.
#[derive(Debug, Clone)]
pub struct DictionaryTemplate {
    key: Option<TypeReference>,
    value: Option<TypeReference>,
    /// Emit the indexer getter.
    pub item_get: bool,
    /// Emit the indexer setter.
    pub item_set: bool,
    /// Emit `Add(key, value)`.
    pub add: bool,
    /// Emit `Contains(key)`.
    pub contains: bool,
    /// Emit `Remove(key)`.
    pub remove: bool,
}

impl Default for DictionaryTemplate {
    fn default() -> Self {
        Self {
            key: None,
            value: None,
            item_get: true,
            item_set: true,
            add: true,
            contains: true,
            remove: true,
        }
    }
}

impl DictionaryTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<TypeReference>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<TypeReference>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn key(&self) -> Option<&TypeReference> {
        self.key.as_ref()
    }

    pub fn value(&self) -> Option<&TypeReference> {
        self.value.as_ref()
    }

    fn types(&self) -> Result<(&TypeReference, &TypeReference)> {
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| Error::configuration("key type not set"))?;
        let value = self
            .value
            .as_ref()
            .ok_or_else(|| Error::configuration("value type not set"))?;
        Ok((key, value))
    }

    /// `<Key><Value>Dictionary`, from the short names of both types.
    pub fn class_name(&self) -> Result<String> {
        let (key, value) = self.types()?;
        Ok(format!("{}{}Dictionary", key.name(), value.name()))
    }

    fn add_indexer(
        &self,
        class: &mut ClassDeclaration,
        key: &TypeReference,
        value: &TypeReference,
    ) -> Result<()> {
        let mut indexer = class.indexer(value.clone())?;
        let key = indexer.signature_mut().add_param(key.clone(), "key", false)?;
        if self.item_get {
            indexer.get_mut().ret(
                storage()
                    .item(Expression::arg(&key))
                    .cast(value.clone()),
            );
        }
        if self.item_set {
            indexer
                .set_mut()
                .assign(storage().item(Expression::arg(&key)), Expression::value());
        }
        class.add_member(indexer)
    }

    fn add_add(
        &self,
        class: &mut ClassDeclaration,
        key: &TypeReference,
        value: &TypeReference,
    ) -> Result<()> {
        let mut method = class.method("Add")?;
        let key = method.signature_mut().add_param(key.clone(), "key", false)?;
        let value = method
            .signature_mut()
            .add_param(value.clone(), "value", false)?;
        method
            .body_mut()
            .add(storage().method("Add").invoke_params([&key, &value]));
        class.add_member(method)
    }

    fn add_contains(&self, class: &mut ClassDeclaration, key: &TypeReference) -> Result<()> {
        let mut method = class.method("Contains")?;
        method.signature_mut().set_return_type(SystemType::BOOLEAN);
        let key = method.signature_mut().add_param(key.clone(), "key", false)?;
        method
            .body_mut()
            .ret(storage().method("Contains").invoke_params([&key]));
        class.add_member(method)
    }

    fn add_remove(&self, class: &mut ClassDeclaration, key: &TypeReference) -> Result<()> {
        let mut method = class.method("Remove")?;
        let key = method.signature_mut().add_param(key.clone(), "key", false)?;
        method
            .body_mut()
            .add(storage().method("Remove").invoke_params([&key]));
        class.add_member(method)
    }
}

/// `this.Dictionary`, the storage inherited from `DictionaryBase`.
fn storage() -> Expression {
    Expression::this().prop("Dictionary")
}

impl Template for DictionaryTemplate {
    fn generate(&mut self, namespace: &mut NamespaceDeclaration) -> Result<()> {
        let (key, value) = self.types()?;
        let mut class = namespace
            .class(self.class_name()?)?
            .with_parent(SystemType::DICTIONARY_BASE);

        let constructor = class.constructor()?;
        class.add_member(constructor)?;
        if self.item_get || self.item_set {
            self.add_indexer(&mut class, key, value)?;
        }
        if self.add {
            self.add_add(&mut class, key, value)?;
        }
        if self.contains {
            self.add_contains(&mut class, key)?;
        }
        if self.remove {
            self.add_remove(&mut class, key)?;
        }

        debug!(
            class = %self.class_name()?,
            members = class.members().len(),
            "generated dictionary class"
        );
        namespace.add_class(class)?;
        Ok(())
    }
}
