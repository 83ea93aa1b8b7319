//! Template manifest (`loom.toml`) types.

mod parse;
mod validate;

use indexmap::IndexMap;
use loom_dom::{CSHARP_NAMING, NamespaceDeclaration, TypeReference};
use serde::Deserialize;
use tracing::{debug, info};

pub use parse::parse_manifest;

use crate::{DataTemplate, DictionaryTemplate, Result, Template};

/// Root manifest for loom.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Target namespace
    pub namespace: NamespaceConfig,

    /// Data-class templates
    #[serde(default)]
    pub data: Vec<DataConfig>,

    /// Dictionary-class templates
    #[serde(default)]
    pub dictionary: Vec<DictionaryConfig>,
}

/// `[namespace]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceConfig {
    pub name: String,
    #[serde(default)]
    pub imports: Vec<String>,
}

/// One `[[data]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub name: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    /// Field name to type name, in document order
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

/// One `[[dictionary]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictionaryConfig {
    pub key: Option<String>,
    pub value: Option<String>,
    #[serde(default = "enabled")]
    pub item_get: bool,
    #[serde(default = "enabled")]
    pub item_set: bool,
    #[serde(default = "enabled")]
    pub add: bool,
    #[serde(default = "enabled")]
    pub contains: bool,
    #[serde(default = "enabled")]
    pub remove: bool,
}

fn enabled() -> bool {
    true
}

impl DataConfig {
    /// Build the configured template.
    pub fn template(&self) -> DataTemplate {
        let mut template = DataTemplate::new().read_only(self.read_only);
        if let Some(name) = &self.name {
            template = template.with_name(name.as_str());
        }
        for (name, type_name) in &self.fields {
            template.add_field(name.as_str(), TypeReference::named(type_name.as_str()));
        }
        template
    }
}

impl DictionaryConfig {
    /// Build the configured template.
    pub fn template(&self) -> DictionaryTemplate {
        let mut template = DictionaryTemplate::new();
        if let Some(key) = &self.key {
            template = template.with_key(TypeReference::named(key.as_str()));
        }
        if let Some(value) = &self.value {
            template = template.with_value(TypeReference::named(value.as_str()));
        }
        template.item_get = self.item_get;
        template.item_set = self.item_set;
        template.add = self.add;
        template.contains = self.contains;
        template.remove = self.remove;
        template
    }
}

impl Manifest {
    /// Number of templates in the manifest.
    pub fn template_count(&self) -> usize {
        self.data.len() + self.dictionary.len()
    }

    /// Run every template, data classes first, into a fresh namespace.
    pub fn generate(&self) -> Result<NamespaceDeclaration> {
        let mut namespace =
            NamespaceDeclaration::new(self.namespace.name.as_str(), CSHARP_NAMING.shared())?;
        for import in &self.namespace.imports {
            namespace.add_import(import.as_str());
        }

        for config in &self.data {
            config.template().generate(&mut namespace)?;
        }
        for config in &self.dictionary {
            config.template().generate(&mut namespace)?;
        }

        info!(
            namespace = %self.namespace.name,
            classes = namespace.classes().count(),
            "generated namespace"
        );
        debug!(templates = self.template_count(), "templates applied");
        Ok(namespace)
    }
}
