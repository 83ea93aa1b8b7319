//! Data-class template: one private field and one wrapping property per entry.

use indexmap::IndexMap;
use loom_dom::{Error, NamespaceDeclaration, PropertyDeclaration, Result, TypeReference};
use tracing::debug;

use crate::Template;

/// Generates `<name>Data`, a class of fields wrapped by properties.
///
/// # Example
///
/// ```
/// use loom_dom::{CSHARP_NAMING, NamespaceDeclaration};
/// use loom_templates::{DataTemplate, Template};
///
/// let mut ns = NamespaceDeclaration::new("Acme", CSHARP_NAMING.shared()).unwrap();
/// let mut template = DataTemplate::new()
///     .with_name("Customer")
///     .with_field("name", "String");
/// template.generate(&mut ns).unwrap();
///
/// assert!(ns.class_named("CustomerData").is_some());
/// assert!(template.properties().unwrap().contains_key("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataTemplate {
    name: Option<String>,
    read_only: bool,
    fields: IndexMap<String, TypeReference>,
    properties: Option<IndexMap<String, PropertyDeclaration>>,
}

impl DataTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base class name; the class is named `<name>Data`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Make every generated property get-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Add a field named `name` of type `type_name`.
    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.add_field(name, TypeReference::named(type_name));
        self
    }

    /// Add a field, replacing any earlier field of the same name.
    pub fn add_field(&mut self, name: impl Into<String>, field_type: impl Into<TypeReference>) {
        self.fields.insert(name.into(), field_type.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn fields(&self) -> &IndexMap<String, TypeReference> {
        &self.fields
    }

    /// Properties of the last successful generation, keyed by field name.
    pub fn properties(&self) -> Option<&IndexMap<String, PropertyDeclaration>> {
        self.properties.as_ref()
    }
}

impl Template for DataTemplate {
    fn generate(&mut self, namespace: &mut NamespaceDeclaration) -> Result<()> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| Error::configuration("name not set"))?;

        let mut class = namespace.class(format!("{}Data", name))?;
        let mut properties = IndexMap::with_capacity(self.fields.len());
        for (field_name, field_type) in &self.fields {
            let field = class.field(field_name.as_str(), field_type.clone())?;
            let property = class.property_for_field(&field, true, !self.read_only, false)?;
            class.add_field(field)?;
            class.add_member(property.clone())?;
            properties.insert(field_name.clone(), property);
        }

        debug!(
            class = %format!("{}Data", name),
            fields = properties.len(),
            read_only = self.read_only,
            "generated data class"
        );
        namespace.add_class(class)?;
        self.properties = Some(properties);
        Ok(())
    }
}
